//! Step a [`Color`] darker or lighter one channel unit at a time.

use crate::color::Color;

impl Color {
    /// Subtract 1 from every channel. See [`Color::darken_by`].
    pub fn darken(&mut self) -> &mut Self {
        self.darken_by(1)
    }

    /// Subtract `degree` from every channel, stopping at 0. An unset color
    /// starts from black. Opacity is left untouched.
    /// ```rust
    /// use luminant::Color;
    /// let mut c = Color::from("#0a1480");
    /// c.darken_by(16);
    /// assert_eq!(c.hcolor().as_deref(), Some("#000470"));
    /// ```
    pub fn darken_by(&mut self, degree: u8) -> &mut Self {
        let [red, green, blue] = self.channels().unwrap_or([u8::MIN; 3]);
        self.store_rgb(
            red.saturating_sub(degree),
            green.saturating_sub(degree),
            blue.saturating_sub(degree),
        );
        self
    }

    /// Add 1 to every channel. See [`Color::lighten_by`].
    pub fn lighten(&mut self) -> &mut Self {
        self.lighten_by(1)
    }

    /// Add `degree` to every channel, stopping at 255. An unset color starts
    /// from white. Opacity is left untouched.
    pub fn lighten_by(&mut self, degree: u8) -> &mut Self {
        let [red, green, blue] = self.channels().unwrap_or([u8::MAX; 3]);
        self.store_rgb(
            red.saturating_add(degree),
            green.saturating_add(degree),
            blue.saturating_add(degree),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn darken() {
        let mut c = Color::from("#bbbbbb");
        c.darken();
        assert_eq!(c.hcolor().as_deref(), Some("#bababa"));
        c.darken().darken();
        assert_eq!(c.hcolor().as_deref(), Some("#b8b8b8"));

        let mut c = Color::from("#010203");
        c.darken_by(2);
        assert_eq!(c.channels(), Some([0, 0, 1]));
    }

    #[test]
    fn lighten() {
        let mut c = Color::from("#fefdfc");
        c.lighten();
        assert_eq!(c.hcolor().as_deref(), Some("#fffefd"));
        c.lighten_by(10);
        assert_eq!(c.hcolor().as_deref(), Some("#ffffff"));
    }

    #[test]
    fn unset_colors_start_at_the_extremes() {
        let mut c = Color::new();
        c.darken();
        assert_eq!(c.hcolor().as_deref(), Some("#000000"));

        let mut c = Color::new();
        c.lighten();
        assert_eq!(c.hcolor().as_deref(), Some("#ffffff"));
    }

    #[test]
    fn hsl_follows_and_opacity_stays() {
        let mut c = Color::from("#80808080");
        c.lighten_by(0x7f);
        assert_eq!(c.hcolor().as_deref(), Some("#ffffff80"));
        assert_component_eq!(c.lightness().unwrap(), 1.0);
        assert_component_eq!(c.opacity(), 0.5);
    }
}
