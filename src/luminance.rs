//! Relative luminance and APCA brightness of a [`Color`].

use crate::{
    color::{Color, Component, Components},
    math::weighted_sum,
};

/// Channel weights of the WCAG 2.x relative luminance.
pub const WCAG_COEFFICIENTS: Components = Components(0.2126, 0.7152, 0.0722);

/// Channel weights of the APCA screen brightness.
pub const APCA_COEFFICIENTS: Components = Components(0.2126729, 0.7151522, 0.0721750);

/// Below this normalized channel value the sRGB transfer curve is linear.
const LINEAR_THRESHOLD: Component = 0.03928;

/// Exponent of the sRGB transfer curve, also used as a plain power by APCA.
const MAIN_TRC: Component = 2.4;

fn linearize(channel: Component) -> Component {
    let c = channel / 255.0;
    if c < LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(MAIN_TRC)
    }
}

/// Relative luminance on a 0 to 100 scale of unrounded channels in the range
/// 0 to 255.
pub(crate) fn luminance_of(channels: &Components) -> Component {
    weighted_sum(&channels.map(linearize), &WCAG_COEFFICIENTS) * 100.0
}

/// APCA screen brightness of unrounded channels in the range 0 to 255.
pub(crate) fn brightness_of(channels: &Components) -> Component {
    weighted_sum(
        &channels.map(|c| (c / 255.0).powf(MAIN_TRC)),
        &APCA_COEFFICIENTS,
    )
}

/// Channels of `foreground` blended over `background` by the opacity of the
/// foreground. Both colors must be set.
pub(crate) fn composite(foreground: &Color, background: &Color) -> Option<Components> {
    let [fr, fg, fb] = foreground.channels()?;
    let [br, bg, bb] = background.channels()?;
    let alpha = foreground.opacity();

    let blend = |f: u8, b: u8| (1.0 - alpha) * b as Component + alpha * f as Component;
    Some(Components(blend(fr, br), blend(fg, bg), blend(fb, bb)))
}

fn channel_components(color: &Color) -> Option<Components> {
    let [red, green, blue] = color.channels()?;
    Some(Components(
        red as Component,
        green as Component,
        blue as Component,
    ))
}

impl Color {
    /// The WCAG relative luminance on a 0 to 100 scale.
    /// ```rust
    /// use luminant::Color;
    /// assert_eq!(Color::from("#ffffff").luminance().map(f64::round), Some(100.0));
    /// assert_eq!(Color::from("#000000").luminance(), Some(0.0));
    /// ```
    pub fn luminance(&self) -> Option<Component> {
        channel_components(self).map(|channels| luminance_of(&channels))
    }

    /// The screen brightness used by APCA, on a 0 to 1 scale.
    pub fn brightness(&self) -> Option<Component> {
        channel_components(self).map(|channels| brightness_of(&channels))
    }

    /// Returns true if the luminance is above 0, i.e. any channel is above 0.
    pub fn can_darken(&self) -> bool {
        self.channels()
            .is_some_and(|channels| channels.iter().any(|&c| c > u8::MIN))
    }

    /// Returns true if the luminance is below 100, i.e. any channel is below
    /// 255.
    pub fn can_lighten(&self) -> bool {
        self.channels()
            .is_some_and(|channels| channels.iter().any(|&c| c < u8::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn luminance() {
        assert_component_eq!(Color::from("#ffffff").luminance().unwrap(), 100.0, 1e-9);
        assert_component_eq!(Color::from("#000000").luminance().unwrap(), 0.0);
        assert_component_eq!(Color::from("#ff0000").luminance().unwrap(), 21.26, 1e-9);
        assert_component_eq!(Color::from("#777777").luminance().unwrap(), 18.447, 1e-2);
        assert_component_eq!(Color::from("#010101").luminance().unwrap(), 0.03035, 1e-5);
        assert_eq!(Color::new().luminance(), None);
    }

    #[test]
    fn brightness() {
        assert_component_eq!(Color::from("#ffffff").brightness().unwrap(), 1.0, 1e-6);
        assert_component_eq!(Color::from("#000000").brightness().unwrap(), 0.0);
        assert_component_eq!(Color::from("#0000ff").brightness().unwrap(), 0.072175, 1e-9);
        assert_eq!(Color::new().brightness(), None);
    }

    #[test]
    fn darken_and_lighten_guards() {
        assert!(!Color::from("#000").can_darken());
        assert!(Color::from("#000").can_lighten());
        assert!(Color::from("#fff").can_darken());
        assert!(!Color::from("#fff").can_lighten());
        assert!(Color::from("#010000").can_darken());
        assert!(Color::from("#fffffe").can_lighten());
        assert!(!Color::new().can_darken());
        assert!(!Color::new().can_lighten());
    }

    #[test]
    fn composite_uses_foreground_opacity() {
        let fg = Color::from("#fff6");
        let bg = Color::from("#000");
        let blended = composite(&fg, &bg).unwrap();
        assert_component_eq!(blended.0, 102.0, 1e-9);
        assert_component_eq!(blended.2, 102.0, 1e-9);

        let opaque = composite(&Color::from("#123456"), &bg).unwrap();
        assert_eq!(opaque, Components(18.0, 52.0, 86.0));

        assert_eq!(composite(&Color::new(), &bg), None);
    }
}
