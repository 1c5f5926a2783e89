//! WCAG contrast between a foreground and a background color, with a search
//! that adjusts either color until a threshold is met.

use std::{
    cell::{Ref, RefCell, RefMut},
    rc::Rc,
};

use crate::{
    apca,
    color::{Color, Component},
    luminance::{composite, luminance_of},
    math::round_to,
    models::{Hsl, Rgb},
};

/// Upper bound on the iterations of [`Contrast::search`]. Stepping one unit
/// per iteration, no search needs more than 255.
const MAX_SEARCH_STEPS: usize = 1024;

/// A shared, mutable [`Color`].
///
/// Cloning a handle aliases the color: a [`Contrast`] holding the handle and
/// the caller observe the same mutations.
#[derive(Clone, Debug, Default)]
pub struct ColorHandle(Rc<RefCell<Color>>);

impl ColorHandle {
    /// Wrap a color in a new handle.
    pub fn new(color: Color) -> Self {
        Self(Rc::new(RefCell::new(color)))
    }

    /// Borrow the color.
    pub fn borrow(&self) -> Ref<'_, Color> {
        self.0.borrow()
    }

    /// Borrow the color mutably.
    pub fn borrow_mut(&self) -> RefMut<'_, Color> {
        self.0.borrow_mut()
    }

    /// Return a copy of the color.
    pub fn get(&self) -> Color {
        self.0.borrow().clone()
    }

    /// Replace the color in place, visible through every alias.
    pub fn set(&self, color: Color) {
        *self.0.borrow_mut() = color;
    }

    /// Returns true if both handles point at the same color.
    pub fn ptr_eq(&self, other: &ColorHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Color> for ColorHandle {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Anything that can be placed in a [`Contrast`] slot.
///
/// Returns `None` for values that are not a complete color; such values are
/// skipped by the setters.
pub trait ColorSource {
    /// Convert into a handle, aliasing existing handles.
    fn into_handle(self) -> Option<ColorHandle>;
}

impl ColorSource for ColorHandle {
    fn into_handle(self) -> Option<ColorHandle> {
        let complete = self.borrow().is_set();
        complete.then_some(self)
    }
}

impl ColorSource for &ColorHandle {
    fn into_handle(self) -> Option<ColorHandle> {
        self.clone().into_handle()
    }
}

impl ColorSource for Color {
    fn into_handle(self) -> Option<ColorHandle> {
        self.is_set().then(|| ColorHandle::new(self))
    }
}

impl ColorSource for &Color {
    fn into_handle(self) -> Option<ColorHandle> {
        self.clone().into_handle()
    }
}

impl ColorSource for &str {
    fn into_handle(self) -> Option<ColorHandle> {
        Color::from(self).into_handle()
    }
}

impl ColorSource for String {
    fn into_handle(self) -> Option<ColorHandle> {
        self.as_str().into_handle()
    }
}

impl ColorSource for Rgb {
    fn into_handle(self) -> Option<ColorHandle> {
        Color::from(self).into_handle()
    }
}

impl ColorSource for Hsl {
    fn into_handle(self) -> Option<ColorHandle> {
        Color::from(self).into_handle()
    }
}

impl<T: ColorSource> ColorSource for Option<T> {
    fn into_handle(self) -> Option<ColorHandle> {
        self.and_then(ColorSource::into_handle)
    }
}

/// The direction one color moves in during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Darken,
    Lighten,
}

impl Step {
    fn possible(self, color: &Color) -> bool {
        match self {
            Step::Darken => color.can_darken(),
            Step::Lighten => color.can_lighten(),
        }
    }

    fn apply(self, handle: &ColorHandle) {
        let mut color = handle.borrow_mut();
        match self {
            Step::Darken => color.darken(),
            Step::Lighten => color.lighten(),
        };
    }
}

/// The contrast between a foreground and a background color.
///
/// ```rust
/// use luminant::{wcag, Contrast};
/// let contrast = Contrast::new("#777", "#fff");
/// assert_eq!(contrast.contrast(), Some(4.48));
/// assert!(!contrast.test(wcag::AA_NORMAL));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Contrast {
    foreground: Option<ColorHandle>,
    background: Option<ColorHandle>,
    initial_foreground: Option<Color>,
    initial_background: Option<Color>,
}

impl Contrast {
    /// Create a new contrast pair. Arguments that are not a complete color
    /// leave their slot empty.
    pub fn new(foreground: impl ColorSource, background: impl ColorSource) -> Self {
        let mut contrast = Self::default();
        contrast.set_background(background);
        contrast.set_foreground(foreground);
        contrast
    }

    /// The foreground color.
    pub fn foreground(&self) -> Option<&ColorHandle> {
        self.foreground.as_ref()
    }

    /// The background color.
    pub fn background(&self) -> Option<&ColorHandle> {
        self.background.as_ref()
    }

    /// Replace the foreground color. The first color ever assigned is the one
    /// [`Contrast::reset`] restores.
    pub fn set_foreground(&mut self, color: impl ColorSource) -> &mut Self {
        match color.into_handle() {
            Some(handle) => {
                if self.initial_foreground.is_none() {
                    self.initial_foreground = Some(handle.get());
                }
                self.foreground = Some(handle);
            }
            None => log::debug!("ignoring foreground that is not a color"),
        }
        self
    }

    /// Replace the background color. The first color ever assigned is the one
    /// [`Contrast::reset`] restores.
    pub fn set_background(&mut self, color: impl ColorSource) -> &mut Self {
        match color.into_handle() {
            Some(handle) => {
                if self.initial_background.is_none() {
                    self.initial_background = Some(handle.get());
                }
                self.background = Some(handle);
            }
            None => log::debug!("ignoring background that is not a color"),
        }
        self
    }

    /// The WCAG contrast ratio `n` of `n:1`, rounded to two decimals. The
    /// foreground is blended over the background by its opacity first.
    pub fn contrast(&self) -> Option<Component> {
        self.ratio().map(|ratio| round_to(ratio, 2))
    }

    /// The unrounded contrast ratio.
    fn ratio(&self) -> Option<Component> {
        let foreground = self.foreground.as_ref()?.borrow();
        let background = self.background.as_ref()?.borrow();

        let f = luminance_of(&composite(&foreground, &background)?) + 5.0;
        let b = background.luminance()? + 5.0;
        Some(if f < b { b / f } else { f / b })
    }

    /// The APCA lightness contrast of the pair. See [`apca::score`].
    pub fn apca(&self) -> Option<Component> {
        let foreground = self.foreground.as_ref()?.borrow();
        let background = self.background.as_ref()?.borrow();
        apca::score(&foreground, &background)
    }

    /// Returns true if the contrast is at least `level`. The unrounded ratio
    /// is compared, so a ratio displayed as `4.50` may still fail `4.5`. A
    /// pair missing either color never passes.
    pub fn test(&self, level: Component) -> bool {
        self.ratio().is_some_and(|ratio| ratio >= level)
    }

    /// Adjust the colors one unit at a time until [`Contrast::test`] passes
    /// for `level` or no further adjustment is possible.
    ///
    /// The darker color darkens and the lighter one lightens. When both are
    /// equally bright the foreground lightens. With `isolate` only that color
    /// is adjusted; it must be the foreground or the background handle of
    /// this pair.
    pub fn search(&mut self, level: Component, isolate: Option<&ColorHandle>) -> &mut Self {
        let (Some(foreground), Some(background)) =
            (self.foreground.clone(), self.background.clone())
        else {
            log::warn!("search needs both a foreground and a background");
            return self;
        };

        if foreground.ptr_eq(&background) {
            log::warn!("search ignored: foreground and background are the same color");
            return self;
        }

        let (Some(fg_luminance), Some(bg_luminance)) =
            (foreground.borrow().luminance(), background.borrow().luminance())
        else {
            log::warn!("search needs both colors to be set");
            return self;
        };

        let (fg_step, bg_step) = if fg_luminance < bg_luminance {
            (Step::Darken, Step::Lighten)
        } else {
            (Step::Lighten, Step::Darken)
        };

        log::debug!(
            "searching for contrast {level}: foreground {fg_step:?}, background {bg_step:?}"
        );

        let mut steps = 0;
        match isolate {
            Some(target) => {
                let step = if target.ptr_eq(&foreground) {
                    fg_step
                } else if target.ptr_eq(&background) {
                    bg_step
                } else {
                    log::warn!("search ignored: isolated color is not part of this pair");
                    return self;
                };

                while steps < MAX_SEARCH_STEPS {
                    let possible = step.possible(&target.borrow());
                    if !possible || self.test(level) {
                        break;
                    }
                    step.apply(target);
                    steps += 1;
                    log::trace!("step {steps}: {}", target.borrow());
                }
            }
            None => {
                while steps < MAX_SEARCH_STEPS {
                    let bg_possible = bg_step.possible(&background.borrow());
                    let fg_possible = fg_step.possible(&foreground.borrow());
                    if !(bg_possible || fg_possible) || self.test(level) {
                        break;
                    }
                    if bg_possible {
                        bg_step.apply(&background);
                    }
                    if fg_possible {
                        fg_step.apply(&foreground);
                    }
                    steps += 1;
                    log::trace!(
                        "step {steps}: {} on {}",
                        foreground.borrow(),
                        background.borrow()
                    );
                }
            }
        }

        log::debug!(
            "search finished after {steps} steps with contrast {:?}",
            self.contrast()
        );

        self
    }

    /// Restore the colors first assigned to each slot. The colors are
    /// overwritten in place, so aliased handles observe the reset.
    pub fn reset(&mut self) -> &mut Self {
        if let (Some(handle), Some(initial)) = (&self.foreground, &self.initial_foreground) {
            handle.set(initial.clone());
        }
        if let (Some(handle), Some(initial)) = (&self.background, &self.initial_background) {
            handle.set(initial.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wcag;

    fn hcolor(handle: Option<&ColorHandle>) -> Option<String> {
        handle.and_then(|h| h.borrow().hcolor())
    }

    #[test]
    fn black_and_white() {
        assert_eq!(Contrast::new("#000", "#fff").contrast(), Some(21.0));
        assert_eq!(Contrast::new("#fff", "#000").contrast(), Some(21.0));
        assert_eq!(Contrast::new("#fff", "#fff").contrast(), Some(1.0));
    }

    #[test]
    fn symmetric() {
        let palette = ["#000", "#186276", "#ccc", "#f0d", "#fff", "#7a7a00"];
        for a in palette {
            for b in palette {
                let forward = Contrast::new(a, b).contrast().unwrap();
                assert_eq!(forward, Contrast::new(b, a).contrast().unwrap(), "{a} {b}");
                assert!(forward >= 1.0);
            }
        }
    }

    #[test]
    fn gray_on_white() {
        let contrast = Contrast::new("#777", "#fff");
        assert_eq!(contrast.contrast(), Some(4.48));
        assert!(!contrast.test(wcag::AA_NORMAL));
        assert!(contrast.test(wcag::AA_LARGE));
    }

    #[test]
    fn test_compares_the_unrounded_ratio() {
        let almost = Contrast::new("#ccc", "#575757");
        assert_eq!(almost.contrast(), Some(4.5));
        assert!(!almost.test(wcag::AA_NORMAL));

        let enough = Contrast::new("#ccc", "#565656");
        assert_eq!(enough.contrast(), Some(4.57));
        assert!(enough.test(wcag::AA_NORMAL));
    }

    #[test]
    fn foreground_opacity_is_blended() {
        assert_eq!(Contrast::new("#fff6", "#000").contrast(), Some(3.66));
    }

    #[test]
    fn construction_from_models() {
        let contrast = Contrast::new(Rgb::new(0, 0, 0), Hsl::new(0, 0, 1.0));
        assert_eq!(contrast.contrast(), Some(21.0));
        assert_eq!(contrast.apca().map(f64::round), Some(106.0));
    }

    #[test]
    fn missing_colors() {
        let contrast = Contrast::new("#000", "not a color");
        assert!(contrast.background().is_none());
        assert_eq!(contrast.contrast(), None);
        assert_eq!(contrast.apca(), None);
        assert!(!contrast.test(1.0));

        let mut contrast = Contrast::default();
        contrast.set_foreground(Some("#000")).set_background(None::<&str>);
        assert!(contrast.foreground().is_some());
        assert!(contrast.background().is_none());
        contrast.set_background(Color::rgb(255, 255, 255));
        assert_eq!(contrast.contrast(), Some(21.0));

        let mut unset = Contrast::default();
        unset.set_foreground(Color::new());
        assert!(unset.foreground().is_none());
    }

    #[test]
    fn search_isolated_foreground() {
        let fg = ColorHandle::from(Color::from("#ccc"));
        let mut contrast = Contrast::new(&fg, "#bbb");
        contrast.search(wcag::AA_NORMAL, Some(&fg));

        assert_eq!(fg.borrow().hcolor().as_deref(), Some("#ffffff"));
        assert_eq!(hcolor(contrast.background()).as_deref(), Some("#bbbbbb"));
        assert!(!contrast.test(wcag::AA_NORMAL));
    }

    #[test]
    fn search_isolated_background() {
        let bg = ColorHandle::from(Color::from("#bbb"));
        let mut contrast = Contrast::new("#ccc", &bg);
        contrast.search(wcag::AA_NORMAL, Some(&bg));

        assert_eq!(bg.borrow().hcolor().as_deref(), Some("#565656"));
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#cccccc"));
        assert!(contrast.test(wcag::AA_NORMAL));
    }

    #[test]
    fn search_both() {
        let mut contrast = Contrast::new("#bbb", "#ccc");
        contrast.search(wcag::AA_NORMAL, None);

        assert_eq!(hcolor(contrast.background()).as_deref(), Some("#ffffff"));
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#767676"));
        assert!(contrast.test(wcag::AA_NORMAL));
    }

    #[test]
    fn search_equal_colors() {
        // Equal luminance: the foreground lightens, the background darkens.
        let mut contrast = Contrast::new("#808080", "#808080");
        contrast.search(wcag::AA_LARGE, None);
        assert!(contrast.test(wcag::AA_LARGE));

        let fg = contrast.foreground().unwrap().get();
        let bg = contrast.background().unwrap().get();
        assert!(fg.luminance() > bg.luminance());
    }

    #[test]
    fn search_stops_when_impossible() {
        let mut contrast = Contrast::new("#000", "#fff");
        contrast.search(22.0, None);
        assert_eq!(contrast.contrast(), Some(21.0));
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#000000"));
        assert_eq!(hcolor(contrast.background()).as_deref(), Some("#ffffff"));
    }

    #[test]
    fn search_ignores_foreign_isolate() {
        let stranger = ColorHandle::from(Color::from("#ccc"));
        let mut contrast = Contrast::new("#ccc", "#bbb");
        contrast.search(wcag::AA_NORMAL, Some(&stranger));
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#cccccc"));
        assert_eq!(hcolor(contrast.background()).as_deref(), Some("#bbbbbb"));
        assert_eq!(stranger.borrow().hcolor().as_deref(), Some("#cccccc"));
    }

    #[test]
    fn search_ignores_aliased_pair() {
        let shared = ColorHandle::from(Color::from("#777"));
        let mut contrast = Contrast::new(&shared, &shared);
        contrast.search(wcag::AA_NORMAL, None);
        assert_eq!(shared.borrow().hcolor().as_deref(), Some("#777777"));
    }

    #[test]
    fn reset_restores_in_place() {
        let bg = ColorHandle::from(Color::from("#bbb"));
        let mut contrast = Contrast::new("#ccc", &bg);
        contrast.search(wcag::AA_NORMAL, None);
        assert_ne!(bg.borrow().hcolor().as_deref(), Some("#bbbbbb"));

        contrast.reset();
        assert_eq!(bg.borrow().hcolor().as_deref(), Some("#bbbbbb"));
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#cccccc"));
    }

    #[test]
    fn reset_uses_first_assignment() {
        let mut contrast = Contrast::new("#111", "#eee");
        contrast.set_foreground("#222");
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#222222"));
        contrast.reset();
        assert_eq!(hcolor(contrast.foreground()).as_deref(), Some("#111111"));
    }
}
