//! Classify a sequence of colors shown one after the other as a general
//! flash or a red flash.

use std::borrow::Borrow;

use serde::Serialize;

use crate::color::{Color, Component};

/// Default upper bound of the darker state's relative luminance.
pub const DEFAULT_MAX_BRIGHTNESS: Component = 0.8;

/// Default minimum luminance change, relative to the brighter state.
pub const DEFAULT_MIN_DELTA: Component = 0.1;

/// Default minimum change of the red value.
pub const DEFAULT_RED_DELTA: Component = 20.0;

/// Share of red in the channel sum from which a color is a saturated red.
const SATURATED_RED: Component = 0.8;

/// The kinds of flash found in a sequence of colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlashResult {
    /// The luminance changes enough while the darker state is dark enough.
    pub general: bool,
    /// A saturated red is involved and the red value changes enough.
    pub red: bool,
}

/// Flash limits and the result of the last [`Flash::test`].
///
/// ```rust
/// use luminant::{Color, Flash};
/// let mut flash = Flash::new();
/// let result = flash.test([Color::from("#000"), Color::from("#fff")]);
/// assert!(result.general);
/// assert!(!result.red);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    max_brightness: Component,
    min_delta: Component,
    red_delta: Component,
    result: Option<FlashResult>,
}

impl Default for Flash {
    fn default() -> Self {
        Self {
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            min_delta: DEFAULT_MIN_DELTA,
            red_delta: DEFAULT_RED_DELTA,
            result: None,
        }
    }
}

fn relative_luminance(color: &Color) -> Option<Component> {
    color.luminance().map(|luminance| luminance / 100.0)
}

fn red_value(color: &Color) -> Option<Component> {
    let [red, green, blue] = color.channels()?;
    let [red, green, blue] = [red, green, blue].map(|c| c as Component / 255.0);
    Some((red - green - blue).max(0.0) * 320.0)
}

fn is_saturated_red(color: &Color) -> bool {
    color.channels().is_some_and(|[red, green, blue]| {
        let sum = red as Component + green as Component + blue as Component;
        sum > 0.0 && red as Component / sum >= SATURATED_RED
    })
}

fn spread(values: &[Component]) -> Component {
    let max = values.iter().copied().fold(Component::MIN, Component::max);
    let min = values.iter().copied().fold(Component::MAX, Component::min);
    max - min
}

impl Flash {
    /// Create a new classifier with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum relative luminance of the darker state.
    pub fn max_brightness(&self) -> Component {
        self.max_brightness
    }

    /// The minimum luminance change as a fraction of the brighter state.
    pub fn min_delta(&self) -> Component {
        self.min_delta
    }

    /// The minimum change of the red value.
    pub fn red_delta(&self) -> Component {
        self.red_delta
    }

    /// Set the maximum brightness. Values outside 0 to 1 are ignored.
    pub fn set_max_brightness(&mut self, value: Component) -> &mut Self {
        if (0.0..=1.0).contains(&value) {
            self.max_brightness = value;
        } else {
            log::debug!("ignoring max brightness {value}");
        }
        self
    }

    /// Set the minimum delta. Values outside 0 to 1 are ignored.
    pub fn set_min_delta(&mut self, value: Component) -> &mut Self {
        if (0.0..=1.0).contains(&value) {
            self.min_delta = value;
        } else {
            log::debug!("ignoring min delta {value}");
        }
        self
    }

    /// Set the minimum red delta. Negative values are ignored.
    pub fn set_red_delta(&mut self, value: Component) -> &mut Self {
        if value.is_finite() && value >= 0.0 {
            self.red_delta = value;
        } else {
            log::debug!("ignoring red delta {value}");
        }
        self
    }

    /// The result of the last test, if any.
    pub fn result(&self) -> Option<FlashResult> {
        self.result
    }

    /// Classify the colors and remember the result. Unset colors are
    /// skipped.
    pub fn test<I>(&mut self, colors: I) -> FlashResult
    where
        I: IntoIterator,
        I::Item: Borrow<Color>,
    {
        let colors: Vec<I::Item> = colors
            .into_iter()
            .filter(|color| color.borrow().is_set())
            .collect();

        let result = if colors.is_empty() {
            FlashResult::default()
        } else {
            let luminance: Vec<Component> = colors
                .iter()
                .filter_map(|c| relative_luminance(c.borrow()))
                .collect();
            let red: Vec<Component> = colors.iter().filter_map(|c| red_value(c.borrow())).collect();

            let max = luminance.iter().copied().fold(Component::MIN, Component::max);
            let min = luminance.iter().copied().fold(Component::MAX, Component::min);

            FlashResult {
                general: min < self.max_brightness && max - min >= max * self.min_delta,
                red: self.red_delta > 0.0
                    && colors.iter().any(|c| is_saturated_red(c.borrow()))
                    && spread(&red) > self.red_delta,
            }
        };

        log::debug!("flash over {} colors: {result:?}", colors.len());
        self.result = Some(result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(hex: &[&str]) -> Vec<Color> {
        hex.iter().map(|h| Color::from(*h)).collect()
    }

    #[test]
    fn black_and_white_is_a_general_flash() {
        let mut flash = Flash::new();
        let result = flash.test(colors(&["#000", "#fff"]));
        assert_eq!(
            result,
            FlashResult {
                general: true,
                red: false,
            }
        );
        assert_eq!(flash.result(), Some(result));
    }

    #[test]
    fn similar_grays_do_not_flash() {
        let mut flash = Flash::new();
        assert_eq!(
            flash.test(colors(&["#777777", "#787878"])),
            FlashResult::default()
        );
    }

    #[test]
    fn bright_states_do_not_flash() {
        let mut flash = Flash::new();
        assert!(!flash.test(colors(&["#eee", "#fff"])).general);
    }

    #[test]
    fn saturated_red() {
        let mut flash = Flash::new();
        let result = flash.test(colors(&["#f00", "#000"]));
        assert!(result.red);
        assert!(result.general);

        // Red that barely changes is not a red flash.
        assert!(!flash.test(colors(&["#f00", "#fa0000"])).red);
        // Orange is not a saturated red.
        assert!(!flash.test(colors(&["#ff8000", "#000"])).red);
    }

    #[test]
    fn borrowed_and_unset_colors() {
        let palette = colors(&["#000", "#fff"]);
        let mut flash = Flash::new();
        assert!(flash.test(&palette).general);

        let result = flash.test([Color::new(), Color::new()]);
        assert_eq!(result, FlashResult::default());
        assert_eq!(flash.test(Vec::<Color>::new()), FlashResult::default());
    }

    #[test]
    fn limits() {
        let mut flash = Flash::new();
        flash
            .set_max_brightness(1.5)
            .set_min_delta(-0.1)
            .set_red_delta(-3.0);
        assert_eq!(flash.max_brightness(), DEFAULT_MAX_BRIGHTNESS);
        assert_eq!(flash.min_delta(), DEFAULT_MIN_DELTA);
        assert_eq!(flash.red_delta(), DEFAULT_RED_DELTA);

        flash.set_max_brightness(0.1);
        assert!(!flash.test(colors(&["#777", "#fff"])).general);

        flash.set_red_delta(0.0);
        assert!(!flash.test(colors(&["#f00", "#000"])).red);
    }

    #[test]
    fn result_serializes() {
        let result = FlashResult {
            general: true,
            red: false,
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"general":true,"red":false}"#
        );
    }
}
