//! Loosely typed component values accepted by the color setters.
//!
//! A [`ComponentValue`] is whatever a caller handed over for one component:
//! a number, a numeric string, a percentage string, a short hexadecimal
//! string or nothing at all. The coercion methods turn it into the range a
//! specific component needs and return `None` when that is not possible.

use crate::color::Component;

/// A value passed for a single color component.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ComponentValue {
    /// The component is missing.
    #[default]
    None,
    /// A plain number.
    Number(Component),
    /// A string such as `"60%"`, `"ff"` or `"0.5"`.
    Text(String),
}

impl ComponentValue {
    /// Returns true if the component is missing.
    pub fn is_none(&self) -> bool {
        matches!(self, ComponentValue::None)
    }

    /// Coerce the value to a color channel in the range 0 to 255.
    ///
    /// Strings that contain a hexadecimal letter are read as hexadecimal,
    /// any other string as a decimal number.
    pub fn as_channel(&self) -> Option<u8> {
        match self {
            ComponentValue::None => None,
            ComponentValue::Number(value) => channel_from_number(*value),
            ComponentValue::Text(text) => {
                let text = text.trim();
                if text.chars().any(|c| matches!(c, 'a'..='f' | 'A'..='F')) {
                    u8::from_str_radix(text, 16).ok()
                } else {
                    text.parse().ok().and_then(channel_from_number)
                }
            }
        }
    }

    /// Coerce the value to a fraction in the range 0 to 1.
    ///
    /// Accepts percentage strings (`"60%"`), two digit hexadecimal bytes
    /// relative to 255 (`"99"` is decimal, `"0f"` and `"cc"` are bytes) and
    /// plain numbers. Numbers up to 1 are taken as fractions and numbers up to
    /// 100 as percentages.
    pub fn as_fraction(&self) -> Option<Component> {
        match self {
            ComponentValue::None => None,
            ComponentValue::Number(value) => fraction_from_number(*value),
            ComponentValue::Text(text) => {
                let text = text.trim();
                if let Some(percent) = text.strip_suffix('%') {
                    let percent: Component = percent.trim().parse().ok()?;
                    return (0.0..=100.0)
                        .contains(&percent)
                        .then_some(percent / 100.0);
                }
                if is_hex_byte(text) {
                    return u8::from_str_radix(text, 16)
                        .ok()
                        .map(|byte| byte as Component / 255.0);
                }
                text.parse().ok().and_then(fraction_from_number)
            }
        }
    }

    /// Coerce the value to a hue angle in degrees, normalized to `[0, 360)`.
    pub fn as_degrees(&self) -> Option<Component> {
        let degrees = match self {
            ComponentValue::None => return None,
            ComponentValue::Number(value) => *value,
            ComponentValue::Text(text) => {
                let text = text.trim();
                text.strip_suffix("deg").unwrap_or(text).trim().parse().ok()?
            }
        };

        degrees.is_finite().then(|| normalize_hue(degrees))
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_hue(degrees: Component) -> Component {
    let hue = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

fn channel_from_number(value: Component) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    let value = value.round();
    (0.0..=255.0).contains(&value).then_some(value as u8)
}

fn fraction_from_number(value: Component) -> Option<Component> {
    if !value.is_finite() || value < 0.0 {
        None
    } else if value <= 1.0 {
        Some(value)
    } else if value <= 100.0 {
        Some(value / 100.0)
    } else {
        None
    }
}

/// Two hex digits that can not be mistaken for a decimal number: either a
/// letter is present or the string has a leading zero.
fn is_hex_byte(text: &str) -> bool {
    text.len() == 2
        && text.chars().all(|c| c.is_ascii_hexdigit())
        && (text.starts_with('0') || text.chars().any(|c| c.is_ascii_alphabetic()))
}

impl From<Component> for ComponentValue {
    fn from(value: Component) -> Self {
        if value.is_nan() {
            ComponentValue::None
        } else {
            ComponentValue::Number(value)
        }
    }
}

impl From<f32> for ComponentValue {
    fn from(value: f32) -> Self {
        Self::from(value as Component)
    }
}

impl From<u8> for ComponentValue {
    fn from(value: u8) -> Self {
        ComponentValue::Number(value as Component)
    }
}

impl From<u16> for ComponentValue {
    fn from(value: u16) -> Self {
        ComponentValue::Number(value as Component)
    }
}

impl From<i32> for ComponentValue {
    fn from(value: i32) -> Self {
        ComponentValue::Number(value as Component)
    }
}

impl From<&str> for ComponentValue {
    fn from(value: &str) -> Self {
        ComponentValue::Text(value.to_owned())
    }
}

impl From<String> for ComponentValue {
    fn from(value: String) -> Self {
        ComponentValue::Text(value)
    }
}

impl<T: Into<ComponentValue>> From<Option<T>> for ComponentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ComponentValue::None, Into::into)
    }
}
