//! Parse colors from strings: hexadecimal (`#rgb`, `#rgba`, `#rrggbb`,
//! `#rrggbbaa`) and CSS functional notation (`rgb()`, `rgba()`, `hsl()`,
//! `hsla()`).

use std::str::FromStr;

use thiserror::Error;

use crate::{
    color::{Color, Component},
    component::ComponentValue,
    models::{Hsl, Rgb},
};

/// Reasons a string could not be parsed as a [`Color`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// The string looked like a hexadecimal color but was not one.
    #[error("invalid hexadecimal color {0:?}: expected 3, 4, 6 or 8 hexadecimal digits")]
    InvalidHex(String),

    /// A functional notation with the wrong number of arguments or an
    /// argument out of range.
    #[error("invalid {function}() color {input:?}")]
    InvalidFunction {
        /// The name of the function, e.g. `rgb`.
        function: &'static str,
        /// The full input.
        input: String,
    },

    /// The string is not in any supported notation.
    #[error("unrecognized color {0:?}")]
    Unrecognized(String),
}

/// Channels and opacity read from a hexadecimal string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: Option<Component>,
}

/// Parse a hexadecimal color with an optional leading `#`. Short forms are
/// expanded by repeating each digit.
pub(crate) fn parse_hex(input: &str) -> Result<HexColor, ParseColorError> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(input.to_owned()));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return Err(ParseColorError::InvalidHex(input.to_owned())),
    };

    // Every character is an ASCII hex digit, so slicing by byte is safe and
    // each pair fits in a byte.
    let byte = |index: usize| {
        u8::from_str_radix(&expanded[index * 2..index * 2 + 2], 16)
            .map_err(|_| ParseColorError::InvalidHex(input.to_owned()))
    };

    Ok(HexColor {
        red: byte(0)?,
        green: byte(1)?,
        blue: byte(2)?,
        opacity: if expanded.len() == 8 {
            Some(byte(3)? as Component / 255.0)
        } else {
            None
        },
    })
}

/// Split `name(a, b, c[, d])` into its arguments. Arguments may be separated
/// by commas, whitespace or a slash before the alpha value.
fn function_arguments<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let lower = input.to_ascii_lowercase();
    if !lower.starts_with(name) {
        return None;
    }

    let rest = input[name.len()..].trim_start();
    let rest = rest.strip_suffix(';').unwrap_or(rest).trim_end();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;

    Some(
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect(),
    )
}

fn parse_rgb_function(input: &str) -> Option<Result<Color, ParseColorError>> {
    let (function, arguments) = match function_arguments(input, "rgba") {
        Some(arguments) => ("rgba", arguments),
        None => ("rgb", function_arguments(input, "rgb")?),
    };

    let invalid = || ParseColorError::InvalidFunction {
        function,
        input: input.to_owned(),
    };

    let rgb = match arguments.as_slice() {
        [red, green, blue] => Rgb::new(*red, *green, *blue),
        [red, green, blue, alpha] => Rgb::new(*red, *green, *blue).with_opacity(*alpha),
        _ => return Some(Err(invalid())),
    };

    if rgb.channels().is_none() || !valid_opacity(&rgb.opacity) {
        return Some(Err(invalid()));
    }

    Some(Ok(Color::from(rgb)))
}

fn parse_hsl_function(input: &str) -> Option<Result<Color, ParseColorError>> {
    let (function, arguments) = match function_arguments(input, "hsla") {
        Some(arguments) => ("hsla", arguments),
        None => ("hsl", function_arguments(input, "hsl")?),
    };

    let invalid = || ParseColorError::InvalidFunction {
        function,
        input: input.to_owned(),
    };

    let hsl = match arguments.as_slice() {
        [hue, saturation, lightness] => Hsl::new(*hue, *saturation, *lightness),
        [hue, saturation, lightness, alpha] => {
            Hsl::new(*hue, *saturation, *lightness).with_opacity(*alpha)
        }
        _ => return Some(Err(invalid())),
    };

    if hsl.to_components().is_none() || !valid_opacity(&hsl.opacity) {
        return Some(Err(invalid()));
    }

    Some(Ok(Color::from(hsl)))
}

fn valid_opacity(opacity: &ComponentValue) -> bool {
    opacity.is_none() || opacity.as_fraction().is_some()
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if let Some(result) = parse_rgb_function(input) {
            return result;
        }
        if let Some(result) = parse_hsl_function(input) {
            return result;
        }

        let looks_hex = input
            .strip_prefix('#')
            .unwrap_or(input)
            .chars()
            .all(|c| c.is_ascii_alphanumeric());
        if !looks_hex {
            return Err(ParseColorError::Unrecognized(input.to_owned()));
        }

        let hex = parse_hex(input)?;
        let mut color = Color::rgb(hex.red, hex.green, hex.blue);
        if let Some(opacity) = hex.opacity {
            color.set_opacity(opacity);
        }
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(
            parse_hex("#186276"),
            Ok(HexColor {
                red: 24,
                green: 98,
                blue: 118,
                opacity: None,
            })
        );
        assert_eq!(
            parse_hex("F0D"),
            Ok(HexColor {
                red: 255,
                green: 0,
                blue: 221,
                opacity: None,
            })
        );

        let with_alpha = parse_hex("#fff6").unwrap();
        assert_eq!(with_alpha.red, 255);
        assert_eq!(with_alpha.opacity, Some(0.4));
    }

    #[test]
    fn invalid_hex() {
        for input in ["", "#", "#ff", "#fffff", "#fffffff", "#fffffffff", "#ggg", "#ff ff ff"] {
            assert!(parse_hex(input).is_err(), "{input:?}");
        }
        assert_eq!(
            "#12".parse::<Color>(),
            Err(ParseColorError::InvalidHex("#12".to_owned()))
        );
    }

    #[test]
    fn functional_notation() {
        let c: Color = "rgb(24, 98, 118)".parse().unwrap();
        assert_eq!(c.hcolor().as_deref(), Some("#186276"));

        let c: Color = "RGBA(255 255 255 / 0.4)".parse().unwrap();
        assert_eq!(c.hcolor().as_deref(), Some("#ffffff66"));

        let c: Color = "hsl(120, 100%, 25%);".parse().unwrap();
        assert_eq!(c.hcolor().as_deref(), Some("#008000"));

        let c: Color = "hsla(0deg 0% 100% / 50%)".parse().unwrap();
        assert_eq!(c.hcolor().as_deref(), Some("#ffffff80"));
    }

    #[test]
    fn invalid_functional_notation() {
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { function: "rgb", .. })
        ));
        assert!(matches!(
            "rgba(1, 2, 300, 1)".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { function: "rgba", .. })
        ));
        assert!(matches!(
            "hsl(1, lots, 2%)".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { function: "hsl", .. })
        ));
    }

    #[test]
    fn unrecognized() {
        assert_eq!("   ".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!(
            "cornflower blue".parse::<Color>(),
            Err(ParseColorError::Unrecognized("cornflower blue".to_owned()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseColorError::InvalidHex("#12".to_owned()).to_string(),
            "invalid hexadecimal color \"#12\": expected 3, 4, 6 or 8 hexadecimal digits"
        );
    }
}
