//! Conversions between the RGB and HSL notations.
//!
//! Channels, saturation and lightness are fractions between 0 and 1 and hue
//! is in degrees. A hue that is powerless (no chroma) is reported as 0.

use crate::{
    color::{Component, Components},
    component::normalize_hue,
    math::{almost_zero, clamp_unit},
};

/// Calculate the hue from RGB components and return it along with the min
/// and max RGB values.
fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
    let Components(red, green, blue) = *from;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let delta = max - min;

    let hue = if delta != 0.0 {
        60.0 * if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        }
    } else {
        0.0
    };

    (normalize_hue(hue), min, max)
}

/// Convert from RGB notation to HSL notation.
/// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
pub fn rgb_to_hsl(from: &Components) -> Components {
    let (hue, min, max) = rgb_to_hue_with_min_max(&from.map(clamp_unit));

    let lightness = (min + max) / 2.0;
    let delta = max - min;

    let saturation =
        if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
            0.0
        } else {
            (max - lightness) / lightness.min(1.0 - lightness)
        };

    Components(hue, clamp_unit(saturation), lightness)
}

/// Convert from HSL notation to RGB notation.
/// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
pub fn hsl_to_rgb(from: &Components) -> Components {
    let hue = normalize_hue(from.0);
    let saturation = clamp_unit(from.1);
    let lightness = clamp_unit(from.2);

    // No saturation is a gray with the given lightness, whatever the hue.
    if saturation <= 0.0 {
        return Components(lightness, lightness, lightness);
    }

    macro_rules! f {
        ($n:expr) => {{
            let k = ($n + hue / 30.0) % 12.0;
            let a = saturation * lightness.min(1.0 - lightness);
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        }};
    }

    Components(f!(0.0), f!(8.0), f!(4.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn test_conversions() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(Component, Component, Component, Component, Component, Component)] = &[
            // chocolate
            (0.823529, 0.411765, 0.117647, 25.000000, 0.750000, 0.470588),
            (1.000000, 0.000000, 0.000000, 0.000000, 1.000000, 0.500000),
            (0.000000, 1.000000, 0.000000, 120.000000, 1.000000, 0.500000),
            (0.000000, 0.000000, 1.000000, 240.000000, 1.000000, 0.500000),
            (1.000000, 0.000000, 1.000000, 300.000000, 1.000000, 0.500000),
            (0.460000, 0.520000, 0.280000, 75.000000, 0.300000, 0.400000),
            (0.500000, 0.500000, 0.500000, 0.000000, 0.000000, 0.500000),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            let hsl = rgb_to_hsl(&Components(red, green, blue));
            assert_component_eq!(hsl.0, hue, 1e-3);
            assert_component_eq!(hsl.1, saturation, 1e-5);
            assert_component_eq!(hsl.2, lightness, 1e-5);

            let rgb = hsl_to_rgb(&Components(hue, saturation, lightness));
            assert_component_eq!(rgb.0, red, 1e-5);
            assert_component_eq!(rgb.1, green, 1e-5);
            assert_component_eq!(rgb.2, blue, 1e-5);
        }
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        assert_eq!(rgb_to_hsl(&Components(1.0, 1.0, 1.0)).0, 0.0);
        assert_eq!(rgb_to_hsl(&Components(0.0, 0.0, 0.0)).0, 0.0);
        assert_eq!(rgb_to_hsl(&Components(0.5, 0.5, 0.5)).0, 0.0);
    }

    #[test]
    fn zero_saturation_is_gray() {
        let rgb = hsl_to_rgb(&Components(200.0, 0.0, 0.4));
        assert_eq!(rgb, Components(0.4, 0.4, 0.4));
    }

    #[test]
    fn hue_is_normalized() {
        let reference = hsl_to_rgb(&Components(10.0, 0.6, 0.4));
        let below = hsl_to_rgb(&Components(-350.0, 0.6, 0.4));
        let above = hsl_to_rgb(&Components(370.0, 0.6, 0.4));
        assert_component_eq!(below.0, reference.0);
        assert_component_eq!(below.1, reference.1);
        assert_component_eq!(above.2, reference.2);
    }

    #[test]
    fn saturation_never_exceeds_one() {
        for value in [0.001, 0.2, 0.5, 0.999] {
            let hsl = rgb_to_hsl(&Components(value, 0.0, 1.0 - value));
            assert!(hsl.1 <= 1.0, "{hsl:?}");
        }
    }
}
