//! The Accessible Perceptual Contrast Algorithm (APCA) lightness contrast
//! score and its minimum contrast table for fonts.

use crate::{
    color::{Color, Component},
    luminance::{brightness_of, composite},
    math::round_to,
};

/// Soft clamp applied to very dark colors before the power curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Darkness {
    /// Brightness below which the clamp kicks in.
    pub threshold: Component,
    /// Exponent of the clamp.
    pub exponent: Component,
}

/// The darkness clamp of APCA 0.0.98G.
pub const DARKNESS: Darkness = Darkness {
    threshold: 0.022,
    exponent: 1.414,
};

/// Exponents applied to the background and foreground brightness for one
/// polarity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerCurve {
    /// Exponent for the background brightness.
    pub background: Component,
    /// Exponent for the foreground brightness.
    pub foreground: Component,
}

/// Dark text on a light background.
pub const NORMAL: PowerCurve = PowerCurve {
    background: 0.56,
    foreground: 0.57,
};

/// Light text on a dark background.
pub const REVERSE: PowerCurve = PowerCurve {
    background: 0.65,
    foreground: 0.62,
};

/// Multiplier of the power curve difference.
pub const SCALE: Component = 1.14;

/// Differences smaller than this are no contrast at all.
pub const CLIP: Component = 0.001;

/// Upper bound of the low contrast band.
pub const LOW_THRESHOLD: Component = 0.035991;

/// Scale of the linear correction inside the low contrast band.
pub const LOW_FACTOR: Component = 27.7847239587675;

/// Offset removed from every score.
pub const LOW_OFFSET: Component = 0.027;

/// Decimal places of a score.
pub const PRECISION: usize = 3;

/// Font sizes of the minimum contrast table, in pixels.
pub const FONT_SIZES: [u16; 15] = [12, 14, 15, 16, 18, 21, 24, 28, 32, 36, 42, 48, 60, 72, 96];

/// Font weights of the minimum contrast table.
pub const FONT_WEIGHTS: [u16; 9] = [100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Minimum absolute score per font size (rows) and weight (columns). `None`
/// marks a combination that is never readable enough. Table of May 28 2022.
const FONT_TABLE: [[Option<u8>; 9]; 15] = {
    const N: Option<u8> = None;
    const fn s(v: u8) -> Option<u8> {
        Some(v)
    }
    [
        [N, N, N, N, N, N, N, N, N],
        [N, N, N, s(100), s(100), s(90), s(75), N, N],
        [N, N, N, s(100), s(90), s(75), s(70), N, N],
        [N, N, N, s(90), s(75), s(70), s(60), s(60), N],
        [N, N, s(100), s(75), s(70), s(60), s(55), s(55), s(55)],
        [N, N, s(90), s(70), s(60), s(55), s(50), s(50), s(50)],
        [N, N, s(75), s(60), s(55), s(50), s(45), s(45), s(45)],
        [N, s(100), s(70), s(55), s(50), s(45), s(43), s(43), s(43)],
        [N, s(90), s(65), s(50), s(45), s(43), s(40), s(40), s(40)],
        [N, s(75), s(60), s(45), s(43), s(40), s(38), s(38), s(38)],
        [s(100), s(70), s(55), s(43), s(40), s(38), s(35), s(35), s(35)],
        [s(90), s(60), s(50), s(40), s(38), s(35), s(33), s(33), s(33)],
        [s(75), s(55), s(45), s(38), s(35), s(33), s(30), s(30), s(30)],
        [s(60), s(50), s(40), s(35), s(33), s(30), s(30), s(30), s(30)],
        [s(50), s(45), s(35), s(33), s(30), s(30), s(30), s(30), s(30)],
    ]
};

fn soft_clamp(brightness: Component) -> Component {
    if brightness > DARKNESS.threshold {
        brightness
    } else {
        brightness + (DARKNESS.threshold - brightness).powf(DARKNESS.exponent)
    }
}

/// Score two screen brightness values. Positive for dark text on a light
/// background, negative for light text on a dark background.
pub fn score_brightness(foreground: Component, background: Component) -> Component {
    let reverse = !(background > foreground);

    let (foreground, background, curve) = if reverse {
        (foreground, soft_clamp(background), REVERSE)
    } else {
        (soft_clamp(foreground), background, NORMAL)
    };

    let apca = (background.powf(curve.background) - foreground.powf(curve.foreground)) * SCALE;

    let corrected = if reverse {
        if apca > -CLIP {
            0.0
        } else if apca > -LOW_THRESHOLD {
            apca - apca * LOW_FACTOR * LOW_OFFSET
        } else {
            apca + LOW_OFFSET
        }
    } else if apca < CLIP {
        0.0
    } else if apca < LOW_THRESHOLD {
        apca - apca * LOW_FACTOR * LOW_OFFSET
    } else {
        apca - LOW_OFFSET
    };

    round_to(corrected * 100.0, PRECISION)
}

/// Score `foreground` text on `background`. The foreground is blended over
/// the background by its opacity first. Returns `None` unless both colors are
/// set.
/// ```rust
/// use luminant::{apca, Color};
/// let black = Color::from("#000");
/// let white = Color::from("#fff");
/// assert!(apca::score(&black, &white).unwrap() > 106.0);
/// assert!(apca::score(&white, &black).unwrap() < -107.0);
/// ```
pub fn score(foreground: &Color, background: &Color) -> Option<Component> {
    let blended = composite(foreground, background)?;
    let background = background.brightness()?;
    Some(score_brightness(brightness_of(&blended), background))
}

/// The minimum absolute score for text of the given size in pixels and
/// weight. Returns `None` if the size or weight is not in the table or the
/// combination is never readable.
pub fn minimum_contrast(size: u16, weight: u16) -> Option<Component> {
    let row = FONT_SIZES.iter().position(|&s| s == size)?;
    let column = FONT_WEIGHTS.iter().position(|&w| w == weight)?;
    FONT_TABLE[row][column].map(Component::from)
}

/// The font weights that are readable at the given size with the given
/// score. The sign of the score is ignored.
pub fn readable_weights(score: Component, size: u16) -> Vec<u16> {
    FONT_WEIGHTS
        .iter()
        .copied()
        .filter(|&weight| minimum_contrast(size, weight).is_some_and(|min| min <= score.abs()))
        .collect()
}
