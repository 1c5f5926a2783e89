//! luminant provides the color primitives and formulas needed to evaluate the
//! accessibility of colors on the web: WCAG 2.x contrast ratios, APCA
//! lightness contrast, contrast matrices over a palette and flash
//! classification.

#![deny(missing_docs)]

mod adjust;
pub mod apca;
mod color;
mod component;
mod contrast;
mod convert;
pub mod flash;
mod luminance;
mod math;
pub mod matrix;
pub mod models;
mod parse;
pub mod wcag;


pub use color::{Color, Component, Components, Flags};
pub use component::ComponentValue;
pub use contrast::{ColorHandle, ColorSource, Contrast};
pub use flash::{Flash, FlashResult};
pub use luminance::{APCA_COEFFICIENTS, WCAG_COEFFICIENTS};
pub use matrix::{to_color_list, Matrix, PaletteEntry};
pub use models::{ColorType, Hsl, Model, Rgb};
pub use parse::ParseColorError;
