//! A table of the pairwise contrast of every color in a palette.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::{
    color::{Color, Component},
    contrast::Contrast,
    math::format_fixed,
};

/// One argument of a palette: a color string (possibly a comma separated
/// list of them), a [`Color`] or a nested list of entries.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteEntry {
    /// One or more comma separated color strings.
    Text(String),
    /// A color.
    Color(Color),
    /// A list of entries, flattened in order.
    List(Vec<PaletteEntry>),
}

impl From<&str> for PaletteEntry {
    fn from(value: &str) -> Self {
        PaletteEntry::Text(value.to_owned())
    }
}

impl From<String> for PaletteEntry {
    fn from(value: String) -> Self {
        PaletteEntry::Text(value)
    }
}

impl From<Color> for PaletteEntry {
    fn from(value: Color) -> Self {
        PaletteEntry::Color(value)
    }
}

impl From<&Color> for PaletteEntry {
    fn from(value: &Color) -> Self {
        PaletteEntry::Color(value.clone())
    }
}

impl<T: Into<PaletteEntry>> From<Vec<T>> for PaletteEntry {
    fn from(value: Vec<T>) -> Self {
        PaletteEntry::List(value.into_iter().map(Into::into).collect())
    }
}

impl PaletteEntry {
    fn flatten_into(self, colors: &mut Vec<Color>) {
        match self {
            PaletteEntry::Text(text) => colors.extend(
                text.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(Color::from),
            ),
            PaletteEntry::Color(color) => colors.push(color),
            PaletteEntry::List(entries) => {
                for entry in entries {
                    entry.flatten_into(colors);
                }
            }
        }
    }
}

/// Flatten palette entries into a list of colors, in order. Strings that are
/// not colors become unset colors.
pub fn to_color_list<I>(entries: I) -> Vec<Color>
where
    I: IntoIterator,
    I::Item: Into<PaletteEntry>,
{
    let mut colors = Vec::new();
    for entry in entries {
        entry.into().flatten_into(&mut colors);
    }
    colors
}

/// The WCAG contrast of every pair of colors in a palette, keyed by the
/// hexadecimal value of each color without the leading `#`. Rows are the
/// foreground and columns the background.
///
/// ```rust
/// use luminant::Matrix;
/// let matrix = Matrix::new(["#000, #fff"]);
/// assert_eq!(matrix.get("000000", "ffffff"), Some("21.00"));
/// assert_eq!(matrix.get("ffffff", "ffffff"), Some("1.00"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matrix {
    keys: Vec<String>,
    table: BTreeMap<String, BTreeMap<String, String>>,
}

impl Matrix {
    /// Build the matrix from any mix of palette entries.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PaletteEntry>,
    {
        Self::from_colors(to_color_list(entries))
    }

    /// Build the matrix from a list of colors. Colors that are not set are
    /// dropped; duplicates collapse into one entry.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut palette: Vec<(Component, String, Color)> = colors
            .into_iter()
            .filter_map(|color| {
                let hue = color.hue()?;
                let key = color.hcolor()?.trim_start_matches('#').to_owned();
                Some((hue, key, color))
            })
            .collect();

        palette.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let mut keys: Vec<String> = Vec::with_capacity(palette.len());
        let mut colors: BTreeMap<String, Color> = BTreeMap::new();
        for (_, key, color) in palette {
            if !colors.contains_key(&key) {
                keys.push(key.clone());
            }
            colors.insert(key, color);
        }

        let table = colors
            .iter()
            .map(|(row_key, row)| {
                let values = colors
                    .iter()
                    .filter_map(|(column_key, column)| {
                        let ratio = Contrast::new(row, column).contrast()?;
                        Some((column_key.clone(), format_fixed(ratio, 2)))
                    })
                    .collect();
                (row_key.clone(), values)
            })
            .collect();

        log::debug!("built a {0}x{0} contrast matrix", keys.len());

        Self { keys, table }
    }

    /// The keys of the palette, ordered by hue.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The contrast of `row` text on a `column` background, as a string with
    /// two decimals.
    pub fn get(&self, row: &str, column: &str) -> Option<&str> {
        self.table.get(row)?.get(column).map(String::as_str)
    }

    /// The full table.
    pub fn table(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.table
    }

    /// The number of distinct colors.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no color made it into the palette.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.table.serialize(serializer)
    }
}
