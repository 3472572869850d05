//! Legacy palette used for quantizing colours on consumers without RGB support.

use serde::Serialize;

use crate::error::{ChromaError, Result};

use super::Colour;

/// A named entry in the legacy palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Upper-case name, e.g. `DARK_AQUA`.
    pub name: String,
    /// Reference colour.
    #[serde(serialize_with = "serialize_colour")]
    pub colour: Colour,
    /// Single-character style code, e.g. `3`.
    pub code: char,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, colour: Colour, code: char) -> Self {
        Self {
            name: name.into(),
            colour,
            code,
        }
    }
}

fn serialize_colour<S: serde::Serializer>(colour: &Colour, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&colour.to_string())
}

/// The 16 standard entries, in declaration order.
///
/// Declaration order breaks distance ties, so it must not be re-sorted.
const STANDARD: [(&str, Colour, char); 16] = [
    ("BLACK", Colour::rgb(0, 0, 0), '0'),
    ("DARK_BLUE", Colour::rgb(0, 0, 170), '1'),
    ("DARK_GREEN", Colour::rgb(0, 170, 0), '2'),
    ("DARK_AQUA", Colour::rgb(0, 170, 170), '3'),
    ("DARK_RED", Colour::rgb(170, 0, 0), '4'),
    ("DARK_PURPLE", Colour::rgb(170, 0, 170), '5'),
    ("GOLD", Colour::rgb(255, 170, 0), '6'),
    ("GRAY", Colour::rgb(170, 170, 170), '7'),
    ("DARK_GRAY", Colour::rgb(85, 85, 85), '8'),
    ("BLUE", Colour::rgb(85, 85, 255), '9'),
    ("GREEN", Colour::rgb(85, 255, 85), 'a'),
    ("AQUA", Colour::rgb(85, 255, 255), 'b'),
    ("RED", Colour::rgb(255, 85, 85), 'c'),
    ("LIGHT_PURPLE", Colour::rgb(255, 85, 255), 'd'),
    ("YELLOW", Colour::rgb(255, 255, 85), 'e'),
    ("WHITE", Colour::rgb(255, 255, 255), 'f'),
];

/// An immutable, non-empty set of reference colours.
///
/// Palettes are never changed in place; [`LegacyPalette::with_entries`]
/// produces a new palette instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyPalette {
    entries: Vec<PaletteEntry>,
}

impl LegacyPalette {
    /// Create a palette from entries. Fails if `entries` is empty.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ChromaError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// The standard 16-colour palette.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD
                .iter()
                .map(|&(name, colour, code)| PaletteEntry::new(name, colour, code))
                .collect(),
        }
    }

    /// A new palette with `extra` appended after the existing entries.
    pub fn with_entries(&self, extra: impl IntoIterator<Item = PaletteEntry>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(extra);
        Self { entries }
    }

    /// Entry closest to `colour` by Euclidean RGB distance.
    ///
    /// Ties resolve to the entry declared first.
    pub fn nearest(&self, colour: Colour) -> &PaletteEntry {
        // Non-empty by construction.
        let mut best = &self.entries[0];
        let mut best_distance = best.colour.distance_squared(colour);

        for entry in &self.entries[1..] {
            let distance = entry.colour.distance_squared(colour);
            if distance < best_distance {
                best = entry;
                best_distance = distance;
            }
        }

        best
    }

    /// Look up an entry by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LegacyPalette {
    fn default() -> Self {
        Self::standard()
    }
}
