//! Style encoders: turn resolved colours into output escape sequences.
//!
//! The engine only decides *which* colour (or palette entry) applies to a
//! run of text. How that choice is spelled in the output string is up to a
//! [`StyleEncoder`].

use std::fmt;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{Colour, PaletteEntry};

/// Encodes resolved styles into a string representation.
pub trait StyleEncoder: fmt::Debug + Send + Sync {
    /// Code selecting an arbitrary RGB colour.
    fn rgb(&self, colour: Colour) -> String;

    /// Code selecting a legacy palette entry.
    fn legacy(&self, entry: &PaletteEntry) -> String;

    /// Code clearing all styling.
    fn reset(&self) -> String;

    /// Remove every code this encoder can produce, keeping the text.
    fn strip_codes(&self, input: &str) -> String;
}

/// Selects one of the built-in encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    /// Section-sign codes (`§x§r§r§g§g§b§b`, `§c`).
    #[default]
    Section,
    /// ANSI SGR escape sequences.
    Ansi,
}

impl EncoderKind {
    /// Build the encoder. `marker` only applies to [`EncoderKind::Section`].
    pub fn build(self, marker: char) -> Box<dyn StyleEncoder> {
        match self {
            EncoderKind::Section => Box::new(SectionEncoder::new(marker)),
            EncoderKind::Ansi => Box::new(AnsiEncoder::new()),
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncoderKind::Section => write!(f, "section"),
            EncoderKind::Ansi => write!(f, "ansi"),
        }
    }
}

/// Default marker for [`SectionEncoder`].
pub const SECTION_SIGN: char = '§';

/// Marker-prefixed codes: `§x` followed by six `§<digit>` pairs for RGB,
/// `§<code>` for palette entries.
#[derive(Debug, Clone)]
pub struct SectionEncoder {
    marker: char,
    codes: Regex,
}

impl SectionEncoder {
    pub fn new(marker: char) -> Self {
        let m = regex::escape(&marker.to_string());
        let pattern = format!("{m}[xX](?:{m}[0-9a-fA-F]){{6}}|{m}[0-9a-zA-Z]");
        Self {
            marker,
            // The marker is escaped, so the pattern is always valid.
            codes: Regex::new(&pattern).expect("valid regex"),
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }
}

impl Default for SectionEncoder {
    fn default() -> Self {
        Self::new(SECTION_SIGN)
    }
}

impl StyleEncoder for SectionEncoder {
    fn rgb(&self, colour: Colour) -> String {
        let mut out = String::with_capacity(14 * self.marker.len_utf8());
        out.push(self.marker);
        out.push('x');
        for digit in colour.hex_digits().chars() {
            out.push(self.marker);
            out.push(digit);
        }
        out
    }

    fn legacy(&self, entry: &PaletteEntry) -> String {
        format!("{}{}", self.marker, entry.code)
    }

    fn reset(&self) -> String {
        format!("{}r", self.marker)
    }

    fn strip_codes(&self, input: &str) -> String {
        self.codes.replace_all(input, "").into_owned()
    }
}

/// ANSI SGR escape sequences.
#[derive(Debug, Clone)]
pub struct AnsiEncoder {
    codes: Regex,
}

impl AnsiEncoder {
    pub fn new() -> Self {
        Self {
            codes: Regex::new(r"\x1b\[[0-9;]*m").expect("valid regex"),
        }
    }
}

impl Default for AnsiEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// SGR foreground code for a standard palette code character.
fn sgr_for_code(code: char) -> Option<u8> {
    let sgr = match code {
        '0' => 30,
        '1' => 34,
        '2' => 32,
        '3' => 36,
        '4' => 31,
        '5' => 35,
        '6' => 33,
        '7' => 37,
        '8' => 90,
        '9' => 94,
        'a' => 92,
        'b' => 96,
        'c' => 91,
        'd' => 95,
        'e' => 93,
        'f' => 97,
        _ => return None,
    };
    Some(sgr)
}

impl StyleEncoder for AnsiEncoder {
    fn rgb(&self, colour: Colour) -> String {
        format!("\x1b[38;2;{};{};{}m", colour.r, colour.g, colour.b)
    }

    fn legacy(&self, entry: &PaletteEntry) -> String {
        match sgr_for_code(entry.code) {
            Some(sgr) => format!("\x1b[{sgr}m"),
            // Custom entries have no SGR slot
            None => self.rgb(entry.colour),
        }
    }

    fn reset(&self) -> String {
        "\x1b[0m".to_string()
    }

    fn strip_codes(&self, input: &str) -> String {
        self.codes.replace_all(input, "").into_owned()
    }
}
