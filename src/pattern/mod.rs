//! Markup pattern processors.
//!
//! Each markup family (solid, gradient, rainbow, plus the legacy-spelling
//! canonicalizer) is a processor with two actions:
//!
//! - *parse*: replace the markup with resolved style codes
//! - *strip*: replace the markup with its bare text
//!
//! Canonical surface grammar:
//!
//! ```text
//! #RRGGBB                          solid colour
//! <#RRGGBB:#RRGGBB[:#RRGGBB...]>text</g>   multi-stop gradient
//! <R:saturation>text</R>           rainbow, saturation 0-100
//! ```
//!
//! A match whose hex literals or parameters fail validation is left in
//! place as literal text; the rest of the string is still processed.

mod gradient;
mod legacy;
mod rainbow;
mod scan;
mod solid;

use std::fmt;

use crate::encode::StyleEncoder;
use crate::registry::PatternRegistry;
use crate::types::{Colour, LegacyPalette};

pub use gradient::GradientProcessor;
pub use legacy::{LegacySyntax, DEFAULT_RAINBOW_SATURATION};
pub use rainbow::RainbowProcessor;
pub use solid::SolidProcessor;

/// Resolves colours to encoded style codes for one parse call.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    palette: &'a LegacyPalette,
    encoder: &'a dyn StyleEncoder,
    full_colour: bool,
    nested: Option<&'a PatternRegistry>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver. With `full_colour` off, every colour is
    /// quantized to `palette` before encoding.
    pub fn new(palette: &'a LegacyPalette, encoder: &'a dyn StyleEncoder, full_colour: bool) -> Self {
        Self {
            palette,
            encoder,
            full_colour,
            nested: None,
        }
    }

    /// Strip markup nested inside span text with `registry` before painting.
    pub fn with_nested(self, registry: &'a PatternRegistry) -> Self {
        Self {
            nested: Some(registry),
            ..self
        }
    }

    /// The literal text of a span's content.
    ///
    /// Nested markup is not resolved: the enclosing span colours whatever
    /// text stripping the content would leave.
    pub fn span_text(&self, text: &str) -> String {
        match self.nested {
            Some(registry) => registry.strip(text),
            None => text.to_string(),
        }
    }

    /// Whether RGB codes are emitted.
    pub fn full_colour(&self) -> bool {
        self.full_colour
    }

    /// Encode a single colour.
    pub fn resolve(&self, colour: Colour) -> String {
        if self.full_colour {
            self.encoder.rgb(colour)
        } else {
            self.encoder.legacy(self.palette.nearest(colour))
        }
    }

    /// Encode `text` with one colour per character.
    ///
    /// A code is only emitted when it differs from the previous one, so
    /// runs of characters sharing a resolved style carry a single code.
    /// Extra colours are ignored; extra characters keep the last style.
    pub fn paint(&self, text: &str, colours: &[Colour]) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        let mut current: Option<String> = None;
        let mut chars = text.char_indices();

        for &colour in colours {
            let Some((_, ch)) = chars.next() else {
                break;
            };
            let code = self.resolve(colour);
            if current.as_deref() != Some(code.as_str()) {
                out.push_str(&code);
                current = Some(code);
            }
            out.push(ch);
        }

        if let Some((idx, _)) = chars.next() {
            out.push_str(&text[idx..]);
        }
        out
    }
}

/// Which action a registry pass performs.
#[derive(Debug, Clone, Copy)]
pub enum Mode<'a> {
    /// Replace markup with resolved style codes.
    Parse(Resolver<'a>),
    /// Replace markup with its literal text.
    Strip,
}

/// A markup family.
pub trait MarkupProcessor: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Replace every valid match with resolved styling.
    fn parse(&self, input: &str, resolver: &Resolver<'_>) -> String;

    /// Replace every valid match with its bare text.
    fn strip(&self, input: &str) -> String;

    /// Run the action selected by `mode`.
    fn apply(&self, input: &str, mode: &Mode<'_>) -> String {
        match mode {
            Mode::Parse(resolver) => self.parse(input, resolver),
            Mode::Strip => self.strip(input),
        }
    }
}

/// The built-in markup families, plus an escape hatch for new ones.
#[derive(Debug)]
pub enum Processor {
    Legacy(LegacySyntax),
    Gradient(GradientProcessor),
    Rainbow(RainbowProcessor),
    Solid(SolidProcessor),
    Custom(Box<dyn MarkupProcessor>),
}

impl Processor {
    fn inner(&self) -> &dyn MarkupProcessor {
        match self {
            Processor::Legacy(p) => p,
            Processor::Gradient(p) => p,
            Processor::Rainbow(p) => p,
            Processor::Solid(p) => p,
            Processor::Custom(p) => p.as_ref(),
        }
    }
}

impl MarkupProcessor for Processor {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn parse(&self, input: &str, resolver: &Resolver<'_>) -> String {
        self.inner().parse(input, resolver)
    }

    fn strip(&self, input: &str) -> String {
        self.inner().strip(input)
    }
}

impl From<LegacySyntax> for Processor {
    fn from(p: LegacySyntax) -> Self {
        Processor::Legacy(p)
    }
}

impl From<GradientProcessor> for Processor {
    fn from(p: GradientProcessor) -> Self {
        Processor::Gradient(p)
    }
}

impl From<RainbowProcessor> for Processor {
    fn from(p: RainbowProcessor) -> Self {
        Processor::Rainbow(p)
    }
}

impl From<SolidProcessor> for Processor {
    fn from(p: SolidProcessor) -> Self {
        Processor::Solid(p)
    }
}

impl From<Box<dyn MarkupProcessor>> for Processor {
    fn from(p: Box<dyn MarkupProcessor>) -> Self {
        Processor::Custom(p)
    }
}

/// Parse a `RRGGBB` capture, logging and discarding failures.
fn decode_hex(hex: &str) -> Option<Colour> {
    match Colour::from_hex(hex) {
        Ok(colour) => Some(colour),
        Err(err) => {
            tracing::debug!(hex, %err, "skipping match with malformed hex");
            None
        }
    }
}

/// Parse a saturation percentage capture (`0..=100`).
fn decode_saturation(value: &str) -> Option<u8> {
    match value.parse::<u8>() {
        Ok(percent) if percent <= 100 => Some(percent),
        _ => {
            tracing::debug!(value, "skipping match with out-of-range saturation");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::SectionEncoder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paint_merges_runs() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        let red = Colour::rgb(255, 0, 0);
        let near_red = Colour::rgb(250, 10, 0);
        assert_eq!(resolver.paint("abc", &[red, near_red, Colour::WHITE]), "§4ab§fc");
    }

    #[test]
    fn test_paint_full_colour() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        let out = resolver.paint("ab", &[Colour::BLACK, Colour::BLACK]);
        assert_eq!(out, "§x§0§0§0§0§0§0ab");
    }

    #[test]
    fn test_paint_short_colours_keeps_tail() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        assert_eq!(resolver.paint("héllo", &[Colour::WHITE, Colour::WHITE]), "§fhéllo");
        assert_eq!(resolver.paint("", &[Colour::WHITE]), "");
    }

    #[test]
    fn test_decode_saturation() {
        assert_eq!(decode_saturation("50"), Some(50));
        assert_eq!(decode_saturation("100"), Some(100));
        assert_eq!(decode_saturation("101"), None);
        assert_eq!(decode_saturation("999"), None);
    }
}
