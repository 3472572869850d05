//! Solid colour markup: `#RRGGBB`.

use std::sync::LazyLock;

use regex::Regex;

use super::{decode_hex, scan, MarkupProcessor, Resolver};

// Six alphanumerics so that malformed literals are matched and then
// rejected, rather than silently partially matched.
static SOLID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Za-z]{6})").expect("valid regex"));

/// Replaces `#RRGGBB` with a style code. Carries no text of its own, so
/// strip mode removes the match entirely.
#[derive(Debug, Clone, Default)]
pub struct SolidProcessor;

impl SolidProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupProcessor for SolidProcessor {
    fn name(&self) -> &str {
        "solid"
    }

    fn parse(&self, input: &str, resolver: &Resolver<'_>) -> String {
        scan::rewrite(self.name(), &SOLID, input, |caps| {
            decode_hex(&caps[1]).map(|colour| resolver.resolve(colour))
        })
    }

    fn strip(&self, input: &str) -> String {
        scan::rewrite(self.name(), &SOLID, input, |caps| {
            decode_hex(&caps[1]).map(|_| String::new())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::SectionEncoder;
    use crate::types::LegacyPalette;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_colour() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        let out = SolidProcessor::new().parse("#ff0000Hello", &resolver);
        assert_eq!(out, "§x§f§f§0§0§0§0Hello");
    }

    #[test]
    fn test_parse_legacy() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        let out = SolidProcessor::new().parse("#FF5555a #0000AAb", &resolver);
        assert_eq!(out, "§ca §1b");
    }

    #[test]
    fn test_malformed_left_alone() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        let solid = SolidProcessor::new();
        assert_eq!(solid.parse("#zz0000Text", &resolver), "#zz0000Text");
        assert_eq!(solid.parse("#fff short", &resolver), "#fff short");
        assert_eq!(solid.strip("#zz0000Text"), "#zz0000Text");
    }

    #[test]
    fn test_strip_removes_match() {
        let solid = SolidProcessor::new();
        assert_eq!(solid.strip("#ff0000Hello #00ff00World"), "Hello World");
    }
}
