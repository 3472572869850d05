//! Multi-stop gradient markup: `<#RRGGBB:#RRGGBB[:...]>text</g>`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{decode_hex, scan, MarkupProcessor, Resolver};
use crate::math;
use crate::types::Colour;

static GRADIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(#[0-9A-Za-z]+(?::#[0-9A-Za-z]+)+)>(.*?)</g>").expect("valid regex")
});

/// Blends the enclosed text across two or more colour stops.
#[derive(Debug, Clone, Default)]
pub struct GradientProcessor;

impl GradientProcessor {
    pub fn new() -> Self {
        Self
    }
}

/// Decode the `#a:#b:...` stop list. `None` if any stop is malformed or
/// fewer than two stops resolve.
fn stops(caps: &Captures<'_>) -> Option<Vec<Colour>> {
    let stops = caps[1]
        .split(':')
        .map(decode_hex)
        .collect::<Option<Vec<_>>>()?;

    if stops.len() < 2 {
        return None;
    }
    Some(stops)
}

impl MarkupProcessor for GradientProcessor {
    fn name(&self) -> &str {
        "gradient"
    }

    fn parse(&self, input: &str, resolver: &Resolver<'_>) -> String {
        scan::rewrite(self.name(), &GRADIENT, input, |caps| {
            let stops = stops(caps)?;
            let text = resolver.span_text(&caps[2]);
            let colours = math::gradient(&stops, text.chars().count());
            Some(resolver.paint(&text, &colours))
        })
    }

    fn strip(&self, input: &str) -> String {
        scan::rewrite(self.name(), &GRADIENT, input, |caps| {
            stops(caps).map(|_| caps[2].to_string())
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
    fn test_two_stop_per_character() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        let out = GradientProcessor::new().parse("<#ff0000:#0000ff>Hi</g>", &resolver);
        assert_eq!(out, "§x§f§f§0§0§0§0H§x§0§0§0§0§f§fi");
    }

    #[test]
    fn test_two_stop_legacy() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        let out = GradientProcessor::new().parse("<#ff0000:#0000ff>Hi</g>", &resolver);
        assert_eq!(out, "§4H§1i");
    }

    #[test]
    fn test_three_stop() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        // pieces "ab" and "c": red, half-way to white, then white
        let out = GradientProcessor::new()
            .parse("<#aa0000:#ffffff:#ffffff>abc</g>", &resolver);
        assert_eq!(out, "§4a§7b§fc");
    }

    #[test]
    fn test_surrounding_text_kept() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, false);

        let out = GradientProcessor::new()
            .parse("pre <#ffffff:#ffffff>mid</g> post", &resolver);
        assert_eq!(out, "pre §fmid post");
    }

    #[test]
    fn test_malformed_stop_left_alone() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        let gradient = GradientProcessor::new();
        let input = "<#ff00zz:#0000ff>Hi</g>";
        assert_eq!(gradient.parse(input, &resolver), input);
        assert_eq!(gradient.strip(input), input);

        let short = "<#fff:#000>Hi</g>";
        assert_eq!(gradient.strip(short), short);
    }

    #[test]
    fn test_malformed_does_not_hide_later_match() {
        let gradient = GradientProcessor::new();
        let input = "<#bad:#000000> <#ff0000:#00ff00>ok</g>";
        assert_eq!(gradient.strip(input), "<#bad:#000000> ok");
    }

    #[test]
    fn test_strip() {
        let gradient = GradientProcessor::new();
        assert_eq!(
            gradient.strip("a <#ff0000:#00ff00:#0000ff>multi\nline</g> b"),
            "a multi\nline b"
        );
    }

    #[test]
    fn test_empty_text() {
        let palette = LegacyPalette::standard();
        let encoder = SectionEncoder::default();
        let resolver = Resolver::new(&palette, &encoder, true);

        assert_eq!(GradientProcessor::new().parse("x<#ff0000:#0000ff></g>y", &resolver), "xy");
    }
}
