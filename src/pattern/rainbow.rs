//! Rainbow markup: `<R:saturation>text</R>`.

use std::sync::LazyLock;

use regex::Regex;

use super::{decode_saturation, scan, MarkupProcessor, Resolver};
use crate::math;

static RAINBOW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<R:(\d{1,3})>(.*?)</R>").expect("valid regex"));

/// Rotates hue once across the enclosed text, one colour per character.
#[derive(Debug, Clone, Default)]
pub struct RainbowProcessor;

impl RainbowProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupProcessor for RainbowProcessor {
    fn name(&self) -> &str {
        "rainbow"
    }

    fn parse(&self, input: &str, resolver: &Resolver<'_>) -> String {
        scan::rewrite(self.name(), &RAINBOW, input, |caps| {
            let saturation = decode_saturation(&caps[1])?;
            let text = resolver.span_text(&caps[2]);
            let colours = math::rainbow(text.chars().count(), f32::from(saturation) / 100.0);
            Some(resolver.paint(&text, &colours))
        })
    }

    fn strip(&self, input: &str) -> String {
        scan::rewrite(self.name(), &RAINBOW, input, |caps| {
            decode_saturation(&caps[1]).map(|_| caps[2].to_string())
        })
    }
}
