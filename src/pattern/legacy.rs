//! Rewrites older markup spellings into the canonical grammar.
//!
//! | Older spelling | Canonical |
//! |---|---|
//! | `<GRADIENT:a>text</GRADIENT:b>`, `<#a>text</#b>` | `<#a:#b>text</g>` |
//! | `<RAINBOW50>text</RAINBOW>`, `<rainbow:50>text</rainbow>`, `<rainbow>text</rainbow>`, `<R>text</R>` | `<R:50>text</R>` |
//! | `<SOLID:a>`, `{#a}`, `[#a]`, `&#a` | `#a` |
//!
//! A span is only rewritten when its hex literals and saturation are
//! valid; otherwise the original spelling is left as literal text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{decode_hex, decode_saturation, scan, MarkupProcessor, Resolver};

/// Saturation percent used when a rainbow spelling omits it.
pub const DEFAULT_RAINBOW_SATURATION: u8 = 100;

static GRADIENT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<GRADIENT:([0-9A-Za-z]{6})>(.*?)</GRADIENT:([0-9A-Za-z]{6})>")
        .expect("valid regex")
});

static GRADIENT_ANGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<#([0-9A-Za-z]{6})>(.*?)</#([0-9A-Za-z]{6})>").expect("valid regex")
});

static RAINBOW_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)<rainbow:?(\d{1,3})?>(.*?)</rainbow>").expect("valid regex")
});

static RAINBOW_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<R>(.*?)</R>").expect("valid regex"));

static SOLID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<SOLID:([0-9A-Za-z]{6})>|\{#([0-9A-Za-z]{6})\}|\[#([0-9A-Za-z]{6})\]|&#([0-9A-Za-z]{6})",
    )
    .expect("valid regex")
});

/// Canonicalizes legacy spellings. Mode-independent: parse and strip both
/// produce canonical markup for the processors that follow.
#[derive(Debug, Clone)]
pub struct LegacySyntax {
    default_saturation: u8,
}

impl LegacySyntax {
    /// `default_saturation` is clamped to `0..=100`.
    pub fn new(default_saturation: u8) -> Self {
        Self {
            default_saturation: default_saturation.min(100),
        }
    }

    pub fn default_saturation(&self) -> u8 {
        self.default_saturation
    }

    /// Rewrite every valid legacy span into canonical markup.
    pub fn canonicalize(&self, input: &str) -> String {
        let out = scan::rewrite("legacy-gradient", &GRADIENT_TAG, input, two_stop);
        let out = scan::rewrite("legacy-gradient", &GRADIENT_ANGLE, &out, two_stop);
        let out = scan::rewrite("legacy-rainbow", &RAINBOW_WORD, &out, |caps| {
            let saturation = match caps.get(1) {
                Some(m) => decode_saturation(m.as_str())?,
                None => self.default_saturation,
            };
            Some(format!("<R:{}>{}</R>", saturation, &caps[2]))
        });
        let out = scan::rewrite("legacy-rainbow", &RAINBOW_BARE, &out, |caps| {
            Some(format!("<R:{}>{}</R>", self.default_saturation, &caps[1]))
        });
        scan::rewrite("legacy-solid", &SOLID, &out, |caps| {
            let hex = (1..=4).find_map(|i| caps.get(i))?.as_str();
            decode_hex(hex)?;
            Some(format!("#{hex}"))
        })
    }
}

impl Default for LegacySyntax {
    fn default() -> Self {
        Self::new(DEFAULT_RAINBOW_SATURATION)
    }
}

fn two_stop(caps: &Captures<'_>) -> Option<String> {
    decode_hex(&caps[1])?;
    decode_hex(&caps[3])?;
    Some(format!("<#{}:#{}>{}</g>", &caps[1], &caps[3], &caps[2]))
}

impl MarkupProcessor for LegacySyntax {
    fn name(&self) -> &str {
        "legacy"
    }

    fn parse(&self, input: &str, _resolver: &Resolver<'_>) -> String {
        self.canonicalize(input)
    }

    fn strip(&self, input: &str) -> String {
        self.canonicalize(input)
    }
}
