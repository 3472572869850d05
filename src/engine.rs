//! Engine facade: one registry, one palette, one encoder.
//!
//! ```
//! use chromatext::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.colorize("#ff0000Hello", true), "§x§f§f§0§0§0§0Hello");
//! assert_eq!(engine.colorize("#ff0000Hello", false), "§4Hello");
//! assert_eq!(engine.strip_markup("<R:50>Hi</R>"), "Hi");
//! ```

use crate::config::EngineConfig;
use crate::encode::{EncoderKind, StyleEncoder, SECTION_SIGN};
use crate::error::Result;
use crate::pattern::{Mode, Resolver, DEFAULT_RAINBOW_SATURATION};
use crate::registry::PatternRegistry;
use crate::types::LegacyPalette;

/// Pure markup engine. Shareable across threads; calls never mutate it.
#[derive(Debug)]
pub struct Engine {
    registry: PatternRegistry,
    palette: LegacyPalette,
    encoder: Box<dyn StyleEncoder>,
}

impl Engine {
    /// Standard registry, standard palette, section encoder.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Build an engine from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(EngineBuilder::new()
            .registry(PatternRegistry::standard(config.rainbow_saturation))
            .palette(config.legacy_palette()?)
            .encoder(config.encoder.build(config.marker))
            .build())
    }

    /// Replace markup with encoded styling.
    ///
    /// With `full_colour` off, every colour is quantized to the nearest
    /// legacy palette entry before encoding.
    pub fn colorize(&self, text: &str, full_colour: bool) -> String {
        let resolver = Resolver::new(&self.palette, self.encoder.as_ref(), full_colour);
        self.registry.apply(text, &Mode::Parse(resolver))
    }

    /// Remove markup, keeping the literal text.
    pub fn strip_markup(&self, text: &str) -> String {
        self.registry.apply(text, &Mode::Strip)
    }

    /// Remove encoded styling produced by this engine's encoder.
    pub fn strip_codes(&self, text: &str) -> String {
        self.encoder.strip_codes(text)
    }

    /// Code that clears styling in this engine's encoding.
    pub fn reset(&self) -> String {
        self.encoder.reset()
    }

    pub fn palette(&self) -> &LegacyPalette {
        &self.palette
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn encoder(&self) -> &dyn StyleEncoder {
        self.encoder.as_ref()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Engine`].
#[derive(Debug)]
pub struct EngineBuilder {
    registry: Option<PatternRegistry>,
    palette: LegacyPalette,
    encoder: Option<Box<dyn StyleEncoder>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            registry: None,
            palette: LegacyPalette::standard(),
            encoder: None,
        }
    }

    /// Use a custom registry instead of the standard order.
    pub fn registry(mut self, registry: PatternRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn palette(mut self, palette: LegacyPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn encoder(mut self, encoder: Box<dyn StyleEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            registry: self
                .registry
                .unwrap_or_else(|| PatternRegistry::standard(DEFAULT_RAINBOW_SATURATION)),
            palette: self.palette,
            encoder: self
                .encoder
                .unwrap_or_else(|| EncoderKind::Section.build(SECTION_SIGN)),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::AnsiEncoder;
    use crate::types::{Colour, PaletteEntry};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn test_colorize_mixed() {
        let engine = Engine::new();
        let out = engine.colorize("#ffffffa <#ff0000:#0000ff>Hi</g> <R:0>ok</R>", false);
        assert_eq!(out, "§fa §4H§1i §fok");
    }

    #[test]
    fn test_colorize_legacy_spelling() {
        let engine = Engine::new();
        assert_eq!(
            engine.colorize("<GRADIENT:ff0000>Hi</GRADIENT:0000ff>", false),
            "§4H§1i"
        );
        assert_eq!(engine.colorize("{#55ff55}go", false), "§ago");
    }

    #[test]
    fn test_strip_markup() {
        let engine = Engine::new();
        assert_eq!(
            engine.strip_markup("#ff0000Red <#ff0000:#00ff00>grad</g> <rainbow>rb</rainbow>"),
            "Red grad rb"
        );
    }

    #[test]
    fn test_empty_input() {
        let engine = Engine::new();
        assert_eq!(engine.colorize("", true), "");
        assert_eq!(engine.strip_markup(""), "");
    }

    #[test]
    fn test_custom_palette_and_encoder() {
        let palette = LegacyPalette::standard().with_entries([PaletteEntry::new(
            "ORANGE",
            Colour::rgb(255, 128, 0),
            'g',
        )]);
        let engine = Engine::builder()
            .palette(palette)
            .encoder(Box::new(AnsiEncoder::new()))
            .build();

        assert_eq!(engine.colorize("#ff8000x", false), "\x1b[38;2;255;128;0mx");
        assert_eq!(engine.colorize("#aa0000x", false), "\x1b[31mx");
        assert_eq!(engine.strip_codes(&engine.colorize("#aa0000x", true)), "x");
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::parse("marker: '&'\nrainbow_saturation: 0\n").unwrap();
        let engine = Engine::from_config(&config).unwrap();
        assert_eq!(engine.colorize("<rainbow>ab</rainbow>", false), "&fab");
        assert_eq!(engine.reset(), "&r");
    }
}
