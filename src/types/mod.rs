//! Core colour types.
//!
//! - `Colour` - an RGB triple
//! - `LegacyPalette` - the fixed 16-entry palette used for quantization

mod colour;
mod palette;

pub use colour::Colour;
pub use palette::{LegacyPalette, PaletteEntry};
