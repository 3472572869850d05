//! chromatext - colour markup for plain strings
//!
//! Resolves inline colour markup (solid hex, gradients, rainbows and their
//! legacy spellings) into encoded styling, either full RGB or quantized to a
//! 16-colour legacy palette. Also provides string-transformation pipelines
//! for composing markup resolution with other edits.

pub mod cli;
pub mod config;
pub mod encode;
pub mod engine;
pub mod error;
pub mod math;
pub mod output;
pub mod pattern;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use config::EngineConfig;
pub use encode::{AnsiEncoder, EncoderKind, SectionEncoder, StyleEncoder};
pub use engine::{Engine, EngineBuilder};
pub use error::{ChromaError, Result};
pub use pattern::{MarkupProcessor, Mode, Processor, Resolver};
pub use pipeline::{Applier, Operation, Priority, PriorityApplier, SequentialApplier};
pub use registry::{PatternRegistry, RegistryBuilder};
pub use types::{Colour, LegacyPalette, PaletteEntry};
