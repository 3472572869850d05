//! Ordered pattern registry.
//!
//! The registry holds processors in registration order and runs them one
//! after another, each consuming the previous one's output. Order is part
//! of the contract: gradient stops are themselves valid solid-colour
//! literals, so gradients must be consumed before the solid pass sees them.
//!
//! # Example
//!
//! ```
//! use chromatext::pattern::{GradientProcessor, LegacySyntax, RainbowProcessor, SolidProcessor};
//! use chromatext::registry::RegistryBuilder;
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .register(LegacySyntax::default())
//!     .register(GradientProcessor::new())
//!     .register(RainbowProcessor::new())
//!     .register(SolidProcessor::new());
//!
//! let registry = builder.build();
//! assert_eq!(registry.strip("<R:50>Hi</R>"), "Hi");
//! ```

use crate::pattern::{
    GradientProcessor, LegacySyntax, MarkupProcessor, Mode, Processor, RainbowProcessor,
    SolidProcessor,
};

/// Upper bound on full rounds over the bindings.
const MAX_ROUNDS: usize = 64;

/// A processor owned by a registry.
#[derive(Debug)]
pub struct PatternBinding {
    processor: Processor,
}

impl PatternBinding {
    pub fn new(processor: impl Into<Processor>) -> Self {
        Self {
            processor: processor.into(),
        }
    }

    /// Processor name.
    pub fn name(&self) -> &str {
        self.processor.name()
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }
}

/// Ordered collection of pattern bindings.
///
/// The registry is immutable after construction - use `RegistryBuilder`
/// to create a new registry.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    bindings: Vec<PatternBinding>,
}

impl PatternRegistry {
    /// The standard order: legacy canonicalization, gradient, rainbow, solid.
    pub fn standard(default_saturation: u8) -> Self {
        let mut builder = RegistryBuilder::new();
        builder
            .register(LegacySyntax::new(default_saturation))
            .register(GradientProcessor::new())
            .register(RainbowProcessor::new())
            .register(SolidProcessor::new());
        builder.build()
    }

    /// Run every binding in registration order, repeating the whole
    /// sequence until the output stops changing.
    ///
    /// A later binding can expose markup to an earlier one (removing
    /// `#aaaaaa` from `<R:5#aaaaaa0>` leaves `<R:50>`), so a single round
    /// is not enough for stripping to be idempotent. In parse mode, span
    /// text is stripped with this registry before it is painted.
    ///
    /// Empty input and an empty registry both return the input unchanged.
    pub fn apply(&self, input: &str, mode: &Mode<'_>) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mode = match mode {
            Mode::Parse(resolver) => Mode::Parse(resolver.with_nested(self)),
            Mode::Strip => Mode::Strip,
        };

        let mut current = input.to_string();
        for round in 0..MAX_ROUNDS {
            let next = self.round(&current, &mode);
            if next == current {
                return next;
            }
            tracing::trace!(round, "registry round changed output");
            current = next;
        }

        tracing::warn!(rounds = MAX_ROUNDS, "registry round limit reached");
        current
    }

    fn round(&self, input: &str, mode: &Mode<'_>) -> String {
        let mut current = input.to_string();
        for binding in &self.bindings {
            current = binding.processor.apply(&current, mode);
        }
        current
    }

    /// Shorthand for [`PatternRegistry::apply`] in strip mode.
    pub fn strip(&self, input: &str) -> String {
        self.apply(input, &Mode::Strip)
    }

    /// Bindings in registration order.
    pub fn bindings(&self) -> &[PatternBinding] {
        &self.bindings
    }

    /// Binding names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.name())
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builder for constructing a PatternRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    bindings: Vec<PatternBinding>,
}

impl RegistryBuilder {
    /// Create a new registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor. It runs after everything registered before it.
    pub fn register(&mut self, processor: impl Into<Processor>) -> &mut Self {
        let binding = PatternBinding::new(processor);
        tracing::trace!(name = binding.name(), position = self.bindings.len(), "register");
        self.bindings.push(binding);
        self
    }

    /// Append a processor for a markup family outside the built-in set.
    pub fn register_custom(&mut self, processor: impl MarkupProcessor + 'static) -> &mut Self {
        self.register(Processor::Custom(Box::new(processor)))
    }

    /// Build the registry.
    pub fn build(self) -> PatternRegistry {
        PatternRegistry {
            bindings: self.bindings,
        }
    }
}
