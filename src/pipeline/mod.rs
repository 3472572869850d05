//! Composable string-transformation pipelines.
//!
//! Two disciplines share the [`Applier`] contract:
//!
//! - [`SequentialApplier`] applies each operation immediately, in call
//!   order, ignoring priority.
//! - [`PriorityApplier`] files operations into five buckets and applies
//!   them on [`Applier::resolve`]: `Highest` first, `Lowest` last,
//!   insertion order within a bucket.
//!
//! Converting one discipline into the other seeds the new pipeline with the
//! current resolved string; bucket structure does not survive.
//!
//! ```
//! use chromatext::pipeline::{Applier, Operation, Priority, PriorityApplier};
//!
//! let mut pipeline = PriorityApplier::new("x");
//! pipeline
//!     .apply_with(Priority::Low, Operation::new(|s| format!("f({s})")))
//!     .apply_with(Priority::Highest, Operation::new(|s| format!("g({s})")))
//!     .apply(Operation::new(|s| format!("h({s})")));
//!
//! assert_eq!(pipeline.resolve(), "f(h(g(x)))");
//! ```

mod priority;
mod sequential;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChromaError, Result};

pub use priority::PriorityApplier;
pub use sequential::SequentialApplier;

/// A shared string-to-string operation.
///
/// Clones share identity: a priority bucket holds any given operation at
/// most once.
#[derive(Clone)]
pub struct Operation(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Operation {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the operation.
    pub fn run(&self, input: &str) -> String {
        (self.0)(input)
    }

    /// Whether `self` and `other` are the same operation.
    pub fn same(&self, other: &Operation) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operation")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Application tier for [`PriorityApplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Highest,
    High,
    #[default]
    Normal,
    Low,
    Lowest,
}

impl Priority {
    /// All tiers in application order.
    pub const ALL: [Priority; 5] = [
        Priority::Highest,
        Priority::High,
        Priority::Normal,
        Priority::Low,
        Priority::Lowest,
    ];

    /// Position in application order (`Highest` is 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::Highest => "highest",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
            Priority::Lowest => "lowest",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Priority {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ChromaError::Usage {
                message: if name.is_empty() {
                    "missing priority".to_string()
                } else {
                    format!("unknown priority: {name}")
                },
                help: Some("Use one of: highest, high, normal, low, lowest".to_string()),
            })
    }
}

/// The shared pipeline contract.
pub trait Applier {
    /// Add `operation` under `priority`.
    fn apply_with(&mut self, priority: Priority, operation: Operation) -> &mut Self;

    /// Add `operation` at [`Priority::Normal`].
    fn apply(&mut self, operation: Operation) -> &mut Self {
        self.apply_with(Priority::Normal, operation)
    }

    /// Add an operation whose arguments may be absent.
    ///
    /// Both arguments are checked before anything is added; a missing one
    /// is a caller bug and is reported as [`ChromaError::Usage`].
    fn try_apply(
        &mut self,
        priority: Option<Priority>,
        operation: Option<Operation>,
    ) -> Result<&mut Self> {
        let Some(operation) = operation else {
            return Err(ChromaError::Usage {
                message: "missing operation".to_string(),
                help: None,
            });
        };
        let Some(priority) = priority else {
            return Err(ChromaError::Usage {
                message: "missing priority".to_string(),
                help: Some("Use Applier::apply for the default priority".to_string()),
            });
        };
        Ok(self.apply_with(priority, operation))
    }

    /// The transformed string.
    fn resolve(&self) -> String;
}
