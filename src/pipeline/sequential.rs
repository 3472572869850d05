use super::{Applier, Operation, Priority, PriorityApplier};

/// Applies each operation as soon as it is added.
#[derive(Debug, Clone, Default)]
pub struct SequentialApplier {
    value: String,
}

impl SequentialApplier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Applier for SequentialApplier {
    fn apply_with(&mut self, _priority: Priority, operation: Operation) -> &mut Self {
        self.value = operation.run(&self.value);
        self
    }

    fn resolve(&self) -> String {
        self.value.clone()
    }
}

impl From<PriorityApplier> for SequentialApplier {
    /// Flatten: the new pipeline starts from the resolved string.
    fn from(pipeline: PriorityApplier) -> Self {
        Self::new(pipeline.resolve())
    }
}
