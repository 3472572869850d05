use super::{Applier, Operation, Priority, SequentialApplier};

/// Defers operations into five priority buckets until resolved.
#[derive(Debug, Clone, Default)]
pub struct PriorityApplier {
    original: String,
    buckets: [Vec<Operation>; 5],
}

impl PriorityApplier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            original: value.into(),
            buckets: Default::default(),
        }
    }

    /// The string operations are applied to.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Operations filed under `priority`, in insertion order.
    pub fn bucket(&self, priority: Priority) -> &[Operation] {
        &self.buckets[priority.index()]
    }

    /// Total number of queued operations.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Check if no operations are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Applier for PriorityApplier {
    /// Queue `operation`. An operation already in the bucket is not added
    /// again.
    fn apply_with(&mut self, priority: Priority, operation: Operation) -> &mut Self {
        let bucket = &mut self.buckets[priority.index()];
        if !bucket.iter().any(|op| op.same(&operation)) {
            bucket.push(operation);
        }
        self
    }

    fn resolve(&self) -> String {
        let mut value = self.original.clone();
        for bucket in &self.buckets {
            for operation in bucket {
                value = operation.run(&value);
            }
        }
        value
    }
}

impl From<SequentialApplier> for PriorityApplier {
    /// Seed a prioritized pipeline with the sequential pipeline's value.
    fn from(pipeline: SequentialApplier) -> Self {
        Self::new(pipeline.resolve())
    }
}
