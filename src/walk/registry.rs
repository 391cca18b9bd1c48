// Mon Feb 9 2026 - Alex

use ahash::AHashSet;
use crate::model::AggregateId;

/// Grow-only set of aggregates that have been fully walked. Guards against
/// duplicate completion events and shared anonymous sub-aggregates.
#[derive(Debug, Default)]
pub struct Registry {
    seen: AHashSet<AggregateId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: AggregateId) -> bool {
        self.seen.contains(&id)
    }

    /// Returns false if the aggregate was already registered.
    pub fn insert(&mut self, id: AggregateId) -> bool {
        self.seen.insert(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
