// Mon Feb 9 2026 - Alex

use crate::model::Field;

/// Stable identity of an aggregate within one arena. The registry is keyed
/// by this rather than by name, so anonymous aggregates dedup correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AggregateId(usize);

impl AggregateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A struct or union definition.
#[derive(Debug, Clone)]
pub struct AggregateType {
    name: Option<String>,
    fields: Vec<Field>,
}

impl AggregateType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: None,
            fields: Vec::new(),
        }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Index-addressable arena holding every aggregate definition of one run,
/// in declaration order.
#[derive(Debug, Default, Clone)]
pub struct TypeArena {
    aggregates: Vec<AggregateType>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, aggregate: AggregateType) -> AggregateId {
        let id = AggregateId::new(self.aggregates.len());
        self.aggregates.push(aggregate);
        id
    }

    pub fn get(&self, id: AggregateId) -> &AggregateType {
        &self.aggregates[id.index()]
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    /// Ids in declaration order, one per completion event.
    pub fn ids(&self) -> impl Iterator<Item = AggregateId> + '_ {
        (0..self.aggregates.len()).map(AggregateId::new)
    }
}
