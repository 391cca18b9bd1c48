// Mon Feb 9 2026 - Alex

use crate::model::{AggregateId, BitOffset};
use std::fmt;

/// What a field's declaration refers to: a scalar type by name, or another
/// aggregate in the arena.
#[derive(Debug, Clone)]
pub enum TypeRef {
    Scalar(String),
    Aggregate(AggregateId),
}

#[derive(Debug, Clone)]
pub struct Field {
    name: Option<String>,
    offset: BitOffset,
    ty: TypeRef,
    attributes: Vec<String>,
    artificial: bool,
}

impl Field {
    pub fn new(name: Option<String>, offset: BitOffset, ty: TypeRef) -> Self {
        Self {
            name,
            offset,
            ty,
            attributes: Vec::new(),
            artificial: false,
        }
    }

    pub fn with_attribute(mut self, attribute: &str) -> Self {
        self.attributes.push(attribute.to_string());
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<String>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_artificial(mut self, artificial: bool) -> Self {
        self.artificial = artificial;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Offset relative to the immediate parent aggregate, pre-resolved by
    /// the frontend.
    pub fn offset(&self) -> BitOffset {
        self.offset
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Compiler-synthesized fields carry no source-level meaning and are
    /// always skipped by the walker.
    pub fn is_artificial(&self) -> bool {
        self.artificial
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} bits",
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.offset
        )
    }
}
