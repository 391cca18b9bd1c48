// Wed Feb 11 2026 - Alex

use crate::error::ExtractError;
use crate::model::{AggregateId, AggregateType, BitOffset, Field, TypeArena, TypeRef};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Wire shape of the frontend's type dump. `aggregates` is the arena in
/// declaration order; `type.aggregate` values are arena indices.
#[derive(Debug, Deserialize)]
struct RawDocument {
    aggregates: Vec<RawAggregate>,
}

#[derive(Debug, Deserialize)]
struct RawAggregate {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    byte_offset: u64,
    #[serde(default)]
    bit_offset: u64,
    #[serde(rename = "type")]
    ty: RawType,
    #[serde(default)]
    attributes: Vec<String>,
    #[serde(default)]
    artificial: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawType {
    Scalar(String),
    Aggregate(usize),
}

pub fn load_file(path: &Path) -> Result<TypeArena, ExtractError> {
    let text = fs::read_to_string(path)?;
    load_str(&text)
}

pub fn load_str(text: &str) -> Result<TypeArena, ExtractError> {
    let document: RawDocument = serde_json::from_str(text)?;
    build_arena(document)
}

fn build_arena(document: RawDocument) -> Result<TypeArena, ExtractError> {
    let len = document.aggregates.len();
    let mut arena = TypeArena::new();

    for raw in document.aggregates {
        let mut aggregate = match raw.name {
            Some(name) => AggregateType::named(name),
            None => AggregateType::anonymous(),
        };
        for raw_field in raw.fields {
            let ty = match raw_field.ty {
                RawType::Scalar(scalar) => TypeRef::Scalar(scalar),
                RawType::Aggregate(index) => {
                    if index >= len {
                        return Err(ExtractError::BadAggregateRef { index, len });
                    }
                    TypeRef::Aggregate(AggregateId::new(index))
                }
            };
            aggregate.add_field(
                Field::new(
                    raw_field.name,
                    BitOffset::from_parts(raw_field.byte_offset, raw_field.bit_offset),
                    ty,
                )
                .with_attributes(raw_field.attributes)
                .with_artificial(raw_field.artificial),
            );
        }
        arena.insert(aggregate);
    }
    check_cycles(&arena)?;
    Ok(arena)
}

/// A field nesting its own aggregate by value cannot come from a real
/// frontend, and it would never terminate the walk. Iterative DFS over the
/// by-value nesting edges, so arbitrarily deep dumps cannot exhaust the
/// stack either.
fn check_cycles(arena: &TypeArena) -> Result<(), ExtractError> {
    const IN_PROGRESS: u8 = 1;
    const DONE: u8 = 2;
    let mut state = vec![0u8; arena.len()];

    for root in 0..arena.len() {
        if state[root] != 0 {
            continue;
        }
        state[root] = IN_PROGRESS;
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some(entry) = stack.last_mut() {
            let (index, field_pos) = *entry;
            let fields = arena.get(AggregateId::new(index)).fields();
            if field_pos >= fields.len() {
                state[index] = DONE;
                stack.pop();
                continue;
            }
            entry.1 += 1;

            if let TypeRef::Aggregate(child) = fields[field_pos].type_ref() {
                let child = child.index();
                match state[child] {
                    IN_PROGRESS => {
                        return Err(ExtractError::CyclicAggregateRef { index: child })
                    }
                    DONE => {}
                    _ => {
                        state[child] = IN_PROGRESS;
                        stack.push((child, 0));
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "aggregates": [
            {
                "name": "S",
                "fields": [
                    {
                        "name": "a",
                        "byte_offset": 0,
                        "type": { "scalar": "int" },
                        "attributes": ["extract_offset"]
                    },
                    { "byte_offset": 4, "type": { "aggregate": 1 } }
                ]
            },
            {
                "fields": [
                    { "name": "b", "bit_offset": 3, "type": { "scalar": "unsigned" } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_sample() {
        let arena = load_str(SAMPLE).unwrap();
        assert_eq!(arena.len(), 2);

        let ids: Vec<_> = arena.ids().collect();
        let s = arena.get(ids[0]);
        assert_eq!(s.name(), Some("S"));
        assert_eq!(s.fields().len(), 2);
        assert_eq!(s.fields()[0].attributes(), ["extract_offset"]);
        assert_eq!(s.fields()[1].offset().as_bits(), 32);
        assert!(s.fields()[1].name().is_none());
        assert!(matches!(s.fields()[1].type_ref(), TypeRef::Aggregate(_)));

        let anon = arena.get(ids[1]);
        assert!(anon.is_anonymous());
        assert_eq!(anon.fields()[0].offset().as_bits(), 3);
    }

    #[test]
    fn test_aggregate_reference_out_of_range() {
        let text = r#"{
            "aggregates": [
                { "name": "S", "fields": [ { "byte_offset": 0, "type": { "aggregate": 7 } } ] }
            ]
        }"#;

        match load_str(text).unwrap_err() {
            ExtractError::BadAggregateRef { index, len } => {
                assert_eq!(index, 7);
                assert_eq!(len, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_self_nested_anonymous_aggregate_is_rejected() {
        // Anonymous aggregate #1 holding a field of its own type: the walk
        // of such a dump would never terminate, so loading must fail.
        let text = r#"{
            "aggregates": [
                { "name": "Root", "fields": [ { "byte_offset": 0, "type": { "aggregate": 1 } } ] },
                { "fields": [ { "byte_offset": 0, "type": { "aggregate": 1 } } ] }
            ]
        }"#;

        match load_str(text).unwrap_err() {
            ExtractError::CyclicAggregateRef { index } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_mutually_nested_aggregates_are_rejected() {
        let text = r#"{
            "aggregates": [
                { "name": "A", "fields": [ { "byte_offset": 0, "type": { "aggregate": 1 } } ] },
                { "fields": [ { "byte_offset": 0, "type": { "aggregate": 0 } } ] }
            ]
        }"#;

        assert!(matches!(
            load_str(text).unwrap_err(),
            ExtractError::CyclicAggregateRef { .. }
        ));
    }

    #[test]
    fn test_shared_aggregate_without_cycle_is_accepted() {
        // Two parents nesting the same payload type is sharing, not a cycle.
        let text = r#"{
            "aggregates": [
                { "name": "A", "fields": [ { "byte_offset": 0, "type": { "aggregate": 2 } } ] },
                { "name": "B", "fields": [ { "byte_offset": 0, "type": { "aggregate": 2 } } ] },
                { "fields": [ { "name": "p", "byte_offset": 0, "type": { "scalar": "int" } } ] }
            ]
        }"#;

        assert_eq!(load_str(text).unwrap().len(), 3);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        assert!(matches!(
            load_str("{ \"aggregates\": 3 }").unwrap_err(),
            ExtractError::Parse(_)
        ));
    }
}
