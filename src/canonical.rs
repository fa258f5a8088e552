//! Canonical documents: the smallest document with a given schema's shape.
//!
//! Feeding a canonical document back through [`infer`](crate::inference::infer)
//! reproduces the schema it was built from.
use crate::ir::Schema;
use crate::value::{Mapping, Value};

pub const CANONICAL_STRING: &str = "string";

pub fn canonical_document(schema: &Schema) -> Value {
    match schema {
        Schema::Any => Value::Null,
        Schema::Boolean => Value::Boolean(true),
        Schema::Number => Value::Number(0.0),
        Schema::String => Value::String(CANONICAL_STRING.to_owned()),
        // `{}` items came from an empty sequence (or a blank head); keep it empty
        Schema::Array { items } => match items.as_ref() {
            Schema::Any => Value::Sequence(Vec::new()),
            items => Value::Sequence(vec![canonical_document(items)]),
        },
        Schema::Object { properties, .. } => Value::Mapping(
            properties
                .iter()
                .map(|(k, v)| (k.clone(), canonical_document(v)))
                .collect(),
        ),
    }
}

/// Root mapping for a document schema; empty when `schema` is not an object.
pub fn canonical_root(schema: &Schema) -> Mapping {
    match canonical_document(schema) {
        Value::Mapping(m) => m,
        _ => Mapping::new(),
    }
}
