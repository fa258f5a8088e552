//! Single-pass schema inference over one decoded document.
//!
//! Every value is classified on its own: scalars map to their type tag,
//! sequences are sampled by their first element, mappings recurse through
//! [`classify_properties`]. Blank values (`null`, `""`) produce no schema, so
//! their keys vanish from the parent's `properties`.
//!
//! The functions here are total and pure. Given the same document they build
//! the same tree, with `properties` in source key order.
pub mod arr;
pub mod obj;

use tracing::trace;

use crate::ir::Schema;
use crate::value::{Mapping, Value};

pub use arr::classify_items;
pub use obj::classify_properties;

// ------------------------------ Classify --------------------------------- //

/// Schema for one value, or `None` when the value is blank.
pub fn classify(v: &Value) -> Option<Schema> {
    let schema = match v {
        Value::Null => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::Boolean(_) => Schema::Boolean,
        Value::Number(_) => Schema::Number,
        Value::String(_) => Schema::String,
        Value::Sequence(xs) => Schema::array(classify_items(xs)),
        Value::Mapping(m) => Schema::object(classify_properties(m)),
    };
    Some(schema)
}

// ------------------------------- Front API -------------------------------- //

/// Root schema for a document: an object titled `name`.
pub fn infer(name: &str, document: &Mapping) -> Schema {
    let properties = classify_properties(document);
    trace!(title = name, fields = document.len(), properties = properties.len(), "inferred");
    Schema::Object {
        title: Some(name.to_owned()),
        properties,
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    /// Root mapping from a JSON literal.
    pub(crate) fn doc(v: serde_json::Value) -> Mapping {
        match Value::from(v) {
            Value::Mapping(m) => m,
            other => panic!("fixture must be an object, got {}", other.kind()),
        }
    }

    fn infer_json(name: &str, v: serde_json::Value) -> serde_json::Value {
        serde_json::to_value(infer(name, &doc(v))).unwrap()
    }

    #[test]
    fn scalars_and_containers() {
        let schema = infer_json("values", json!({
            "debug": true,
            "name": "svc",
            "count": 3,
            "tags": ["a", "b"],
            "nested": {"x": 1}
        }));
        assert_eq!(schema, json!({
            "type": "object",
            "title": "values",
            "properties": {
                "debug": {"type": "boolean"},
                "name": {"type": "string"},
                "count": {"type": "number"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "nested": {"type": "object", "properties": {"x": {"type": "number"}}}
            }
        }));
    }

    #[test]
    fn blank_fields_leave_no_properties() {
        let schema = infer_json("values", json!({"empty": null, "blank": ""}));
        assert_eq!(schema, json!({"type": "object", "title": "values"}));
    }

    #[test]
    fn empty_document() {
        assert_eq!(infer_json("config", json!({})), json!({"type": "object", "title": "config"}));
    }

    #[test]
    fn empty_list_is_unconstrained() {
        let schema = infer_json("values", json!({"list": []}));
        assert_eq!(schema["properties"]["list"], json!({"type": "array", "items": {}}));
    }

    #[test]
    fn first_element_wins() {
        let schema = infer_json("values", json!({"mixed": [1, "two", true]}));
        assert_eq!(schema["properties"]["mixed"], json!({"type": "array", "items": {"type": "number"}}));
    }

    #[test_case(json!(null), None ; "null")]
    #[test_case(json!(""), None ; "empty string")]
    #[test_case(json!(" "), Some(json!({"type": "string"})) ; "whitespace string")]
    #[test_case(json!(false), Some(json!({"type": "boolean"})) ; "boolean false")]
    #[test_case(json!(0), Some(json!({"type": "number"})) ; "zero")]
    #[test_case(json!(-2.5), Some(json!({"type": "number"})) ; "float")]
    #[test_case(json!([]), Some(json!({"type": "array", "items": {}})) ; "empty sequence")]
    #[test_case(json!([[]]), Some(json!({"type": "array", "items": {"type": "array", "items": {}}})) ; "nested empty sequence")]
    #[test_case(json!({}), Some(json!({"type": "object"})) ; "empty mapping")]
    #[test_case(json!({"a": null, "b": ""}), Some(json!({"type": "object"})) ; "all blank mapping")]
    fn classify_table(input: serde_json::Value, expected: Option<serde_json::Value>) {
        let got = classify(&Value::from(input)).map(|s| serde_json::to_value(s).unwrap());
        assert_eq!(got, expected);
    }

    #[test]
    fn nested_objects_carry_no_title() {
        let schema = infer("root", &doc(json!({"a": {"b": {"c": "x"}}})));
        let a = &schema.properties().unwrap()["a"];
        assert_eq!(a.title(), None);
        assert_eq!(a.properties().unwrap()["b"].title(), None);
    }

    #[test]
    fn blank_keys_dropped_at_every_depth() {
        let schema = infer_json("v", json!({
            "outer": {"keep": 1, "drop": null, "inner": {"gone": ""}}
        }));
        assert_eq!(schema["properties"]["outer"], json!({
            "type": "object",
            "properties": {
                "keep": {"type": "number"},
                "inner": {"type": "object"}
            }
        }));
    }

    #[test]
    fn properties_follow_source_order() {
        let schema = infer("v", &doc(json!({"zeta": 1, "alpha": true, "mid": "m"})));
        let keys: Vec<&str> = schema.properties().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn deterministic() {
        let d = doc(json!({"b": [{"y": 1, "x": "s"}], "a": {"k": false}}));
        let a = serde_json::to_string(&infer("v", &d)).unwrap();
        let b = serde_json::to_string(&infer("v", &d)).unwrap();
        assert_eq!(a, b);
    }
}
