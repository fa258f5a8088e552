// Strongly-typed schema IR. Serializes to the draft JSON Schema shape; no serde_json::Value here.
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name → schema, in emission order.
pub type Properties = IndexMap<String, Schema>;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Any,                     // `{}`: unconstrained (items of an empty sequence)
    Boolean,
    Number,
    String,
    Array {
        items: Box<Schema>,
    },
    Object {
        title: Option<String>,
        properties: Properties, // omitted from output when empty
    },
}

pub const KEY_TYPE: &str = "type";
pub const KEY_TITLE: &str = "title";
pub const KEY_PROPERTIES: &str = "properties";
pub const KEY_ITEMS: &str = "items";

impl Schema {
    pub fn array(items: Schema) -> Self {
        Schema::Array { items: Box::new(items) }
    }

    pub fn object(properties: Properties) -> Self {
        Schema::Object { title: None, properties }
    }

    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Schema::Any => None,
            Schema::Boolean => Some("boolean"),
            Schema::Number => Some("number"),
            Schema::String => Some("string"),
            Schema::Array { .. } => Some("array"),
            Schema::Object { .. } => Some("object"),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Schema::Object { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// `None` for non-objects and for objects without any properties.
    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Schema::Object { properties, .. } if !properties.is_empty() => Some(properties),
            _ => None,
        }
    }

    /// Copy with every `properties` map ordered by key, at every depth.
    pub fn sorted(&self) -> Schema {
        match self {
            Schema::Array { items } => Schema::array(items.sorted()),
            Schema::Object { title, properties } => {
                let mut properties: Properties = properties
                    .iter()
                    .map(|(k, v)| (k.clone(), v.sorted()))
                    .collect();
                properties.sort_keys();
                Schema::Object { title: title.clone(), properties }
            }
            other => other.clone(),
        }
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(ty) = self.type_name() {
            map.serialize_entry(KEY_TYPE, ty)?;
        }
        match self {
            Schema::Array { items } => map.serialize_entry(KEY_ITEMS, items)?,
            Schema::Object { title, properties } => {
                if let Some(title) = title {
                    map.serialize_entry(KEY_TITLE, title)?;
                }
                if !properties.is_empty() {
                    map.serialize_entry(KEY_PROPERTIES, properties)?;
                }
            }
            _ => {}
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn props(entries: Vec<(&str, Schema)>) -> Properties {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn serialized_key_order_is_type_title_properties() {
        let s = Schema::Object {
            title: Some("values".into()),
            properties: props(vec![("b", Schema::Boolean), ("a", Schema::array(Schema::Any))]),
        };
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"type":"object","title":"values","properties":{"b":{"type":"boolean"},"a":{"type":"array","items":{}}}}"#
        );
    }

    #[test]
    fn empty_object_has_no_properties_key() {
        let s = Schema::object(Properties::new());
        assert_eq!(serde_json::to_value(&s).unwrap(), json!({"type": "object"}));
        assert!(s.properties().is_none());
    }

    #[test]
    fn sorted_orders_nested_properties() {
        let inner = Schema::object(props(vec![("y", Schema::Number), ("x", Schema::Number)]));
        let s = Schema::Object {
            title: Some("t".into()),
            properties: props(vec![("z", Schema::array(inner)), ("a", Schema::Boolean)]),
        };
        let sorted = s.sorted();
        assert_eq!(
            serde_json::to_string(&sorted).unwrap(),
            r#"{"type":"object","title":"t","properties":{"a":{"type":"boolean"},"z":{"type":"array","items":{"type":"object","properties":{"x":{"type":"number"},"y":{"type":"number"}}}}}}"#
        );
        // sorting never changes structure
        assert_eq!(serde_json::to_value(&sorted).unwrap(), serde_json::to_value(&s).unwrap());
    }
}
