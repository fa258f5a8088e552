//! Format-agnostic document tree fed to inference.
//!
//! Both YAML and JSON decode into this one closed type, so inference only has
//! to match six cases. Every number collapses to `f64`.
use indexmap::IndexMap;

use crate::error::KeyError;

/// Decoded object. Keeps source key order.
pub type Mapping = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

// ------------------------------- JSON ------------------------------------ //

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // always Some without `arbitrary_precision`
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(xs) => Value::Sequence(xs.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(m) => {
                Value::Mapping(m.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

// ------------------------------- YAML ------------------------------------ //

impl TryFrom<serde_yaml::Value> for Value {
    type Error = KeyError;

    fn try_from(v: serde_yaml::Value) -> Result<Self, Self::Error> {
        Ok(match v {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Boolean(b),
            serde_yaml::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(xs) => Value::Sequence(
                xs.into_iter().map(Value::try_from).collect::<Result<_, _>>()?,
            ),
            serde_yaml::Value::Mapping(m) => {
                let mut out = Mapping::with_capacity(m.len());
                for (k, v) in m {
                    out.insert(yaml_key(k)?, Value::try_from(v)?);
                }
                Value::Mapping(out)
            }
            // `!tag value` keeps only the value
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

/// Scalar keys are stringified the way YAML-to-JSON converters do it.
fn yaml_key(k: serde_yaml::Value) -> Result<String, KeyError> {
    match k {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Null => Ok("null".to_owned()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) => Err(KeyError { kind: "sequence" }),
        serde_yaml::Value::Mapping(_) => Err(KeyError { kind: "mapping" }),
    }
}
