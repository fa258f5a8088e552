use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning input bytes into a root [`Mapping`](crate::value::Mapping).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {name}: {message}")]
    Json { name: String, message: String },

    #[error("failed to parse YAML {name}")]
    Yaml {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("top level of {name} must be a mapping, found {found}")]
    NotAMapping { name: String, found: &'static str },

    #[error("unsupported mapping key in {name}")]
    UnsupportedKey {
        name: String,
        #[source]
        source: KeyError,
    },
}

/// A YAML mapping key that has no string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported {kind} used as a mapping key")]
pub struct KeyError {
    pub kind: &'static str,
}

/// Failure while serializing or writing a schema.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to serialize schema")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
