//! Infer a skeleton JSON Schema from YAML or JSON documents.
//!
//! ```text
//! loader (bytes → Mapping) → inference (Mapping → Schema) → emit (Schema → JSON)
//! ```
pub mod canonical;
pub mod cli;
pub mod emit;
pub mod error;
pub mod inference;
pub mod ir;
pub mod loader;
pub mod path_de;
pub mod value;

pub use error::{EmitError, LoadError};
pub use inference::{classify, classify_properties, infer};
pub use ir::{Properties, Schema};
pub use value::{Mapping, Value};
