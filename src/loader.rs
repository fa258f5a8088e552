//! Document loading: bytes from a file or stdin → root [`Mapping`].
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LoadError;
use crate::value::{Mapping, Value};

pub const STDIN_ARG: &str = "-";
pub const STDIN_NAME: &str = "stdin";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// Also accepts JSON text.
    Yaml,
}

/// A decoded input, ready for inference.
#[derive(Debug, Clone)]
pub struct Document {
    /// Schema title; also the output file stem in directory mode.
    pub name: String,
    pub root: Mapping,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Input {
    pub fn parse(raw: &str) -> Self {
        if raw == STDIN_ARG { Input::Stdin } else { Input::Path(PathBuf::from(raw)) }
    }

    pub fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_owned(),
            Input::Path(p) => schema_name(p),
        }
    }

    pub fn format(&self) -> Format {
        match self {
            Input::Stdin => Format::Yaml,
            Input::Path(p) => Format::for_path(p),
        }
    }

    /// Human-readable source for diagnostics.
    pub fn display(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_owned(),
            Input::Path(p) => p.display().to_string(),
        }
    }

    fn read(&self) -> Result<Vec<u8>, LoadError> {
        let read_err = |source| LoadError::Read { name: self.display(), source };
        match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf).map_err(read_err)?;
                Ok(buf)
            }
            Input::Path(p) => std::fs::read(p).map_err(read_err),
        }
    }
}

impl Format {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// File name up to its first `.`: `values.prod.yaml` → `values`.
pub fn schema_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.split_once('.') {
        Some((stem, _)) => stem.to_owned(),
        None => base,
    }
}

/// Decode `bytes` into a root mapping. `source` names the input in errors.
///
/// Blank input and an explicit `null` root both decode to an empty mapping.
pub fn decode(bytes: &[u8], format: Format, source: &str) -> Result<Mapping, LoadError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Mapping::new());
    }
    let value = match format {
        Format::Json => {
            let json: serde_json::Value = crate::path_de::from_slice_with_path(bytes)
                .map_err(|message| LoadError::Json { name: source.to_owned(), message })?;
            Value::from(json)
        }
        Format::Yaml => {
            let yaml_err = |e| LoadError::Yaml { name: source.to_owned(), source: e };
            let mut yaml: serde_yaml::Value = serde_yaml::from_slice(bytes).map_err(yaml_err)?;
            // resolve `<<: *anchor` before conversion
            yaml.apply_merge().map_err(yaml_err)?;
            Value::try_from(yaml)
                .map_err(|e| LoadError::UnsupportedKey { name: source.to_owned(), source: e })?
        }
    };
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        other => Err(LoadError::NotAMapping { name: source.to_owned(), found: other.kind() }),
    }
}

pub fn load(input: &Input) -> Result<Document, LoadError> {
    let bytes = input.read()?;
    let root = decode(&bytes, input.format(), &input.display())?;
    let name = input.name();
    debug!(source = %input.display(), %name, keys = root.len(), "loaded document");
    Ok(Document { name, root })
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
