//! Schema emission: JSON rendering and output destinations.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};
use tracing::info;

use crate::error::EmitError;
use crate::ir::Schema;

pub const SCHEMA_EXTENSION: &str = "schema.json";
const STDOUT_NAME: &str = "<stdout>";

// ————————————————————————————————————————————————————————————————————————————
// RENDERING
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// Single line.
    #[default]
    Compact,
    /// One line per member, `n` spaces per level (`0` still breaks lines).
    Spaces(usize),
}

impl Indent {
    /// Negative levels mean compact output.
    pub fn from_level(level: i64) -> Self {
        usize::try_from(level).map_or(Indent::Compact, Indent::Spaces)
    }
}

/// Serialized schema followed by a newline.
pub fn render(schema: &Schema, indent: Indent) -> Result<Vec<u8>, EmitError> {
    let mut out = Vec::new();
    match indent {
        Indent::Compact => {
            let mut ser = Serializer::with_formatter(&mut out, CompactFormatter);
            schema.serialize(&mut ser)?;
        }
        Indent::Spaces(n) => {
            let pad = vec![b' '; n];
            let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
            schema.serialize(&mut ser)?;
        }
    }
    out.push(b'\n');
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// DESTINATIONS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Every schema, in input order, into one file.
    File(PathBuf),
    /// One `<name>.schema.json` per input.
    Directory(PathBuf),
}

impl Destination {
    pub fn resolve(output: Option<&Path>) -> Self {
        let Some(path) = output.filter(|p| !p.as_os_str().is_empty()) else {
            return Destination::Stdout;
        };
        let trailing_sep = path.to_string_lossy().ends_with(std::path::is_separator);
        if path.is_dir() || trailing_sep {
            Destination::Directory(path.to_path_buf())
        } else {
            Destination::File(path.to_path_buf())
        }
    }
}

pub fn schema_file_name(name: &str) -> String {
    format!("{name}.{SCHEMA_EXTENSION}")
}

/// An opened [`Destination`].
pub struct Sink {
    target: Target,
}

enum Target {
    Stream { path: PathBuf, writer: Box<dyn Write> },
    Directory(PathBuf),
}

impl Sink {
    /// Creates the output file (truncating) or the output directory.
    pub fn open(dest: &Destination) -> Result<Self, EmitError> {
        let target = match dest {
            Destination::Stdout => Target::Stream {
                path: PathBuf::from(STDOUT_NAME),
                writer: Box::new(BufWriter::new(std::io::stdout().lock())),
            },
            Destination::File(path) => {
                let file = File::create(path)
                    .map_err(|source| EmitError::Create { path: path.clone(), source })?;
                Target::Stream { path: path.clone(), writer: Box::new(BufWriter::new(file)) }
            }
            Destination::Directory(dir) => {
                std::fs::create_dir_all(dir)
                    .map_err(|source| EmitError::Create { path: dir.clone(), source })?;
                Target::Directory(dir.clone())
            }
        };
        Ok(Self { target })
    }

    pub fn write(&mut self, name: &str, rendered: &[u8]) -> Result<(), EmitError> {
        match &mut self.target {
            Target::Stream { path, writer } => {
                writer
                    .write_all(rendered)
                    .map_err(|source| EmitError::Write { path: path.clone(), source })?;
                info!(%name, dest = %path.display(), "wrote schema");
            }
            Target::Directory(dir) => {
                let path = dir.join(schema_file_name(name));
                std::fs::write(&path, rendered)
                    .map_err(|source| EmitError::Write { path: path.clone(), source })?;
                info!(%name, dest = %path.display(), "wrote schema");
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), EmitError> {
        if let Target::Stream { path, writer } = &mut self.target {
            writer
                .flush()
                .map_err(|source| EmitError::Write { path: path.clone(), source })?;
        }
        Ok(())
    }
}
