//! CLI: load → infer → emit, one schema per input.
use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::emit::{Destination, Indent, Sink};
use crate::ir::Schema;
use crate::loader::{Input, STDIN_ARG};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// schemagen takes JSON/YAML and outputs a skeleton schema
#[derive(Parser, Debug)]
#[command(name = "schemagen", version, about)]
pub struct CommandLineInterface {
    /// One or more inputs. May be literal paths, quoted glob patterns or '-' for stdin
    #[arg(required = true, num_args = 1..)]
    input: Vec<String>,

    /// Output file. Providing a directory will output one schema per input
    /// into the directory. Leave empty to print to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The number of spaces to indent at each level. Default (-1) will print on a single line
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    indent: i64,

    /// order `properties` by key instead of document order
    #[arg(long)]
    sort_keys: bool,

    /// skip inputs that fail instead of stopping at the first one
    #[arg(long)]
    keep_going: bool,

    /// load and infer up to N inputs in parallel (output order is unchanged)
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Everything the pipeline needs besides inputs and destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub indent: Indent,
    pub sort_keys: bool,
    pub keep_going: bool,
    pub jobs: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct Report {
    pub written: usize,
    /// Inputs skipped under `keep_going`, with their errors.
    pub failed: Vec<(String, anyhow::Error)>,
}

/// A schema rendered and ready to be written.
struct Rendered {
    name: String,
    bytes: Vec<u8>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn settings(&self) -> Settings {
        Settings {
            indent: Indent::from_level(self.indent),
            sort_keys: self.sort_keys,
            keep_going: self.keep_going,
            jobs: self.jobs,
        }
    }

    pub fn run(&self) -> Result<()> {
        let inputs = resolve_file_path_patterns(&self.input)?;
        let dest = Destination::resolve(self.output.as_deref());
        debug!(inputs = inputs.len(), ?dest, "starting");
        let report = run_pipeline(&inputs, &dest, &self.settings())?;
        if !report.failed.is_empty() {
            bail!("{} of {} inputs failed", report.failed.len(), inputs.len());
        }
        Ok(())
    }
}

/// Load and infer one input, honoring `sort_keys`.
pub fn generate(input: &Input, sort_keys: bool) -> Result<(String, Schema)> {
    let doc = crate::loader::load(input)?;
    let schema = crate::inference::infer(&doc.name, &doc.root);
    debug!(name = %doc.name, properties = schema.properties().map_or(0, |p| p.len()), "inferred schema");
    let schema = if sort_keys { schema.sorted() } else { schema };
    Ok((doc.name, schema))
}

fn prepare(input: &Input, settings: &Settings) -> Result<Rendered> {
    let (name, schema) = generate(input, settings.sort_keys)?;
    let bytes = crate::emit::render(&schema, settings.indent)
        .with_context(|| format!("failed to render schema for {}", input.display()))?;
    Ok(Rendered { name, bytes })
}

/// Run every input through load → infer → render, then write in input order.
///
/// With `jobs > 1` the first three stages run on a rayon pool; writing stays
/// sequential. Without `keep_going` the first failure (in input order) ends
/// the run and nothing after it is written; with it, failing inputs (load,
/// render or write) land in [`Report::failed`] and the rest are still written.
pub fn run_pipeline(inputs: &[Input], dest: &Destination, settings: &Settings) -> Result<Report> {
    let prepared: Box<dyn Iterator<Item = Result<Rendered>> + '_> = if settings.jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.jobs)
            .build()
            .context("failed to start worker pool")?;
        let all: Vec<Result<Rendered>> =
            pool.install(|| inputs.par_iter().map(|input| prepare(input, settings)).collect());
        Box::new(all.into_iter())
    } else {
        Box::new(inputs.iter().map(|input| prepare(input, settings)))
    };

    let mut sink = Sink::open(dest)?;
    let mut report = Report::default();
    let mut seen = HashSet::new();
    for (input, rendered) in inputs.iter().zip(prepared) {
        let outcome = rendered.and_then(|rendered| {
            if matches!(dest, Destination::Directory(_)) && !seen.insert(rendered.name.clone()) {
                warn!(name = %rendered.name, source = %input.display(), "schema name repeats; earlier output is overwritten");
            }
            sink.write(&rendered.name, &rendered.bytes)?;
            Ok(())
        });
        match outcome {
            Ok(()) => report.written += 1,
            // load, render and write failures all skip just this input
            Err(error) if settings.keep_going => {
                warn!(source = %input.display(), "skipping input: {error:#}");
                report.failed.push((input.display(), error));
            }
            Err(error) => return Err(error),
        }
    }
    sink.finish()?;
    Ok(report)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<Input>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<Input>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == STDIN_ARG {
            out.push(Input::Stdin);
        } else if has_glob_chars(pattern) {
            let mut matched_any = false;
            let entries = glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
            for entry in entries {
                let path = entry.map_err(|e| anyhow!("failed to expand {pattern}: {e}"))?;
                matched_any = true;
                out.push(Input::Path(path));
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(Input::Path(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}
