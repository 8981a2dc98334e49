//! Batch driver
//!
//! Converts every matching file of a directory on its own. A document that
//! fails is reported and skipped; it never stops the others and never leaves
//! an output file behind.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Extension of the files to convert, without the dot.
    pub input_extension: String,
    /// Extension given to the Turtle files.
    pub output_extension: String,
    /// Where to write the Turtle files. Next to their input when `None`.
    pub output_dir: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_extension: "xml".to_string(),
            output_extension: "ttl".to_string(),
            output_dir: None,
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Converted { output: PathBuf, statements: usize },
    Failed(Error),
}

#[derive(Debug)]
pub struct Report {
    pub input: PathBuf,
    pub outcome: Outcome,
}

impl Report {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Converted { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .input
            .file_name()
            .map_or_else(|| self.input.display().to_string(), |n| n.to_string_lossy().into_owned());
        match &self.outcome {
            Outcome::Converted { output, statements } => write!(
                f,
                "{name} converted ({statements} statements) -> {}",
                output.display()
            ),
            Outcome::Failed(e) => write!(f, "Error with {name}: {e}"),
        }
    }
}

/// Converts the files of `dir` in file name order.
///
/// Only failing to list the directory (or to create the output directory) is
/// an error; per-document failures are part of the returned reports.
pub fn convert_dir(dir: &Path, options: &BatchOptions) -> Result<Vec<Report>, Error> {
    if let Some(out) = &options.output_dir {
        fs::create_dir_all(out).map_err(Error::io(out))?;
    }

    let inputs = collect_inputs(dir, &options.input_extension)?;
    info!("converting {} documents from {}", inputs.len(), dir.display());

    Ok(inputs
        .into_iter()
        .map(|input| convert_one(input, options))
        .collect())
}

fn collect_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    let mut inputs = vec![];
    for entry in fs::read_dir(dir).map_err(Error::io(dir))? {
        let path = entry.map_err(Error::io(dir))?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn convert_one(input: PathBuf, options: &BatchOptions) -> Report {
    let output = output_path(&input, options);
    let outcome = match crate::process_file_to_turtle(&input, &output) {
        Ok(statements) => {
            info!("{} converted", input.display());
            Outcome::Converted { output, statements }
        }
        Err(e) => {
            warn!("Error with {}: {e}", input.display());
            Outcome::Failed(e)
        }
    };
    Report { input, outcome }
}

fn output_path(input: &Path, options: &BatchOptions) -> PathBuf {
    let path = input.with_extension(&options.output_extension);
    match (&options.output_dir, path.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => path,
    }
}
