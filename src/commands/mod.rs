//! CLI command implementations.
//!
//! Each handler wires the same pipeline: load and validate the export,
//! run the pure analysis with an injected reference date, write the report.

pub mod analyze;
pub mod init;
pub mod relations;

pub use analyze::{handle_analyze, AnalyzeOptions};
pub use init::init_config;
pub use relations::{handle_relations, RelationsOptions};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Opens the report destination: a file when `--output` was given, stdout
/// otherwise.
pub(crate) fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
