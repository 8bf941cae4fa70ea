//! Subcommand implementations.

pub mod conventions;
pub mod unused;
pub mod validate;

use std::path::Path;
use std::process::ExitCode;

use keeper_analysis::reporters::write_report;
use keeper_core::errors::ReportError;

/// How a successful command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// Validation found invalid objects.
    Findings,
    /// The computation was cancelled; the output is partial.
    Partial,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Findings => ExitCode::from(1),
            Outcome::Partial => ExitCode::from(3),
        }
    }
}

/// Write to `path` when given, stdout otherwise.
pub(crate) fn emit(output: Option<&Path>, content: &str) -> Result<(), ReportError> {
    match output {
        Some(path) => write_report(path, content),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}

/// Resolve `path` against the project root unless it is absolute.
pub(crate) fn resolve(root: &Path, path: &Path) -> std::path::PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
