//! Reporters: output formats for validation runs and unreferenced-asset reports.

pub mod console;
pub mod json;
pub mod unused;

use keeper_core::errors::ReportError;

use crate::rules::ValidationRun;

pub use unused::UnusedReport;

/// Renders a validation run.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "console" => Ok(Box::new(console::ConsoleReporter::default())),
        "json" => Ok(Box::new(json::JsonReporter)),
        other => Err(ReportError::UnknownFormat(other.to_string())),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

/// Write `content` to `path`, creating parent directories.
pub fn write_report(path: &std::path::Path, content: &str) -> Result<(), ReportError> {
    let fail = |e: std::io::Error| ReportError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(fail)?;
    }
    std::fs::write(path, content).map_err(fail)
}
