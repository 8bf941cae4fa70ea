//! Console reporter: human-readable output with color codes.

use keeper_core::errors::ReportError;

use super::Reporter;
use crate::rules::{Severity, ValidationRun, ValidationStatus};

pub struct ConsoleReporter {
    pub use_color: bool,
    /// Also list objects that passed.
    pub show_valid: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            show_valid: false,
        }
    }

    fn status_symbol(&self, status: ValidationStatus) -> &'static str {
        match status {
            ValidationStatus::Valid => "✓",
            ValidationStatus::Invalid => "✗",
            ValidationStatus::NotValidated => "⊘",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[31m",   // red
            Severity::Warning => "\x1b[33m", // yellow
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, run: &ValidationRun) -> Result<String, ReportError> {
        let mut output = String::new();

        for report in &run.reports {
            if report.messages.is_empty() && !self.show_valid {
                continue;
            }
            let rule = report.rule_id.as_deref().unwrap_or("no rule");
            output.push_str(&format!(
                "{} {} [{}] ({})\n",
                self.status_symbol(report.status),
                report.path,
                report.type_name,
                rule
            ));
            for message in &report.messages {
                output.push_str(&format!(
                    "  {}{}{}: {}\n",
                    self.color_start(message.severity),
                    message.severity,
                    self.color_end(),
                    message.message
                ));
            }
        }

        let summary = &run.summary;
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} checked: {} valid, {} invalid, {} not validated ({} errors, {} warnings)\n",
            summary.total,
            summary.valid,
            summary.invalid,
            summary.not_validated,
            summary.errors,
            summary.warnings
        ));
        Ok(output)
    }
}
