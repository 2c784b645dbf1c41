//! Plain-text summary.

use std::io::Write;

use deskshift_estimate::Estimator;

use crate::{MigrationReport, ReportError, Reporter};

/// Writes a short plain-text summary suited to a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter {
    /// Whether to list the individual tasks.
    list_tasks: bool,
}

impl TextReporter {
    /// Creates a text reporter that lists tasks.
    #[must_use]
    pub const fn new() -> Self {
        Self { list_tasks: true }
    }

    /// Sets whether to list the individual tasks.
    #[must_use]
    pub const fn with_tasks(mut self, list_tasks: bool) -> Self {
        self.list_tasks = list_tasks;
        self
    }
}

impl Reporter for TextReporter {
    fn write_report<W: Write + Send>(
        &self,
        report: &MigrationReport,
        mut writer: W,
    ) -> Result<(), ReportError> {
        writeln!(writer, "{}", report.route())?;
        writeln!(writer, "{}", Estimator::format_estimate(&report.result))?;

        if self.list_tasks {
            for task in &report.result.api_tasks {
                writeln!(writer, "  [api]    {task}")?;
            }
            for note in &report.manual_notes {
                writeln!(writer, "  [manual] {} ({})", note.label, note.reason)?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
