//! JSON report.

use std::io::Write;

use crate::{MigrationReport, ReportError, Reporter};

/// Writes the whole report as a single JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonReporter {
    /// Creates a compact JSON reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Reporter for JsonReporter {
    fn write_report<W: Write + Send>(
        &self,
        report: &MigrationReport,
        mut writer: W,
    ) -> Result<(), ReportError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, report)?;
        } else {
            serde_json::to_writer(&mut writer, report)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
