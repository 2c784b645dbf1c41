//! CSV report.

use std::io::Write;

use crate::{MigrationReport, ReportError, Reporter};

/// Writes one row per selected entity.
#[derive(Debug, Clone)]
pub struct CsvReporter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReporter {
    /// Creates a new CSV reporter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) reporter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a field if it contains the delimiter, a quote, or a newline.
    fn field(&self, value: &str) -> String {
        if value.contains(self.delimiter) || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Reporter for CsvReporter {
    fn write_report<W: Write + Send>(
        &self,
        report: &MigrationReport,
        mut writer: W,
    ) -> Result<(), ReportError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "entity{d}label{d}path{d}volume{d}likely_hours")?;
        }

        for row in report.entity_rows() {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{:.4}",
                row.entity,
                self.field(&row.label),
                if row.automated { "api" } else { "manual" },
                row.volume,
                row.hours
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
