//! Report format abstraction.

use std::io::Write;

use thiserror::Error;

use crate::{CsvReporter, JsonReporter, MarkdownReporter, MigrationReport, TextReporter};

/// Report format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Plain-text summary.
    #[default]
    Text,
    /// Markdown report.
    Markdown,
    /// Pretty-printed JSON document.
    Json,
    /// CSV with one row per selected entity.
    Csv,
}

impl ReportFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Markdown, Self::Json, Self::Csv]
    }

    /// Writes a report with the default reporter for this format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W: Write + Send>(
        &self,
        report: &MigrationReport,
        writer: W,
    ) -> Result<(), ReportError> {
        match self {
            Self::Text => TextReporter::new().write_report(report, writer),
            Self::Markdown => MarkdownReporter::new().write_report(report, writer),
            Self::Json => JsonReporter::new()
                .with_pretty(true)
                .write_report(report, writer),
            Self::Csv => CsvReporter::new().write_report(report, writer),
        }
    }

    /// Renders a report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self, report: &MigrationReport) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.write(report, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Unknown report format.
    #[error("Unknown format: {0} (expected text, markdown, json, or csv)")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report writers.
pub trait Reporter: Send + Sync {
    /// Writes a report to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_report<W: Write + Send>(
        &self,
        report: &MigrationReport,
        writer: W,
    ) -> Result<(), ReportError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("TXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("Json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!(matches!(
            "parquet".parse::<ReportFormat>(),
            Err(ReportError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for format in ReportFormat::all() {
            assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Text.extension(), "txt");
    }
}
