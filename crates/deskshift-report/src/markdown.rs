//! Printable Markdown report.

use std::io::Write;

use deskshift_estimate::Estimator;

use crate::{MigrationReport, ReportError, Reporter};

/// Cutover delta sync estimate shown in the operational impact section.
const DELTA_SYNC: &str = "~30m";

/// Writes the full migration report as Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Creates a Markdown reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

impl Reporter for MarkdownReporter {
    fn write_report<W: Write + Send>(
        &self,
        report: &MigrationReport,
        mut writer: W,
    ) -> Result<(), ReportError> {
        let result = &report.result;
        let fmt = Estimator::format_hours;

        writeln!(writer, "# Migration Architecture Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Route:** {}  ", report.route())?;
        writeln!(writer, "**Complexity:** {} risk  ", result.risk_level)?;
        writeln!(
            writer,
            "**Generated:** {}",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(writer)?;

        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Scenario | Duration |")?;
        writeln!(writer, "|---|---|")?;
        writeln!(writer, "| Best case | {} |", fmt(result.min_duration_hours))?;
        writeln!(writer, "| Likely | {} |", fmt(result.total_duration_hours))?;
        writeln!(writer, "| Worst case | {} |", fmt(result.max_duration_hours))?;
        writeln!(writer)?;
        writeln!(writer, "Bottleneck: {}", result.bottleneck)?;
        writeln!(writer)?;

        let total = result.total_duration_hours;
        writeln!(writer, "## Phases")?;
        writeln!(writer)?;
        writeln!(writer, "| Phase | Duration | Share |")?;
        writeln!(writer, "|---|---|---|")?;
        for (name, hours) in [
            ("Foundation", result.breakdown.foundation),
            ("Core data", result.breakdown.core_data),
            ("Attachments", result.breakdown.attachments),
        ] {
            writeln!(
                writer,
                "| {name} | {} | {:.0}% |",
                fmt(hours),
                percent(hours, total)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Detailed Timeline")?;
        writeln!(writer)?;
        writeln!(writer, "| Entity | Records | Path | Duration |")?;
        writeln!(writer, "|---|---:|---|---|")?;
        for row in report.entity_rows() {
            let (path, duration) = if row.automated {
                ("API", fmt(row.hours))
            } else {
                ("Manual", "-".to_string())
            };
            writeln!(
                writer,
                "| {} | {} | {path} | {duration} |",
                row.label, row.volume
            )?;
        }
        if result.breakdown.attachments > 0.0 {
            writeln!(
                writer,
                "| Attachments (Files) | {:.0} MB | API | {} |",
                report.attachment_mb,
                fmt(result.breakdown.attachments)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Operational Impact")?;
        writeln!(writer)?;
        writeln!(writer, "- Initial data sync: {}", fmt(total))?;
        writeln!(writer, "- Delta sync (cutover): {DELTA_SYNC}")?;
        writeln!(writer, "- Required downtime: 0m")?;
        writeln!(writer)?;

        writeln!(writer, "## Automated ({})", result.api_tasks.len())?;
        writeln!(writer)?;
        if result.api_tasks.is_empty() {
            writeln!(writer, "No entities move through the APIs.")?;
        }
        for task in &result.api_tasks {
            writeln!(writer, "- {task}")?;
        }
        writeln!(writer)?;

        writeln!(
            writer,
            "## Manual Attention Required ({})",
            result.manual_tasks.len()
        )?;
        writeln!(writer)?;
        if report.manual_notes.is_empty() && result.manual_tasks.is_empty() {
            writeln!(writer, "All selected entities are API compatible.")?;
        } else if report.manual_notes.is_empty() {
            for task in &result.manual_tasks {
                writeln!(writer, "- {task}")?;
            }
        }
        for note in &report.manual_notes {
            writeln!(writer, "- **{}**: {}", note.label, note.reason)?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Risk Notes")?;
        writeln!(writer)?;
        for note in report.risk_notes() {
            writeln!(writer, "- {note}")?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    fn render() -> String {
        let mut output = Vec::new();
        MarkdownReporter::new()
            .write_report(&sample_report(), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sections_present() {
        let text = render();
        for heading in [
            "# Migration Architecture Report",
            "## Summary",
            "## Phases",
            "## Detailed Timeline",
            "## Operational Impact",
            "## Automated (2)",
            "## Manual Attention Required (1)",
            "## Risk Notes",
        ] {
            assert!(text.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_report_details() {
        let text = render();
        assert!(text.contains("**Complexity:** Low risk"));
        assert!(text.contains("**Generated:** 2024-01-15 12:30 UTC"));
        assert!(text.contains("| Macros / Canned Responses | 50 | Manual | - |"));
        assert!(text.contains("| Attachments (Files) | 10000 MB | API |"));
        assert!(text.contains("- **Macros / Canned Responses**: Destination (Freshdesk) missing Import API"));
    }

    #[test]
    fn test_percent_of_empty_total() {
        assert!(percent(1.0, 0.0).abs() < f64::EPSILON);
        assert!((percent(1.0, 4.0) - 25.0).abs() < f64::EPSILON);
    }
}
