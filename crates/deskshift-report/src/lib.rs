//! Report writers for the deskshift helpdesk migration estimator.
//!
//! A [`MigrationReport`] bundles a timeline estimate with the context needed
//! to present it. Reports can be written in several formats:
//!
//! - [`TextReporter`] - Short plain-text summary
//! - [`MarkdownReporter`] - Full printable report
//! - [`JsonReporter`] - Machine-readable JSON document
//! - [`CsvReporter`] - One row per selected entity

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod format;
mod json;
mod markdown;
mod report;
mod text;

pub use crate::csv::CsvReporter;
pub use format::{ReportError, ReportFormat, Reporter};
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use report::{EntityRow, ManualNote, MigrationReport};
pub use text::TextReporter;
