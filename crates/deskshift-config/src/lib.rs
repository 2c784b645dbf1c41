//! Configuration file layer for the deskshift helpdesk migration estimator.
//!
//! [`DeskshiftConfig`] maps the optional `config.toml` file onto four
//! sections: request defaults, a replacement catalog path, estimator tuning,
//! and the default report format.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;

pub use config::{
    CatalogConfig, DEFAULT_BANDWIDTH_MB_PER_MIN, DEFAULT_REPORT_FORMAT, DefaultsConfig,
    DeskshiftConfig, EstimatorConfig, ReportConfig,
};
pub use error::{ConfigError, Result};
