//! Helpdesk migration timeline and risk estimation library.
//!
//! This is a facade crate that re-exports functionality from the deskshift
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use deskshift_lib::prelude::*;
//!
//! let inputs = CalculatorInputs::new("zendesk", "suite_pro", "freshdesk", "pro")
//!     .with_entity(DataEntity::Users, 5_000)
//!     .with_entity(DataEntity::Tickets, 10_000)
//!     .with_attachments(0.5, 2.0);
//!
//! let result = estimate(&inputs, PlatformCatalog::global());
//! assert_eq!(result.bottleneck, "Freshdesk (Pro) Limits");
//! assert_eq!(result.risk_level, RiskLevel::Low);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use deskshift_types::*;

// Re-export the catalog
pub use deskshift_catalog::{
    CatalogError, DEFAULT_DESTINATION, DEFAULT_SOURCE, MigrationForm, PlatformCatalog,
};

// Re-export the estimator
pub use deskshift_estimate::{
    BottleneckSide, CONSERVATIVE_EFFICIENCY, DEFAULT_ATTACHMENT_BANDWIDTH_MB_PER_MIN, Estimator,
    HIGH_RISK_ATTACHMENT_MB, HIGH_RISK_TICKETS, MEDIUM_RISK_MANUAL_TASKS, MEDIUM_RISK_TICKETS,
    OPTIMISTIC_EFFICIENCY, Scenario, TaskPlan, ThroughputBound, assess_risk, estimate,
};

// Re-export reporters
#[cfg(feature = "report")]
pub use deskshift_report::{
    CsvReporter, EntityRow, JsonReporter, ManualNote, MarkdownReporter, MigrationReport,
    ReportError, ReportFormat, Reporter, TextReporter,
};

// Re-export configuration
#[cfg(feature = "config")]
pub use deskshift_config::{
    CatalogConfig, ConfigError, DefaultsConfig, DeskshiftConfig, EstimatorConfig, ReportConfig,
};

/// Prelude module for convenient imports.
///
/// ```
/// use deskshift_lib::prelude::*;
/// ```
pub mod prelude {
    pub use deskshift_types::{
        CalculatorInputs, DataEntity, DeskshiftError, PlatformCapability, Result, RiskLevel,
        TimelineResult,
    };

    pub use deskshift_catalog::{MigrationForm, PlatformCatalog};

    pub use deskshift_estimate::{Estimator, Scenario, ThroughputBound, estimate};

    #[cfg(feature = "report")]
    pub use deskshift_report::{MigrationReport, ReportFormat, Reporter};

    #[cfg(feature = "config")]
    pub use deskshift_config::DeskshiftConfig;
}
