//! Migration duration and risk estimation for the deskshift helpdesk migration estimator.
//!
//! This crate turns a [`CalculatorInputs`](deskshift_types::CalculatorInputs)
//! request and a platform catalog into a
//! [`TimelineResult`](deskshift_types::TimelineResult):
//!
//! - [`TaskPlan`] - Splits selected entities into API and manual tasks
//! - [`ThroughputBound`] - Source and destination records-per-minute ceilings
//! - [`Scenario`] - Optimistic, likely, and conservative efficiency factors
//! - [`assess_risk`] - Qualitative risk tiers
//! - [`Estimator`] - Combines the above into a timeline

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod classify;
mod estimator;
mod risk;
mod scenario;
mod throughput;

pub use classify::TaskPlan;
pub use estimator::{DEFAULT_ATTACHMENT_BANDWIDTH_MB_PER_MIN, Estimator, estimate};
pub use risk::{
    HIGH_RISK_ATTACHMENT_MB, HIGH_RISK_TICKETS, MEDIUM_RISK_MANUAL_TASKS, MEDIUM_RISK_TICKETS,
    assess_risk,
};
pub use scenario::{CONSERVATIVE_EFFICIENCY, OPTIMISTIC_EFFICIENCY, Scenario};
pub use throughput::{BottleneckSide, ThroughputBound};
