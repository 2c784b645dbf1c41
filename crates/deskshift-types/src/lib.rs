//! Core types for the deskshift helpdesk migration estimator.
//!
//! This crate provides the fundamental data structures used throughout deskshift:
//!
//! - [`DataEntity`] - A kind of migratable helpdesk object
//! - [`PlanLimits`] - Rate limits of one pricing tier
//! - [`PlatformCapability`] - A helpdesk platform and its API behavior
//! - [`CalculatorInputs`] - One estimation request
//! - [`TimelineResult`] - Estimated duration and risk of a migration

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/deskshift/deskshift/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod entity;
mod error;
mod inputs;
mod platform;
mod timeline;

pub use entity::{DataEntity, EntityParseError};
pub use error::{DeskshiftError, Result};
pub use inputs::CalculatorInputs;
pub use platform::{Capabilities, Features, Limits, PlanLimits, PlanTier, PlatformCapability};
pub use timeline::{DurationBreakdown, INVALID_CONFIGURATION, RiskLevel, TimelineResult};
