//! CLI command implementations.

pub(crate) mod compare;
pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod info;
pub(crate) mod platforms;
