//! Source/destination throughput ceilings.

use deskshift_types::{PlanLimits, PlatformCapability};

/// Side of the migration that limits throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottleneckSide {
    /// The source export API.
    Source,
    /// The destination import API.
    Destination,
}

impl BottleneckSide {
    /// Returns the side as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
        }
    }
}

impl std::fmt::Display for BottleneckSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Records-per-minute ceilings of both sides of a migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroughputBound {
    /// Records the source can export per minute.
    pub source_records_per_minute: u64,
    /// Records the destination can create per minute.
    pub destination_records_per_minute: u64,
    /// Which side supplies the lower ceiling.
    pub side: BottleneckSide,
    /// Human-readable bottleneck description.
    pub label: String,
}

impl ThroughputBound {
    /// Computes the ceilings of a platform/plan pair.
    ///
    /// The source ceiling is its resolved export limit times the records it
    /// returns per export call; the destination ceiling is its resolved
    /// creation limit times its import batch size. Equal ceilings are
    /// attributed to the destination.
    #[must_use]
    pub fn new(
        source: &PlatformCapability,
        source_plan: &PlanLimits,
        destination: &PlatformCapability,
        dest_plan: &PlanLimits,
    ) -> Self {
        let source_records_per_minute = u64::from(source_plan.effective_export_limit())
            * u64::from(source.features().export_batch_size);
        let destination_records_per_minute = u64::from(dest_plan.effective_import_limit())
            * u64::from(destination.features().batch_size);

        let (side, label) = if source_records_per_minute < destination_records_per_minute {
            (BottleneckSide::Source, limits_label(source, source_plan))
        } else {
            (
                BottleneckSide::Destination,
                limits_label(destination, dest_plan),
            )
        };

        Self {
            source_records_per_minute,
            destination_records_per_minute,
            side,
            label,
        }
    }

    /// Returns the effective records-per-minute bound.
    #[must_use]
    pub fn effective(&self) -> u64 {
        self.source_records_per_minute
            .min(self.destination_records_per_minute)
    }
}

fn limits_label(platform: &PlatformCapability, plan: &PlanLimits) -> String {
    format!("{} ({}) Limits", platform.name(), plan.label)
}
