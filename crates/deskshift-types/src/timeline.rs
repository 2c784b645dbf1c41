//! Estimation result definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DataEntity;

/// Bottleneck text reported when the request cannot be resolved.
pub const INVALID_CONFIGURATION: &str = "Invalid Configuration";

/// Qualitative migration risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Small, mostly automated migration.
    Low,
    /// Sizeable volume or several manual tasks.
    Medium,
    /// Very large ticket volume or attachment payload.
    High,
}

impl RiskLevel {
    /// Returns the risk level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Likely-scenario duration split by migration phase, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// All selected non-ticket entities.
    pub foundation: f64,
    /// Tickets.
    pub core_data: f64,
    /// Ticket attachment transfer.
    pub attachments: f64,
}

impl DurationBreakdown {
    /// Returns the sum of the three phases.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.foundation + self.core_data + self.attachments
    }
}

/// Estimated migration timeline and risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResult {
    /// Likely-scenario duration in hours.
    pub total_duration_hours: f64,
    /// Optimistic-scenario duration in hours.
    pub min_duration_hours: f64,
    /// Conservative-scenario duration in hours.
    pub max_duration_hours: f64,
    /// Likely-scenario phase breakdown.
    pub breakdown: DurationBreakdown,
    /// Likely-scenario hours per selected entity; manual entities report 0.
    pub entity_breakdown: BTreeMap<DataEntity, f64>,
    /// Which side limits throughput.
    pub bottleneck: String,
    /// Qualitative risk.
    pub risk_level: RiskLevel,
    /// Labels of entities moved through the APIs.
    pub api_tasks: Vec<String>,
    /// Labels of entities that must be moved by hand.
    pub manual_tasks: Vec<String>,
}

impl TimelineResult {
    /// Result returned when a platform or plan cannot be resolved.
    #[must_use]
    pub fn invalid_configuration() -> Self {
        Self {
            total_duration_hours: 0.0,
            min_duration_hours: 0.0,
            max_duration_hours: 0.0,
            breakdown: DurationBreakdown::default(),
            entity_breakdown: BTreeMap::new(),
            bottleneck: INVALID_CONFIGURATION.to_string(),
            risk_level: RiskLevel::High,
            api_tasks: Vec::new(),
            manual_tasks: Vec::new(),
        }
    }

    /// Returns true if this is the invalid-configuration result.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        self.bottleneck == INVALID_CONFIGURATION
    }

    /// Returns true if `min <= likely <= max`.
    ///
    /// The optimistic and conservative scenarios use fixed efficiencies while
    /// the likely one derives from platform buffers, so this only holds while
    /// the smaller buffer stays within `[0.05, 0.40]`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min_duration_hours <= self.total_duration_hours
            && self.total_duration_hours <= self.max_duration_hours
    }

    /// Returns the likely-scenario hours of one entity.
    #[must_use]
    pub fn entity_hours(&self, entity: DataEntity) -> Option<f64> {
        self.entity_breakdown.get(&entity).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_result() {
        let result = TimelineResult::invalid_configuration();
        assert!(result.is_invalid_configuration());
        assert_eq!(result.risk_level, RiskLevel::High);
        assert_eq!(result.total_duration_hours, 0.0);
        assert!(result.api_tasks.is_empty());
        assert!(result.manual_tasks.is_empty());
        assert!(result.entity_breakdown.is_empty());
        assert_eq!(result.breakdown, DurationBreakdown::default());
    }

    #[test]
    fn test_risk_level_ordering_and_display() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = DurationBreakdown {
            foundation: 1.0,
            core_data: 2.5,
            attachments: 0.5,
        };
        assert_eq!(breakdown.total(), 4.0);
    }
}
