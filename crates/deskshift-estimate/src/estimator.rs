//! Migration timeline estimation logic.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use deskshift_catalog::PlatformCatalog;
use deskshift_types::{
    CalculatorInputs, DataEntity, DurationBreakdown, PlanLimits, PlatformCapability,
    TimelineResult,
};

use crate::classify::TaskPlan;
use crate::risk::assess_risk;
use crate::scenario::Scenario;
use crate::throughput::ThroughputBound;

/// Default attachment upload bandwidth in MB per minute (about 1.5 MB/s).
pub const DEFAULT_ATTACHMENT_BANDWIDTH_MB_PER_MIN: f64 = 90.0;

/// Static estimator instance.
static ESTIMATOR: OnceLock<Estimator> = OnceLock::new();

/// Durations of one scenario, in minutes.
#[derive(Debug, Clone, Default)]
struct ScenarioMinutes {
    foundation: f64,
    core_data: f64,
    attachments: f64,
    per_entity_hours: BTreeMap<DataEntity, f64>,
}

impl ScenarioMinutes {
    fn total_hours(&self) -> f64 {
        (self.foundation + self.core_data + self.attachments) / 60.0
    }
}

/// Resolved platforms and plans of a request.
struct Resolved<'c> {
    source: &'c PlatformCapability,
    source_plan: &'c PlanLimits,
    destination: &'c PlatformCapability,
    dest_plan: &'c PlanLimits,
}

impl<'c> Resolved<'c> {
    fn new(inputs: &CalculatorInputs, catalog: &'c PlatformCatalog) -> Option<Self> {
        let source = catalog.get(&inputs.source)?;
        let destination = catalog.get(&inputs.destination)?;
        Some(Self {
            source,
            source_plan: source.plan(&inputs.source_plan)?,
            destination,
            dest_plan: destination.plan(&inputs.dest_plan)?,
        })
    }
}

/// Migration duration and risk estimator.
#[derive(Debug, Clone)]
pub struct Estimator {
    /// Assumed attachment upload bandwidth in MB per minute.
    attachment_bandwidth_mb_per_min: f64,
}

impl Estimator {
    /// Creates a new estimator with the specified attachment bandwidth.
    #[must_use]
    pub const fn new(attachment_bandwidth_mb_per_min: f64) -> Self {
        Self {
            attachment_bandwidth_mb_per_min,
        }
    }

    /// Returns the global estimator instance with default settings.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(DEFAULT_ATTACHMENT_BANDWIDTH_MB_PER_MIN))
    }

    /// Returns the assumed attachment bandwidth in MB per minute.
    #[must_use]
    pub const fn attachment_bandwidth_mb_per_min(&self) -> f64 {
        self.attachment_bandwidth_mb_per_min
    }

    /// Estimates the timeline and risk of a migration.
    ///
    /// Never fails: an unknown platform or plan yields
    /// [`TimelineResult::invalid_configuration`].
    #[must_use]
    pub fn estimate(&self, inputs: &CalculatorInputs, catalog: &PlatformCatalog) -> TimelineResult {
        let Some(resolved) = Resolved::new(inputs, catalog) else {
            tracing::warn!(
                source = %inputs.source,
                source_plan = %inputs.source_plan,
                destination = %inputs.destination,
                dest_plan = %inputs.dest_plan,
                "platform or plan not found in catalog"
            );
            return TimelineResult::invalid_configuration();
        };

        let tasks = TaskPlan::classify(
            &inputs.selected_entities,
            resolved.source,
            resolved.destination,
        );
        let bound = ThroughputBound::new(
            resolved.source,
            resolved.source_plan,
            resolved.destination,
            resolved.dest_plan,
        );
        tracing::debug!(
            source_rpm = bound.source_records_per_minute,
            destination_rpm = bound.destination_records_per_minute,
            bottleneck = %bound.side,
            "resolved throughput bound"
        );

        let tickets_selected = tasks.contains(DataEntity::Tickets);
        let ticket_volume = if tickets_selected {
            inputs.volume(DataEntity::Tickets)
        } else {
            0
        };
        let attachment_mb = ticket_volume as f64
            * inputs.avg_attachments_per_ticket
            * inputs.avg_attachment_size_mb;

        let [optimistic, likely, conservative] = Scenario::ALL.map(|scenario| {
            self.scenario_minutes(scenario, inputs, &resolved, &tasks, &bound, attachment_mb)
        });

        let result = TimelineResult {
            total_duration_hours: likely.total_hours(),
            min_duration_hours: optimistic.total_hours(),
            max_duration_hours: conservative.total_hours(),
            breakdown: DurationBreakdown {
                foundation: likely.foundation / 60.0,
                core_data: likely.core_data / 60.0,
                attachments: likely.attachments / 60.0,
            },
            entity_breakdown: likely.per_entity_hours,
            bottleneck: bound.label,
            risk_level: assess_risk(ticket_volume, attachment_mb, tasks.manual.len()),
            api_tasks: tasks.api_labels(),
            manual_tasks: tasks.manual_labels(),
        };

        tracing::debug!(
            likely_hours = result.total_duration_hours,
            min_hours = result.min_duration_hours,
            max_hours = result.max_duration_hours,
            risk = %result.risk_level,
            "estimated migration timeline"
        );
        if !result.is_ordered() {
            tracing::warn!(
                likely_hours = result.total_duration_hours,
                min_hours = result.min_duration_hours,
                max_hours = result.max_duration_hours,
                "scenario durations are not ordered; check platform throughput buffers"
            );
        }

        result
    }

    /// Computes the minutes spent per phase under one scenario.
    fn scenario_minutes(
        &self,
        scenario: Scenario,
        inputs: &CalculatorInputs,
        resolved: &Resolved<'_>,
        tasks: &TaskPlan,
        bound: &ThroughputBound,
        attachment_mb: f64,
    ) -> ScenarioMinutes {
        let efficiency = scenario.efficiency(
            resolved.source.limits().throughput_buffer,
            resolved.destination.limits().throughput_buffer,
        );
        let speed = (bound.effective() as f64 * efficiency).max(1.0);
        let complexity = resolved.destination.features().complexity_multiplier;

        let mut minutes = ScenarioMinutes::default();
        for &entity in &tasks.manual {
            minutes.per_entity_hours.insert(entity, 0.0);
        }
        for &entity in &tasks.api {
            let volume = inputs.volume(entity) as f64;
            let operations = if entity.is_core_data() {
                volume * complexity
            } else {
                volume
            };
            let entity_minutes = operations / speed;
            minutes.per_entity_hours.insert(entity, entity_minutes / 60.0);

            if entity.is_core_data() {
                minutes.core_data += entity_minutes;
            } else {
                minutes.foundation += entity_minutes;
            }
        }

        minutes.attachments = self.attachment_minutes(attachment_mb) * scenario.attachment_factor();
        minutes
    }

    /// Minutes needed to upload the attachment payload.
    fn attachment_minutes(&self, attachment_mb: f64) -> f64 {
        if attachment_mb <= 0.0 || self.attachment_bandwidth_mb_per_min <= 0.0 {
            return 0.0;
        }
        attachment_mb / self.attachment_bandwidth_mb_per_min
    }

    /// Formats an estimate as a human-readable summary.
    #[must_use]
    pub fn format_estimate(result: &TimelineResult) -> String {
        format!(
            "Duration: {} (range {} - {})\n\
             Bottleneck: {}\n\
             Risk: {}\n\
             Automated: {} | Manual: {}",
            Self::format_hours(result.total_duration_hours),
            Self::format_hours(result.min_duration_hours),
            Self::format_hours(result.max_duration_hours),
            result.bottleneck,
            result.risk_level,
            result.api_tasks.len(),
            result.manual_tasks.len(),
        )
    }

    /// Formats hours in human-readable form (e.g., "45m", "3.5h", "2d 4h").
    #[must_use]
    pub fn format_hours(hours: f64) -> String {
        if !hours.is_finite() || hours <= 0.0 {
            return "0m".to_string();
        }

        if hours < 1.0 {
            let minutes = (hours * 60.0).round() as u64;
            if minutes == 0 {
                "<1m".to_string()
            } else {
                format!("{minutes}m")
            }
        } else if hours < 24.0 {
            format!("{hours:.1}h")
        } else {
            let total_hours = hours.round() as u64;
            let days = total_hours / 24;
            let rest = total_hours % 24;
            if rest > 0 {
                format!("{days}d {rest}h")
            } else {
                format!("{days}d")
            }
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_ATTACHMENT_BANDWIDTH_MB_PER_MIN)
    }
}

/// Estimates a migration with the global estimator.
#[must_use]
pub fn estimate(inputs: &CalculatorInputs, catalog: &PlatformCatalog) -> TimelineResult {
    Estimator::global().estimate(inputs, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use deskshift_types::RiskLevel;

    fn zendesk_to_freshdesk() -> CalculatorInputs {
        CalculatorInputs::new("zendesk", "suite_growth", "freshdesk", "pro")
    }

    #[test]
    fn test_single_ticket_entity() {
        let catalog = PlatformCatalog::global();
        let inputs = zendesk_to_freshdesk().with_entity(DataEntity::Tickets, 10_000);

        let result = Estimator::default().estimate(&inputs, catalog);

        // min(10 * 1000, 160 * 1) = 160/min, likely efficiency 1 - 0.15
        let expected = 10_000.0 * 2.5 / (160.0 * 0.85) / 60.0;
        assert_relative_eq!(result.total_duration_hours, expected);
        assert_relative_eq!(result.breakdown.core_data, expected);
        assert_relative_eq!(result.breakdown.foundation, 0.0);
        assert_eq!(result.bottleneck, "Freshdesk (Pro) Limits");
        assert_eq!(result.api_tasks, vec!["Tickets & Conversations"]);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_foundation_entities_skip_complexity() {
        let catalog = PlatformCatalog::global();
        let inputs = zendesk_to_freshdesk().with_entity(DataEntity::Users, 1_600);

        let result = Estimator::default().estimate(&inputs, catalog);

        let expected = 1_600.0 / (160.0 * 0.85) / 60.0;
        assert_relative_eq!(result.breakdown.foundation, expected);
        assert_relative_eq!(result.entity_hours(DataEntity::Users).unwrap(), expected);
        assert_relative_eq!(result.breakdown.core_data, 0.0);
    }

    #[test]
    fn test_attachment_scenarios() {
        let catalog = PlatformCatalog::global();
        let inputs = zendesk_to_freshdesk()
            .with_entity(DataEntity::Tickets, 0)
            .with_attachments(0.0, 0.0);
        let base = Estimator::default().estimate(&inputs, catalog);
        assert_relative_eq!(base.breakdown.attachments, 0.0);

        let inputs = CalculatorInputs::new("freshdesk", "pro", "zendesk", "suite_team")
            .with_entity(DataEntity::Tickets, 9_000)
            .with_attachments(1.0, 1.0);
        let result = Estimator::default().estimate(&inputs, catalog);

        // 9000 MB at 90 MB/min = 100 minutes
        assert_relative_eq!(result.breakdown.attachments, 100.0 / 60.0);
        let ticket_hours = result.entity_hours(DataEntity::Tickets).unwrap();
        assert_relative_eq!(
            result.total_duration_hours,
            ticket_hours + 100.0 / 60.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_custom_bandwidth() {
        let catalog = PlatformCatalog::global();
        let inputs = zendesk_to_freshdesk()
            .with_entity(DataEntity::Tickets, 1_000)
            .with_attachments(1.0, 1.8);

        let slow = Estimator::new(9.0).estimate(&inputs, catalog);
        let fast = Estimator::default().estimate(&inputs, catalog);
        assert_relative_eq!(
            slow.breakdown.attachments,
            fast.breakdown.attachments * 10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_unknown_plan_is_invalid_configuration() {
        let catalog = PlatformCatalog::global();
        let inputs = CalculatorInputs::new("zendesk", "pro", "freshdesk", "pro")
            .with_entity(DataEntity::Tickets, 10);

        let result = estimate(&inputs, catalog);
        assert_eq!(result, TimelineResult::invalid_configuration());
    }

    #[test]
    fn test_unknown_platform_is_invalid_configuration() {
        let catalog = PlatformCatalog::global();
        let inputs = CalculatorInputs::new("kayako", "any", "freshdesk", "pro");

        let result = estimate(&inputs, catalog);
        assert!(result.is_invalid_configuration());
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(Estimator::format_hours(0.0), "0m");
        assert_eq!(Estimator::format_hours(0.001), "<1m");
        assert_eq!(Estimator::format_hours(0.75), "45m");
        assert_eq!(Estimator::format_hours(3.5), "3.5h");
        assert_eq!(Estimator::format_hours(48.0), "2d");
        assert_eq!(Estimator::format_hours(52.2), "2d 4h");
    }

    #[test]
    fn test_format_estimate() {
        let catalog = PlatformCatalog::global();
        let inputs = zendesk_to_freshdesk().with_entity(DataEntity::Tickets, 10_000);
        let summary = Estimator::format_estimate(&estimate(&inputs, catalog));

        assert!(summary.contains("Bottleneck: Freshdesk (Pro) Limits"));
        assert!(summary.contains("Risk: Low"));
        assert!(summary.contains("Automated: 1 | Manual: 0"));
    }
}
