//! Estimate plus the context needed to present it.

use chrono::{DateTime, Utc};
use deskshift_catalog::PlatformCatalog;
use deskshift_types::{CalculatorInputs, DataEntity, TimelineResult};
use serde::Serialize;

/// Why an entity has to be moved by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualNote {
    /// The entity.
    pub entity: DataEntity,
    /// Display label of the entity.
    pub label: String,
    /// Which side lacks an API path.
    pub reason: String,
}

/// One selected entity as shown in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRow {
    /// The entity.
    pub entity: DataEntity,
    /// Display label of the entity.
    pub label: String,
    /// Record count.
    pub volume: u64,
    /// Likely-scenario hours; zero for manual entities.
    pub hours: f64,
    /// Whether the entity moves through the APIs.
    pub automated: bool,
}

/// A timeline estimate together with its request and platform context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationReport {
    /// Source platform display name.
    pub source_name: String,
    /// Source plan display label.
    pub source_plan: String,
    /// Destination platform display name.
    pub destination_name: String,
    /// Destination plan display label.
    pub dest_plan: String,
    /// The estimation request.
    pub inputs: CalculatorInputs,
    /// The estimate.
    pub result: TimelineResult,
    /// Reasons for each manual task.
    pub manual_notes: Vec<ManualNote>,
    /// Total attachment payload in MB.
    pub attachment_mb: f64,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl MigrationReport {
    /// Builds a report, resolving display names through the catalog.
    ///
    /// Identifiers the catalog does not know are shown as given.
    #[must_use]
    pub fn new(
        inputs: CalculatorInputs,
        result: TimelineResult,
        catalog: &PlatformCatalog,
    ) -> Self {
        let source = catalog.get(&inputs.source);
        let destination = catalog.get(&inputs.destination);

        let source_name = source.map_or_else(|| inputs.source.clone(), |p| p.name().to_string());
        let destination_name =
            destination.map_or_else(|| inputs.destination.clone(), |p| p.name().to_string());
        let source_plan = source
            .and_then(|p| p.plan(&inputs.source_plan))
            .map_or_else(|| inputs.source_plan.clone(), |l| l.label.clone());
        let dest_plan = destination
            .and_then(|p| p.plan(&inputs.dest_plan))
            .map_or_else(|| inputs.dest_plan.clone(), |l| l.label.clone());

        let mut manual_notes = Vec::new();
        if let (Some(src), Some(dst)) = (source, destination) {
            for &entity in &inputs.selected_entities {
                let label = entity.label().to_string();
                if !result.manual_tasks.contains(&label)
                    || manual_notes.iter().any(|n: &ManualNote| n.entity == entity)
                {
                    continue;
                }
                let reason = if src.can_export(entity) {
                    format!("Destination ({}) missing Import API", dst.name())
                } else {
                    format!("Source ({}) missing Export API", src.name())
                };
                manual_notes.push(ManualNote {
                    entity,
                    label,
                    reason,
                });
            }
        }

        let attachment_mb = if inputs.is_selected(DataEntity::Tickets) {
            inputs.volume(DataEntity::Tickets) as f64
                * inputs.avg_attachments_per_ticket.max(0.0)
                * inputs.avg_attachment_size_mb.max(0.0)
        } else {
            0.0
        };

        Self {
            source_name,
            source_plan,
            destination_name,
            dest_plan,
            inputs,
            result,
            manual_notes,
            attachment_mb,
            generated_at: Utc::now(),
        }
    }

    /// Overrides the generation timestamp.
    #[must_use]
    pub const fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Returns the "Source (Plan) -> Destination (Plan)" headline.
    #[must_use]
    pub fn route(&self) -> String {
        format!(
            "{} ({}) -> {} ({})",
            self.source_name, self.source_plan, self.destination_name, self.dest_plan
        )
    }

    /// Returns one row per selected entity, in selection order.
    #[must_use]
    pub fn entity_rows(&self) -> Vec<EntityRow> {
        let mut rows: Vec<EntityRow> = Vec::with_capacity(self.inputs.selected_entities.len());
        for &entity in &self.inputs.selected_entities {
            if rows.iter().any(|r| r.entity == entity) {
                continue;
            }
            let label = entity.label().to_string();
            rows.push(EntityRow {
                entity,
                automated: self.result.api_tasks.contains(&label),
                label,
                volume: self.inputs.volume(entity),
                hours: self.result.entity_hours(entity).unwrap_or(0.0),
            });
        }
        rows
    }

    /// Returns notes explaining the risk level.
    #[must_use]
    pub fn risk_notes(&self) -> Vec<String> {
        use deskshift_estimate::{
            HIGH_RISK_ATTACHMENT_MB, HIGH_RISK_TICKETS, MEDIUM_RISK_MANUAL_TASKS,
            MEDIUM_RISK_TICKETS,
        };

        if self.result.is_invalid_configuration() {
            return vec!["The platform or plan selection could not be resolved.".to_string()];
        }

        let tickets = if self.inputs.is_selected(DataEntity::Tickets) {
            self.inputs.volume(DataEntity::Tickets)
        } else {
            0
        };
        let mut notes = Vec::new();
        if tickets > HIGH_RISK_TICKETS {
            notes.push(format!(
                "{tickets} tickets exceeds the {HIGH_RISK_TICKETS} ticket high-risk threshold."
            ));
        } else if tickets > MEDIUM_RISK_TICKETS {
            notes.push(format!(
                "{tickets} tickets exceeds the {MEDIUM_RISK_TICKETS} ticket medium-risk threshold."
            ));
        }
        if self.attachment_mb > HIGH_RISK_ATTACHMENT_MB {
            notes.push(format!(
                "{:.0} MB of attachments exceeds the {HIGH_RISK_ATTACHMENT_MB:.0} MB high-risk threshold.",
                self.attachment_mb
            ));
        }
        let manual = self.result.manual_tasks.len();
        if manual > MEDIUM_RISK_MANUAL_TASKS {
            notes.push(format!(
                "{manual} manual tasks exceeds the {MEDIUM_RISK_MANUAL_TASKS} task medium-risk threshold."
            ));
        }
        if notes.is_empty() {
            notes.push("Volumes and manual work are within low-risk thresholds.".to_string());
        }
        notes
    }
}
