//! Estimation request definition.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DataEntity;

/// One estimation request.
///
/// `selected_entities` is expected to contain only entities the source
/// platform can export; the collaborator building the request enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Source platform identifier.
    pub source: String,
    /// Plan key of the source platform.
    pub source_plan: String,
    /// Destination platform identifier.
    pub destination: String,
    /// Plan key of the destination platform.
    pub dest_plan: String,
    /// Entities to migrate, in presentation order.
    #[serde(default)]
    pub selected_entities: Vec<DataEntity>,
    /// Record count per entity. Missing entries count as zero.
    #[serde(default)]
    pub volumes: BTreeMap<DataEntity, u64>,
    /// Average number of attachments per ticket.
    #[serde(default)]
    pub avg_attachments_per_ticket: f64,
    /// Average attachment size in MB.
    #[serde(default)]
    pub avg_attachment_size_mb: f64,
}

impl CalculatorInputs {
    /// Creates a request with no entities selected and no attachments.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        source_plan: impl Into<String>,
        destination: impl Into<String>,
        dest_plan: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_plan: source_plan.into(),
            destination: destination.into(),
            dest_plan: dest_plan.into(),
            selected_entities: Vec::new(),
            volumes: BTreeMap::new(),
            avg_attachments_per_ticket: 0.0,
            avg_attachment_size_mb: 0.0,
        }
    }

    /// Selects an entity and records its volume.
    #[must_use]
    pub fn with_entity(mut self, entity: DataEntity, volume: u64) -> Self {
        if !self.selected_entities.contains(&entity) {
            self.selected_entities.push(entity);
        }
        self.volumes.insert(entity, volume);
        self
    }

    /// Sets the attachment profile of tickets.
    #[must_use]
    pub const fn with_attachments(mut self, per_ticket: f64, size_mb: f64) -> Self {
        self.avg_attachments_per_ticket = per_ticket;
        self.avg_attachment_size_mb = size_mb;
        self
    }

    /// Returns the requested volume of an entity, zero when absent.
    #[must_use]
    pub fn volume(&self, entity: DataEntity) -> u64 {
        self.volumes.get(&entity).copied().unwrap_or(0)
    }

    /// Returns true if the entity is selected.
    #[must_use]
    pub fn is_selected(&self, entity: DataEntity) -> bool {
        self.selected_entities.contains(&entity)
    }
}
