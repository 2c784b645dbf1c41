//! API versus manual task classification.

use deskshift_types::{DataEntity, PlatformCapability};

/// Selected entities split by migration path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPlan {
    /// Entities with an export path on the source and an import path on the destination.
    pub api: Vec<DataEntity>,
    /// Entities lacking an API path on at least one side.
    pub manual: Vec<DataEntity>,
}

impl TaskPlan {
    /// Classifies the selection, keeping its order and ignoring repeats.
    #[must_use]
    pub fn classify(
        selected: &[DataEntity],
        source: &PlatformCapability,
        destination: &PlatformCapability,
    ) -> Self {
        let mut plan = Self::default();
        for &entity in selected {
            if plan.contains(entity) {
                continue;
            }
            if source.can_export(entity) && destination.can_import(entity) {
                plan.api.push(entity);
            } else {
                plan.manual.push(entity);
            }
        }
        plan
    }

    /// Returns true if the entity is moved through the APIs.
    #[must_use]
    pub fn is_api(&self, entity: DataEntity) -> bool {
        self.api.contains(&entity)
    }

    /// Returns true if the entity was classified either way.
    #[must_use]
    pub fn contains(&self, entity: DataEntity) -> bool {
        self.api.contains(&entity) || self.manual.contains(&entity)
    }

    /// Returns the labels of the API tasks.
    #[must_use]
    pub fn api_labels(&self) -> Vec<String> {
        self.api.iter().map(|e| e.label().to_string()).collect()
    }

    /// Returns the labels of the manual tasks.
    #[must_use]
    pub fn manual_labels(&self) -> Vec<String> {
        self.manual.iter().map(|e| e.label().to_string()).collect()
    }
}
