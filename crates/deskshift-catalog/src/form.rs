//! Interactive migration form state.
//!
//! [`MigrationForm`] holds what a user has picked so far and keeps it
//! consistent with the catalog: switching a platform resets its plan to the
//! first tier and re-selects the entities both sides support.

use std::collections::BTreeMap;

use deskshift_types::{CalculatorInputs, DataEntity, DeskshiftError, PlatformCapability, Result};

use crate::PlatformCatalog;

/// Source platform selected by default.
pub const DEFAULT_SOURCE: &str = "zendesk";

/// Destination platform selected by default.
pub const DEFAULT_DESTINATION: &str = "freshdesk";

const DEFAULT_VOLUMES: [(DataEntity, u64); 6] = [
    (DataEntity::Tickets, 10_000),
    (DataEntity::Users, 5_000),
    (DataEntity::Articles, 200),
    (DataEntity::Groups, 50),
    (DataEntity::Organizations, 100),
    (DataEntity::Macros, 50),
];

const DEFAULT_ATTACHMENTS_PER_TICKET: f64 = 0.5;
const DEFAULT_ATTACHMENT_SIZE_MB: f64 = 2.0;

/// Form state that produces [`CalculatorInputs`].
#[derive(Debug, Clone)]
pub struct MigrationForm<'a> {
    catalog: &'a PlatformCatalog,
    source: String,
    source_plan: String,
    destination: String,
    dest_plan: String,
    selected: Vec<DataEntity>,
    volumes: BTreeMap<DataEntity, u64>,
    avg_attachments_per_ticket: f64,
    avg_attachment_size_mb: f64,
}

impl<'a> MigrationForm<'a> {
    /// Creates a form with the default platforms, plans, and volumes.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lacks the default platforms.
    pub fn new(catalog: &'a PlatformCatalog) -> Result<Self> {
        Self::with_platforms(catalog, DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }

    /// Creates a form for a specific platform pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either platform is not in the catalog.
    pub fn with_platforms(
        catalog: &'a PlatformCatalog,
        source: &str,
        destination: &str,
    ) -> Result<Self> {
        let src = lookup(catalog, source)?;
        let dst = lookup(catalog, destination)?;

        let mut form = Self {
            catalog,
            source: src.id().to_string(),
            source_plan: first_plan_key(src),
            destination: dst.id().to_string(),
            dest_plan: first_plan_key(dst),
            selected: Vec::new(),
            volumes: DEFAULT_VOLUMES.into_iter().collect(),
            avg_attachments_per_ticket: DEFAULT_ATTACHMENTS_PER_TICKET,
            avg_attachment_size_mb: DEFAULT_ATTACHMENT_SIZE_MB,
        };
        form.reselect_mutual();
        Ok(form)
    }

    /// Switches the source platform.
    ///
    /// The source plan resets to the platform's first tier and the selection
    /// is replaced by the mutually supported entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is not in the catalog.
    pub fn set_source(&mut self, id: &str) -> Result<()> {
        let platform = lookup(self.catalog, id)?;
        self.source = platform.id().to_string();
        self.source_plan = first_plan_key(platform);
        self.reselect_mutual();
        Ok(())
    }

    /// Switches the destination platform.
    ///
    /// The destination plan resets to the platform's first tier and the
    /// selection is replaced by the mutually supported entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is not in the catalog.
    pub fn set_destination(&mut self, id: &str) -> Result<()> {
        let platform = lookup(self.catalog, id)?;
        self.destination = platform.id().to_string();
        self.dest_plan = first_plan_key(platform);
        self.reselect_mutual();
        Ok(())
    }

    /// Selects the source plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the source platform has no such plan.
    pub fn set_source_plan(&mut self, key: &str) -> Result<()> {
        ensure_plan(self.source_platform()?, key)?;
        self.source_plan = key.to_string();
        Ok(())
    }

    /// Selects the destination plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination platform has no such plan.
    pub fn set_dest_plan(&mut self, key: &str) -> Result<()> {
        ensure_plan(self.destination_platform()?, key)?;
        self.dest_plan = key.to_string();
        Ok(())
    }

    /// Adds or removes an entity from the selection.
    ///
    /// Returns whether the entity is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error when selecting an entity the source cannot export.
    pub fn toggle_entity(&mut self, entity: DataEntity) -> Result<bool> {
        if let Some(pos) = self.selected.iter().position(|&e| e == entity) {
            self.selected.remove(pos);
            return Ok(false);
        }
        self.select_entity(entity)?;
        Ok(true)
    }

    /// Adds an entity to the selection if it is not already selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot export the entity.
    pub fn select_entity(&mut self, entity: DataEntity) -> Result<()> {
        let source = self.source_platform()?;
        if !source.can_export(entity) {
            return Err(DeskshiftError::NotExportable {
                platform: source.name().to_string(),
                entity: entity.label().to_string(),
            });
        }
        if !self.selected.contains(&entity) {
            self.selected.push(entity);
        }
        Ok(())
    }

    /// Replaces the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot export one of the entities; the
    /// previous selection is kept in that case.
    pub fn set_selection(&mut self, entities: &[DataEntity]) -> Result<()> {
        let previous = std::mem::take(&mut self.selected);
        for &entity in entities {
            if let Err(err) = self.select_entity(entity) {
                self.selected = previous;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Sets the record count of an entity.
    pub fn set_volume(&mut self, entity: DataEntity, volume: u64) {
        self.volumes.insert(entity, volume);
    }

    /// Sets the attachment profile of tickets; negative values become zero.
    pub fn set_attachments(&mut self, per_ticket: f64, size_mb: f64) {
        self.avg_attachments_per_ticket = per_ticket.max(0.0);
        self.avg_attachment_size_mb = size_mb.max(0.0);
    }

    /// Returns the current source platform id.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the current source plan key.
    #[must_use]
    pub fn source_plan(&self) -> &str {
        &self.source_plan
    }

    /// Returns the current destination platform id.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the current destination plan key.
    #[must_use]
    pub fn dest_plan(&self) -> &str {
        &self.dest_plan
    }

    /// Returns the selected entities in selection order.
    #[must_use]
    pub fn selected(&self) -> &[DataEntity] {
        &self.selected
    }

    /// Returns the requested volume of an entity, zero when unset.
    #[must_use]
    pub fn volume(&self, entity: DataEntity) -> u64 {
        self.volumes.get(&entity).copied().unwrap_or(0)
    }

    /// Returns attachments per ticket and average attachment size in MB.
    #[must_use]
    pub const fn attachments(&self) -> (f64, f64) {
        (self.avg_attachments_per_ticket, self.avg_attachment_size_mb)
    }

    /// Returns the catalog the form validates against.
    #[must_use]
    pub const fn catalog(&self) -> &'a PlatformCatalog {
        self.catalog
    }

    /// Builds the estimation request.
    #[must_use]
    pub fn to_inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            source: self.source.clone(),
            source_plan: self.source_plan.clone(),
            destination: self.destination.clone(),
            dest_plan: self.dest_plan.clone(),
            selected_entities: self.selected.clone(),
            volumes: self.volumes.clone(),
            avg_attachments_per_ticket: self.avg_attachments_per_ticket,
            avg_attachment_size_mb: self.avg_attachment_size_mb,
        }
    }

    fn source_platform(&self) -> Result<&'a PlatformCapability> {
        lookup(self.catalog, &self.source)
    }

    fn destination_platform(&self) -> Result<&'a PlatformCapability> {
        lookup(self.catalog, &self.destination)
    }

    fn reselect_mutual(&mut self) {
        self.selected = self
            .catalog
            .mutual_entities(&self.source, &self.destination);
    }
}

fn lookup<'c>(catalog: &'c PlatformCatalog, id: &str) -> Result<&'c PlatformCapability> {
    catalog
        .get(id)
        .ok_or_else(|| DeskshiftError::UnknownPlatform(id.to_string()))
}

fn ensure_plan(platform: &PlatformCapability, key: &str) -> Result<()> {
    if platform.plan(key).is_none() {
        return Err(DeskshiftError::UnknownPlan {
            platform: platform.id().to_string(),
            plan: key.to_string(),
        });
    }
    Ok(())
}

// Validation guarantees at least one plan per platform.
fn first_plan_key(platform: &PlatformCapability) -> String {
    platform
        .first_plan()
        .map(|tier| tier.key.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let catalog = PlatformCatalog::global();
        let form = MigrationForm::new(catalog).unwrap();

        assert_eq!(form.source(), "zendesk");
        assert_eq!(form.source_plan(), "suite_team");
        assert_eq!(form.destination(), "freshdesk");
        assert_eq!(form.dest_plan(), "free");
        assert_eq!(form.volume(DataEntity::Tickets), 10_000);
        assert_eq!(form.volume(DataEntity::Tags), 0);
        assert_eq!(form.selected(), catalog.mutual_entities("zendesk", "freshdesk"));

        let inputs = form.to_inputs();
        assert_eq!(inputs.avg_attachments_per_ticket, 0.5);
        assert_eq!(inputs.avg_attachment_size_mb, 2.0);
    }

    #[test]
    fn test_platform_change_resets_plan_and_selection() {
        let catalog = PlatformCatalog::global();
        let mut form = MigrationForm::new(catalog).unwrap();
        form.set_source_plan("suite_enterprise").unwrap();
        form.set_dest_plan("pro").unwrap();

        form.set_source("gorgias").unwrap();
        assert_eq!(form.source_plan(), "starter");
        assert_eq!(form.dest_plan(), "pro");
        assert_eq!(form.selected(), catalog.mutual_entities("gorgias", "freshdesk"));

        form.set_destination("HubSpot").unwrap();
        assert_eq!(form.destination(), "hubspot");
        assert_eq!(form.dest_plan(), "free");
    }

    #[test]
    fn test_unknown_plan_rejected() {
        let catalog = PlatformCatalog::global();
        let mut form = MigrationForm::new(catalog).unwrap();
        let err = form.set_source_plan("pro").unwrap_err();
        assert!(matches!(err, DeskshiftError::UnknownPlan { .. }));
        assert_eq!(form.source_plan(), "suite_team");
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let catalog = PlatformCatalog::global();
        assert!(MigrationForm::with_platforms(catalog, "kayako", "freshdesk").is_err());
    }

    #[test]
    fn test_toggle_entity_enforces_source_export() {
        let catalog = PlatformCatalog::global();
        let mut form = MigrationForm::with_platforms(catalog, "helpscout", "zendesk").unwrap();

        assert!(form.selected().contains(&DataEntity::Macros));
        assert!(!form.toggle_entity(DataEntity::Macros).unwrap());
        assert!(!form.selected().contains(&DataEntity::Macros));
        assert!(form.toggle_entity(DataEntity::Macros).unwrap());

        let err = form.toggle_entity(DataEntity::Organizations).unwrap_err();
        assert!(matches!(err, DeskshiftError::NotExportable { .. }));
    }

    #[test]
    fn test_set_selection_is_atomic() {
        let catalog = PlatformCatalog::global();
        let mut form = MigrationForm::with_platforms(catalog, "front", "zendesk").unwrap();
        let before = form.selected().to_vec();

        let result = form.set_selection(&[DataEntity::Tickets, DataEntity::Articles]);
        assert!(result.is_err());
        assert_eq!(form.selected(), before);

        form.set_selection(&[DataEntity::Users, DataEntity::Tickets]).unwrap();
        assert_eq!(form.selected(), [DataEntity::Users, DataEntity::Tickets]);
    }

    #[test]
    fn test_to_inputs_reflects_edits() {
        let catalog = PlatformCatalog::global();
        let mut form = MigrationForm::new(catalog).unwrap();
        form.set_volume(DataEntity::Tickets, 250_000);
        form.set_attachments(-1.0, 3.0);

        let inputs = form.to_inputs();
        assert_eq!(inputs.volume(DataEntity::Tickets), 250_000);
        assert_eq!(inputs.avg_attachments_per_ticket, 0.0);
        assert_eq!(inputs.avg_attachment_size_mb, 3.0);
        assert_eq!(inputs.selected_entities, form.selected());
    }
}
