//! Helpdesk platform definitions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::DataEntity;

/// Throughput ceiling of one pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Human-readable tier name (e.g., "Suite Growth").
    pub label: String,
    /// General API request budget per minute.
    pub requests_per_minute: u32,
    /// Dedicated ceiling for record creation, when the platform has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_ticket_limit: Option<u32>,
    /// Dedicated ceiling for bulk export calls, when the platform has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_limit: Option<u32>,
}

impl PlanLimits {
    /// Creates plan limits with only a request budget.
    #[must_use]
    pub fn new(label: impl Into<String>, requests_per_minute: u32) -> Self {
        Self {
            label: label.into(),
            requests_per_minute,
            create_ticket_limit: None,
            export_limit: None,
        }
    }

    /// Sets the record creation ceiling.
    #[must_use]
    pub const fn with_create_ticket_limit(mut self, limit: u32) -> Self {
        self.create_ticket_limit = Some(limit);
        self
    }

    /// Sets the bulk export ceiling.
    #[must_use]
    pub const fn with_export_limit(mut self, limit: u32) -> Self {
        self.export_limit = Some(limit);
        self
    }

    /// Export calls per minute available when this plan is the source.
    ///
    /// Resolves to `export_limit`, falling back to `requests_per_minute`
    /// when the plan has no dedicated export ceiling.
    #[must_use]
    pub fn effective_export_limit(&self) -> u32 {
        self.export_limit.unwrap_or(self.requests_per_minute)
    }

    /// Create calls per minute available when this plan is the destination.
    ///
    /// Resolves to `create_ticket_limit`, falling back to
    /// `requests_per_minute` when the plan has no dedicated creation ceiling.
    #[must_use]
    pub fn effective_import_limit(&self) -> u32 {
        self.create_ticket_limit.unwrap_or(self.requests_per_minute)
    }
}

/// A plan key paired with its limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTier {
    /// Plan key referenced by calculator inputs (e.g., "suite_growth").
    pub key: String,
    /// Limits of the plan.
    #[serde(flatten)]
    pub limits: PlanLimits,
}

impl PlanTier {
    /// Creates a new plan tier.
    #[must_use]
    pub fn new(key: impl Into<String>, limits: PlanLimits) -> Self {
        Self {
            key: key.into(),
            limits,
        }
    }
}

/// Entities a platform can export and import through its API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Entities that can be read out in bulk.
    pub export: BTreeSet<DataEntity>,
    /// Entities that can be created through the API.
    pub import: BTreeSet<DataEntity>,
}

impl Capabilities {
    /// Creates a capability set from export and import lists.
    #[must_use]
    pub fn new(
        export: impl IntoIterator<Item = DataEntity>,
        import: impl IntoIterator<Item = DataEntity>,
    ) -> Self {
        Self {
            export: export.into_iter().collect(),
            import: import.into_iter().collect(),
        }
    }
}

/// API shape values that drive throughput.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Records written per create call when this platform is the destination.
    pub batch_size: u32,
    /// Records fetched per export call when this platform is the source.
    pub export_batch_size: u32,
    /// Cost factor applied to ticket creation on this platform.
    pub complexity_multiplier: f64,
}

/// Size and variance limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Largest single attachment accepted, in MB.
    pub max_attachment_size_mb: f64,
    /// Declared throughput variance margin, in `[0, 1)`.
    pub throughput_buffer: f64,
}

/// A helpdesk platform and its published API behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCapability {
    /// Unique identifier (e.g., "zendesk").
    id: String,
    /// Display name (e.g., "Zendesk Support").
    name: String,
    /// Plan tiers in declared order; the first one is the default.
    plans: Vec<PlanTier>,
    /// Export and import capability sets.
    capabilities: Capabilities,
    /// Batch and complexity values.
    features: Features,
    /// Attachment and variance limits.
    limits: Limits,
}

impl PlatformCapability {
    /// Creates a new platform definition.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        plans: Vec<PlanTier>,
        capabilities: Capabilities,
        features: Features,
        limits: Limits,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            plans,
            capabilities,
            features,
            limits,
        }
    }

    /// Returns the platform identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the plan tiers in declared order.
    #[must_use]
    pub fn plans(&self) -> &[PlanTier] {
        &self.plans
    }

    /// Looks up the limits of a plan by key.
    #[must_use]
    pub fn plan(&self, key: &str) -> Option<&PlanLimits> {
        self.plans
            .iter()
            .find(|tier| tier.key == key)
            .map(|tier| &tier.limits)
    }

    /// Returns the first declared plan tier.
    #[must_use]
    pub fn first_plan(&self) -> Option<&PlanTier> {
        self.plans.first()
    }

    /// Returns the plan keys in declared order.
    pub fn plan_keys(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|tier| tier.key.as_str())
    }

    /// Returns the capability sets.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the batch and complexity values.
    #[must_use]
    pub const fn features(&self) -> &Features {
        &self.features
    }

    /// Returns the attachment and variance limits.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns true if the platform can export the entity.
    #[must_use]
    pub fn can_export(&self, entity: DataEntity) -> bool {
        self.capabilities.export.contains(&entity)
    }

    /// Returns true if the platform can import the entity.
    #[must_use]
    pub fn can_import(&self, entity: DataEntity) -> bool {
        self.capabilities.import.contains(&entity)
    }
}

impl std::fmt::Display for PlatformCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_platform() -> PlatformCapability {
        PlatformCapability::new(
            "acme",
            "Acme Desk",
            vec![
                PlanTier::new("basic", PlanLimits::new("Basic", 100).with_export_limit(20)),
                PlanTier::new(
                    "pro",
                    PlanLimits::new("Pro", 400).with_create_ticket_limit(160),
                ),
            ],
            Capabilities::new(
                [DataEntity::Tickets, DataEntity::Users, DataEntity::Macros],
                [DataEntity::Tickets, DataEntity::Users],
            ),
            Features {
                batch_size: 1,
                export_batch_size: 30,
                complexity_multiplier: 1.5,
            },
            Limits {
                max_attachment_size_mb: 20.0,
                throughput_buffer: 0.1,
            },
        )
    }

    #[test]
    fn test_effective_limits_fall_back_to_request_budget() {
        let plain = PlanLimits::new("Plain", 250);
        assert_eq!(plain.effective_export_limit(), 250);
        assert_eq!(plain.effective_import_limit(), 250);

        let dedicated = PlanLimits::new("Dedicated", 400)
            .with_export_limit(10)
            .with_create_ticket_limit(160);
        assert_eq!(dedicated.effective_export_limit(), 10);
        assert_eq!(dedicated.effective_import_limit(), 160);
    }

    #[test]
    fn test_explicit_zero_limit_is_not_a_fallback() {
        let zero = PlanLimits::new("Zero", 400).with_export_limit(0);
        assert_eq!(zero.effective_export_limit(), 0);
    }

    #[test]
    fn test_plan_lookup_keeps_declared_order() {
        let platform = create_test_platform();
        assert_eq!(platform.first_plan().unwrap().key, "basic");
        assert_eq!(platform.plan_keys().collect::<Vec<_>>(), vec!["basic", "pro"]);
        assert_eq!(platform.plan("pro").unwrap().label, "Pro");
        assert!(platform.plan("enterprise").is_none());
    }

    #[test]
    fn test_capability_checks() {
        let platform = create_test_platform();
        assert!(platform.can_export(DataEntity::Macros));
        assert!(!platform.can_import(DataEntity::Macros));
        assert!(platform.can_import(DataEntity::Tickets));
    }

    #[test]
    fn test_plan_tier_json_is_flat() {
        let tier: PlanTier = serde_json::from_str(
            r#"{"key":"growth","label":"Growth","requests_per_minute":200,"create_ticket_limit":80}"#,
        )
        .unwrap();
        assert_eq!(tier.key, "growth");
        assert_eq!(tier.limits.create_ticket_limit, Some(80));
        assert_eq!(tier.limits.export_limit, None);
    }
}
