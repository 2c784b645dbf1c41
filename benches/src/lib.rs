//! Benchmark fixtures for deskshift.

use deskshift_lib::{CalculatorInputs, DataEntity, PlatformCatalog};

/// Workload size used by the benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// A few thousand tickets.
    Small,
    /// Tens of thousands of tickets.
    Medium,
    /// Hundreds of thousands of tickets and heavy attachments.
    Large,
}

impl Workload {
    /// Every workload, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the workload name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Returns the ticket volume of the workload.
    #[must_use]
    pub const fn tickets(&self) -> u64 {
        match self {
            Self::Small => 5_000,
            Self::Medium => 40_000,
            Self::Large => 400_000,
        }
    }

    /// Builds a request for a platform pair with every exportable entity
    /// selected, using the first plan of each platform.
    ///
    /// Returns `None` if either platform is unknown.
    #[must_use]
    pub fn inputs(
        &self,
        catalog: &PlatformCatalog,
        source: &str,
        destination: &str,
    ) -> Option<CalculatorInputs> {
        let src = catalog.get(source)?;
        let dst = catalog.get(destination)?;
        let tickets = self.tickets();

        let mut inputs = CalculatorInputs::new(
            src.id(),
            src.first_plan()?.key.as_str(),
            dst.id(),
            dst.first_plan()?.key.as_str(),
        )
        .with_attachments(0.5, 2.0);
        for entity in DataEntity::ALL {
            if src.can_export(entity) {
                let volume = match entity {
                    DataEntity::Tickets => tickets,
                    DataEntity::Users => tickets / 2,
                    DataEntity::Organizations => tickets / 100,
                    _ => 50,
                };
                inputs = inputs.with_entity(entity, volume);
            }
        }
        Some(inputs)
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns a request for every ordered platform pair in the catalog.
#[must_use]
pub fn all_pairs(catalog: &PlatformCatalog, workload: Workload) -> Vec<CalculatorInputs> {
    let mut pairs = Vec::new();
    for src in catalog.all() {
        for dst in catalog.all() {
            if let Some(inputs) = workload.inputs(catalog, src.id(), dst.id()) {
                pairs.push(inputs);
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_cover_catalog() {
        let catalog = PlatformCatalog::global();
        let pairs = all_pairs(catalog, Workload::Small);
        assert_eq!(pairs.len(), catalog.len() * catalog.len());
        assert!(pairs.iter().all(|p| !p.selected_entities.is_empty()));
    }

    #[test]
    fn test_unknown_platform() {
        let catalog = PlatformCatalog::global();
        assert!(Workload::Small.inputs(catalog, "zendesk", "nowhere").is_none());
    }
}
