//! Structural checks applied to every loaded catalog.

use std::collections::HashSet;

use deskshift_types::PlatformCapability;

use crate::CatalogError;

/// Validates a list of platforms before it becomes a catalog.
pub(crate) fn validate(platforms: &[PlatformCapability]) -> Result<(), CatalogError> {
    if platforms.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids = HashSet::new();
    for platform in platforms {
        if !ids.insert(platform.id().to_lowercase()) {
            return Err(CatalogError::DuplicatePlatform(platform.id().to_string()));
        }
        validate_platform(platform)?;
    }

    Ok(())
}

fn validate_platform(platform: &PlatformCapability) -> Result<(), CatalogError> {
    let invalid = |field: &str, reason: &'static str| CatalogError::InvalidValue {
        platform: platform.id().to_string(),
        field: field.to_string(),
        reason,
    };

    if platform.plans().is_empty() {
        return Err(CatalogError::NoPlans(platform.id().to_string()));
    }

    let mut keys = HashSet::new();
    for tier in platform.plans() {
        if !keys.insert(tier.key.as_str()) {
            return Err(CatalogError::DuplicatePlan {
                platform: platform.id().to_string(),
                plan: tier.key.clone(),
            });
        }
        if tier.limits.requests_per_minute == 0 {
            return Err(invalid(
                &format!("plans.{}.requests_per_minute", tier.key),
                "must be positive",
            ));
        }
    }

    let features = platform.features();
    if features.batch_size == 0 {
        return Err(invalid("features.batch_size", "must be positive"));
    }
    if features.export_batch_size == 0 {
        return Err(invalid("features.export_batch_size", "must be positive"));
    }
    if !is_positive(features.complexity_multiplier) {
        return Err(invalid("features.complexity_multiplier", "must be positive"));
    }

    let limits = platform.limits();
    if !is_positive(limits.max_attachment_size_mb) {
        return Err(invalid("limits.max_attachment_size_mb", "must be positive"));
    }
    if !(0.0..1.0).contains(&limits.throughput_buffer) {
        return Err(invalid("limits.throughput_buffer", "must be in [0, 1)"));
    }

    Ok(())
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskshift_types::{Capabilities, DataEntity, Features, Limits, PlanLimits, PlanTier};

    fn platform_with(features: Features, limits: Limits, plans: Vec<PlanTier>) -> PlatformCapability {
        PlatformCapability::new(
            "acme",
            "Acme Desk",
            plans,
            Capabilities::new([DataEntity::Tickets], [DataEntity::Tickets]),
            features,
            limits,
        )
    }

    fn good_features() -> Features {
        Features {
            batch_size: 1,
            export_batch_size: 30,
            complexity_multiplier: 1.2,
        }
    }

    fn good_limits() -> Limits {
        Limits {
            max_attachment_size_mb: 20.0,
            throughput_buffer: 0.1,
        }
    }

    fn good_plans() -> Vec<PlanTier> {
        vec![PlanTier::new("basic", PlanLimits::new("Basic", 100))]
    }

    #[test]
    fn test_valid_platform_passes() {
        let platform = platform_with(good_features(), good_limits(), good_plans());
        assert!(validate(&[platform]).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(validate(&[]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_platform_rejected() {
        let platform = platform_with(good_features(), good_limits(), good_plans());
        let result = validate(&[platform.clone(), platform]);
        assert!(matches!(result, Err(CatalogError::DuplicatePlatform(id)) if id == "acme"));
    }

    #[test]
    fn test_plan_problems_rejected() {
        let none = platform_with(good_features(), good_limits(), Vec::new());
        assert!(matches!(validate(&[none]), Err(CatalogError::NoPlans(_))));

        let dup = platform_with(
            good_features(),
            good_limits(),
            vec![
                PlanTier::new("basic", PlanLimits::new("Basic", 100)),
                PlanTier::new("basic", PlanLimits::new("Basic again", 200)),
            ],
        );
        assert!(matches!(
            validate(&[dup]),
            Err(CatalogError::DuplicatePlan { plan, .. }) if plan == "basic"
        ));

        let zero = platform_with(
            good_features(),
            good_limits(),
            vec![PlanTier::new("free", PlanLimits::new("Free", 0))],
        );
        assert!(matches!(validate(&[zero]), Err(CatalogError::InvalidValue { .. })));
    }

    #[test]
    fn test_buffer_range_enforced() {
        let limits = Limits {
            max_attachment_size_mb: 20.0,
            throughput_buffer: 1.0,
        };
        let platform = platform_with(good_features(), limits, good_plans());
        let err = validate(&[platform]).unwrap_err();
        assert!(err.to_string().contains("throughput_buffer"));
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let features = Features {
            complexity_multiplier: 0.0,
            ..good_features()
        };
        let platform = platform_with(features, good_limits(), good_plans());
        assert!(validate(&[platform]).is_err());

        let nan = Features {
            complexity_multiplier: f64::NAN,
            ..good_features()
        };
        let platform = platform_with(nan, good_limits(), good_plans());
        assert!(validate(&[platform]).is_err());
    }
}
