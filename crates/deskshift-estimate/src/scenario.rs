//! Confidence scenarios.

/// Efficiency of the best-case scenario.
pub const OPTIMISTIC_EFFICIENCY: f64 = 0.95;

/// Efficiency of the worst-case scenario.
pub const CONSERVATIVE_EFFICIENCY: f64 = 0.60;

/// Confidence scenario applied to the theoretical throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Best-case API behavior.
    Optimistic,
    /// Derated by the platforms' declared buffers.
    Likely,
    /// Worst-case API behavior.
    Conservative,
}

impl Scenario {
    /// Every scenario, fastest first.
    pub const ALL: [Self; 3] = [Self::Optimistic, Self::Likely, Self::Conservative];

    /// Returns the fraction of theoretical throughput achieved.
    ///
    /// The likely scenario uses `1 - min(source_buffer, destination_buffer)`;
    /// the other two are fixed.
    #[must_use]
    pub fn efficiency(&self, source_buffer: f64, destination_buffer: f64) -> f64 {
        match self {
            Self::Optimistic => OPTIMISTIC_EFFICIENCY,
            Self::Likely => 1.0 - source_buffer.min(destination_buffer),
            Self::Conservative => CONSERVATIVE_EFFICIENCY,
        }
    }

    /// Returns the multiplier applied to attachment transfer time.
    #[must_use]
    pub const fn attachment_factor(&self) -> f64 {
        match self {
            Self::Optimistic => 0.9,
            Self::Likely => 1.0,
            Self::Conservative => 1.3,
        }
    }

    /// Returns the scenario as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Likely => "likely",
            Self::Conservative => "conservative",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_likely_uses_smaller_buffer() {
        assert_relative_eq!(Scenario::Likely.efficiency(0.15, 0.20), 0.85);
        assert_relative_eq!(Scenario::Likely.efficiency(0.25, 0.05), 0.95);
    }

    #[test]
    fn test_fixed_scenarios_ignore_buffers() {
        assert_relative_eq!(Scenario::Optimistic.efficiency(0.0, 0.9), 0.95);
        assert_relative_eq!(Scenario::Conservative.efficiency(0.0, 0.9), 0.60);
    }

    #[test]
    fn test_attachment_factors() {
        assert_relative_eq!(Scenario::Optimistic.attachment_factor(), 0.9);
        assert_relative_eq!(Scenario::Likely.attachment_factor(), 1.0);
        assert_relative_eq!(Scenario::Conservative.attachment_factor(), 1.3);
    }
}
