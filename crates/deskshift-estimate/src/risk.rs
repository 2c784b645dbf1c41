//! Risk classification.

use deskshift_types::RiskLevel;

/// Ticket volume above which a migration is high risk.
pub const HIGH_RISK_TICKETS: u64 = 100_000;

/// Attachment payload in MB above which a migration is high risk.
pub const HIGH_RISK_ATTACHMENT_MB: f64 = 50_000.0;

/// Ticket volume above which a migration is medium risk.
pub const MEDIUM_RISK_TICKETS: u64 = 50_000;

/// Manual task count above which a migration is medium risk.
pub const MEDIUM_RISK_MANUAL_TASKS: usize = 2;

/// Classifies a migration; the first matching tier wins.
#[must_use]
pub fn assess_risk(ticket_volume: u64, attachment_mb: f64, manual_tasks: usize) -> RiskLevel {
    if ticket_volume > HIGH_RISK_TICKETS || attachment_mb > HIGH_RISK_ATTACHMENT_MB {
        RiskLevel::High
    } else if manual_tasks > MEDIUM_RISK_MANUAL_TASKS || ticket_volume > MEDIUM_RISK_TICKETS {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
