//! Migratable helpdesk data entity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A kind of helpdesk object that can be moved between platforms.
///
/// The set is closed; platforms declare which of these they can export and
/// import through their public APIs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DataEntity {
    /// Tickets together with their conversations and attachments.
    Tickets,
    /// Agents and end users.
    Users,
    /// Companies grouping several users.
    Organizations,
    /// Agent teams or departments.
    Groups,
    /// Knowledge base articles.
    Articles,
    /// Canned responses.
    Macros,
    /// Event-driven business rules.
    Triggers,
    /// Time-based business rules.
    Automations,
    /// Ticket labels.
    Tags,
    /// Non-standard ticket or user fields.
    CustomFields,
    /// Ticket layouts presented per request type.
    TicketForms,
    /// Service level agreement policies.
    SlaPolicies,
}

impl DataEntity {
    /// Every entity, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Tickets,
        Self::Users,
        Self::Organizations,
        Self::Groups,
        Self::Articles,
        Self::Macros,
        Self::Triggers,
        Self::Automations,
        Self::Tags,
        Self::CustomFields,
        Self::TicketForms,
        Self::SlaPolicies,
    ];

    /// Returns the entity identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::Users => "users",
            Self::Organizations => "organizations",
            Self::Groups => "groups",
            Self::Articles => "articles",
            Self::Macros => "macros",
            Self::Triggers => "triggers",
            Self::Automations => "automations",
            Self::Tags => "tags",
            Self::CustomFields => "custom_fields",
            Self::TicketForms => "ticket_forms",
            Self::SlaPolicies => "sla_policies",
        }
    }

    /// Returns the human-readable label used in task lists.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tickets => "Tickets & Conversations",
            Self::Users => "Users (Agents & Customers)",
            Self::Organizations => "Organizations",
            Self::Groups => "Groups / Teams",
            Self::Articles => "Knowledge Base",
            Self::Macros => "Macros / Canned Responses",
            Self::Triggers => "Triggers",
            Self::Automations => "Automations",
            Self::Tags => "Tags",
            Self::CustomFields => "Custom Fields",
            Self::TicketForms => "Ticket Forms",
            Self::SlaPolicies => "SLA Policies",
        }
    }

    /// Returns a one-sentence description of the entity.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Tickets => {
                "Core support records including status, priority, comments, and file attachments."
            }
            Self::Users => "Profiles for both Support Agents and End-Users (Customers).",
            Self::Organizations => "Company profiles that group multiple users together.",
            Self::Groups => "Agent teams or departments (e.g., \"Sales\", \"Support\").",
            Self::Articles => "Public or private help center documentation and categories.",
            Self::Macros => "Pre-written responses used by agents to reply quickly.",
            Self::Triggers => "\"If-This-Then-That\" rules that run immediately on ticket updates.",
            Self::Automations => {
                "Time-based rules (e.g., \"Close ticket after 4 days of inactivity\")."
            }
            Self::Tags => "Labels attached to tickets for categorization and reporting.",
            Self::CustomFields => "Non-standard data fields added to tickets or user profiles.",
            Self::TicketForms => {
                "Different ticket layouts presented to customers based on request type."
            }
            Self::SlaPolicies => {
                "Service Level Agreement rules defining response/resolution deadlines."
            }
        }
    }

    /// Returns true for the ticket entity, which is costed as core data.
    #[must_use]
    pub const fn is_core_data(&self) -> bool {
        matches!(self, Self::Tickets)
    }
}

impl std::fmt::Display for DataEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataEntity {
    type Err = EntityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "tickets" | "ticket" => Ok(Self::Tickets),
            "users" | "user" => Ok(Self::Users),
            "organizations" | "organization" | "orgs" => Ok(Self::Organizations),
            "groups" | "group" | "teams" => Ok(Self::Groups),
            "articles" | "article" | "kb" => Ok(Self::Articles),
            "macros" | "macro" => Ok(Self::Macros),
            "triggers" | "trigger" => Ok(Self::Triggers),
            "automations" | "automation" => Ok(Self::Automations),
            "tags" | "tag" => Ok(Self::Tags),
            "custom_fields" | "custom_field" => Ok(Self::CustomFields),
            "ticket_forms" | "ticket_form" => Ok(Self::TicketForms),
            "sla_policies" | "sla_policy" | "sla" => Ok(Self::SlaPolicies),
            _ => Err(EntityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid entity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityParseError(String);

impl std::fmt::Display for EntityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid entity '{}', expected one of: tickets, users, organizations, groups, \
             articles, macros, triggers, automations, tags, custom_fields, ticket_forms, \
             sla_policies",
            self.0
        )
    }
}

impl std::error::Error for EntityParseError {}
