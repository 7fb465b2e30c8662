//! Enumeration types for the service dispatch domain.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Ticket status
// ---------------------------------------------------------------------------

/// Lifecycle position of a service ticket.
///
/// Never stored. It is derived from two fields of
/// [`ServiceTicket`](crate::ServiceTicket): `date_completed` decides
/// open versus completed, and `employee_id` decides assignment for an
/// open ticket. The emergency flag is orthogonal and not part of the
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TicketStatus {
    /// Not completed and no employee assigned.
    OpenUnassigned,
    /// Not completed, an employee is assigned.
    OpenAssigned,
    /// A completion timestamp is present.
    Completed,
}

impl TicketStatus {
    /// Whether this status represents work that is still outstanding.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::OpenUnassigned | Self::OpenAssigned)
    }
}

impl core::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::OpenUnassigned => "open (unassigned)",
            Self::OpenAssigned => "open (assigned)",
            Self::Completed => "completed",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Entity kind
// ---------------------------------------------------------------------------

/// The three entity collections held by the store.
///
/// Used to label lookup failures so the caller can tell which
/// collection was searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EntityKind {
    /// A customer record.
    Customer,
    /// An employee record.
    Employee,
    /// A service ticket.
    ServiceTicket,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::ServiceTicket => "service ticket",
        };
        f.write_str(label)
    }
}
