//! Core entity structs: customers, employees, and service tickets.
//!
//! Field names serialize in camelCase (`customerId`, `dateCompleted`)
//! because that is the wire format existing clients of the dispatch API
//! already speak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::TicketStatus;
use crate::ids::{CustomerId, EmployeeId, TicketId};

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

/// A customer who requests service. Read-only once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Customer {
    /// Unique, immutable identifier.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Service address.
    pub address: String,
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// An employee who can be assigned to service tickets. Read-only once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Employee {
    /// Unique, immutable identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// ServiceTicket
// ---------------------------------------------------------------------------

/// A unit of requested service work.
///
/// Completion and assignment are not stored as a status field; both are
/// read off the optional fields (see [`ServiceTicket::status`]). An
/// absent or `null` `employeeId` means unassigned. No integer value is
/// treated as a sentinel, so `0` is an ordinary (if unknown) employee id.
///
/// The `id` defaults to `0` when a payload omits it. The mutation layer
/// overwrites it on create, and compares it against the path id on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ServiceTicket {
    /// Identifier, unique within the ticket collection.
    #[serde(default)]
    pub id: TicketId,
    /// The customer who requested the work.
    pub customer_id: CustomerId,
    /// The assigned employee, if any.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    /// Free-text description of the problem.
    #[serde(default)]
    pub description: String,
    /// Urgency flag, independent of assignment and completion.
    #[serde(default)]
    pub emergency: bool,
    /// When the work was finished. Absent while the ticket is open.
    #[serde(default)]
    pub date_completed: Option<DateTime<Utc>>,
}

impl ServiceTicket {
    /// Derive the lifecycle status from `date_completed` and `employee_id`.
    pub const fn status(&self) -> TicketStatus {
        match (self.date_completed.is_some(), self.employee_id.is_some()) {
            (true, _) => TicketStatus::Completed,
            (false, true) => TicketStatus::OpenAssigned,
            (false, false) => TicketStatus::OpenUnassigned,
        }
    }

    /// Whether the ticket has no completion timestamp.
    pub const fn is_open(&self) -> bool {
        self.status().is_open()
    }

    /// Whether the ticket carries a completion timestamp.
    pub const fn is_completed(&self) -> bool {
        self.date_completed.is_some()
    }

    /// Whether an employee is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }

    /// Whether the ticket is assigned to the given employee.
    pub fn is_assigned_to(&self, employee: EmployeeId) -> bool {
        self.employee_id == Some(employee)
    }

    /// Whether the ticket was completed at or after `cutoff`.
    pub fn completed_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.date_completed.is_some_and(|done| done >= cutoff)
    }
}

// ---------------------------------------------------------------------------
// Read-time views
// ---------------------------------------------------------------------------

/// A service ticket with its assigned employee joined in.
///
/// This is a view built when a single ticket is read. The `employee`
/// attachment is never written back into the ticket collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TicketDetail {
    /// The stored ticket.
    #[serde(flatten)]
    pub ticket: ServiceTicket,
    /// The employee referenced by `employeeId`, when it resolves.
    pub employee: Option<Employee>,
}

/// Acknowledgement returned after a ticket is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DeleteConfirmation {
    /// The id of the removed ticket.
    pub id: TicketId,
    /// Human-readable confirmation message.
    pub message: String,
}

impl DeleteConfirmation {
    /// Build the confirmation for a removed ticket.
    pub fn for_ticket(id: TicketId) -> Self {
        Self {
            id,
            message: format!("Service ticket with ID {id} has been deleted."),
        }
    }
}
