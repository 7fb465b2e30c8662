//! Shared entity types for the Honey Rae service dispatch system.
//!
//! This crate is the single source of truth for the customer, employee,
//! and service ticket shapes used across the workspace. Types flow
//! downstream to `TypeScript` via `ts-rs` for the dispatch dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for entity identifiers
//! - [`enums`] -- Derived ticket status and entity kinds
//! - [`structs`] -- Entity structs and read-time views

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EntityKind, TicketStatus};
pub use ids::{CustomerId, EmployeeId, TicketId};
pub use structs::{Customer, DeleteConfirmation, Employee, ServiceTicket, TicketDetail};
