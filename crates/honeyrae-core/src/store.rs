//! The entity store: the single source of truth for dispatch state.
//!
//! [`EntityStore`] owns the customer, employee, and service ticket
//! collections for the lifetime of the process. Each collection is a
//! `Vec` so insertion order doubles as collection order, which several
//! reports rely on for tie-breaking.
//!
//! The store performs no validation. Ticket writes are crate-private so
//! that [`MutationGateway`](crate::mutation::MutationGateway) is the only
//! writer of the ticket collection.

use honeyrae_types::{Customer, Employee, ServiceTicket, TicketId};

/// In-memory customers, employees, and service tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    /// Customers in insertion order.
    customers: Vec<Customer>,
    /// Employees in insertion order.
    employees: Vec<Employee>,
    /// Service tickets in insertion order.
    tickets: Vec<ServiceTicket>,
}

impl EntityStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
            employees: Vec::new(),
            tickets: Vec::new(),
        }
    }

    /// Build a store from fully-materialized collections.
    ///
    /// Ticket ids are taken as given. Callers seeding the store are
    /// responsible for keeping them unique.
    pub const fn from_parts(
        customers: Vec<Customer>,
        employees: Vec<Employee>,
        tickets: Vec<ServiceTicket>,
    ) -> Self {
        Self {
            customers,
            employees,
            tickets,
        }
    }

    /// All customers, in collection order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All employees, in collection order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All service tickets, in collection order.
    pub fn tickets(&self) -> &[ServiceTicket] {
        &self.tickets
    }

    /// Mutable access to the ticket collection.
    pub(crate) const fn tickets_mut(&mut self) -> &mut Vec<ServiceTicket> {
        &mut self.tickets
    }

    /// The id the next created ticket receives.
    ///
    /// `max(existing ids) + 1`, or `1` when there are no tickets.
    /// Returns `None` only if the increment would overflow.
    pub fn next_ticket_id(&self) -> Option<TicketId> {
        self.tickets
            .iter()
            .map(|ticket| ticket.id.into_inner())
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
            .map(TicketId::new)
    }
}
