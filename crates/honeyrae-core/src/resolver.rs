//! Relationship resolution between tickets and the entities they reference.
//!
//! Lookups are linear scans over the borrowed store. That is fine at the
//! scale the dispatch service runs at. Id-keyed indices would replace the
//! scans if the collections ever grow large.

use honeyrae_types::{Customer, Employee, ServiceTicket, TicketDetail};

use crate::store::EntityStore;

/// Resolves the many-to-one relations of a service ticket.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a EntityStore,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the given store.
    pub const fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// The employee assigned to `ticket`.
    ///
    /// `None` when the ticket is unassigned or its `employee_id` matches
    /// no employee.
    pub fn employee_of(&self, ticket: &ServiceTicket) -> Option<&'a Employee> {
        let employee_id = ticket.employee_id?;
        self.store
            .employees()
            .iter()
            .find(|employee| employee.id == employee_id)
    }

    /// The customer who requested `ticket`, if the reference resolves.
    pub fn customer_of(&self, ticket: &ServiceTicket) -> Option<&'a Customer> {
        self.store
            .customers()
            .iter()
            .find(|customer| customer.id == ticket.customer_id)
    }

    /// Build the read-time view of `ticket` with its employee attached.
    pub fn detail(&self, ticket: &ServiceTicket) -> TicketDetail {
        TicketDetail {
            ticket: ticket.clone(),
            employee: self.employee_of(ticket).cloned(),
        }
    }
}
