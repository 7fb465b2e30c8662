//! Read-only queries and derived reports over the entity store.
//!
//! Every report is computed fresh from the current collections on each
//! call. Nothing is cached: the state is small and changes between
//! calls. Results borrow from the store and keep collection order
//! unless the report defines its own ordering.
//!
//! # Reports
//!
//! | Report | Selection | Order |
//! |--------|-----------|-------|
//! | Emergency queue | emergency and open | collection |
//! | Unassigned | no `employee_id` | collection |
//! | Completed | `date_completed` present | completion time, ascending |
//! | Prioritized | open | emergency first, then unassigned first (stable) |
//! | Inactive customers | no completion inside the inactivity window | collection |
//! | Available employees | no open ticket assigned | collection |
//! | Employee's customers | at least one ticket with that employee | collection |
//! | Employee of the month | most completions inside the window | first maximum wins |

use std::cmp::Reverse;

use chrono::{DateTime, TimeDelta, Utc};
use honeyrae_types::{
    Customer, CustomerId, Employee, EmployeeId, EntityKind, ServiceTicket, TicketDetail, TicketId,
};
use tracing::debug;

use crate::config::ReportWindows;
use crate::error::CoreError;
use crate::resolver::Resolver;
use crate::store::EntityStore;

/// Computes lookups and reports against a borrowed [`EntityStore`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a EntityStore,
    windows: ReportWindows,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine with the default report windows.
    pub fn new(store: &'a EntityStore) -> Self {
        Self::with_windows(store, ReportWindows::default())
    }

    /// Create a query engine with explicit report windows.
    pub const fn with_windows(store: &'a EntityStore, windows: ReportWindows) -> Self {
        Self { store, windows }
    }

    const fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.store)
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// All service tickets, in collection order.
    pub fn tickets(&self) -> &'a [ServiceTicket] {
        self.store.tickets()
    }

    /// All employees, in collection order.
    pub fn employees(&self) -> &'a [Employee] {
        self.store.employees()
    }

    /// All customers, in collection order.
    pub fn customers(&self) -> &'a [Customer] {
        self.store.customers()
    }

    // -----------------------------------------------------------------------
    // Single-entity lookups
    // -----------------------------------------------------------------------

    /// One ticket with its assigned employee attached.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no ticket has this id.
    pub fn ticket(&self, id: TicketId) -> Result<TicketDetail, CoreError> {
        self.tickets()
            .iter()
            .find(|ticket| ticket.id == id)
            .map(|ticket| self.resolver().detail(ticket))
            .ok_or_else(|| CoreError::not_found(EntityKind::ServiceTicket, id))
    }

    /// One employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no employee has this id.
    pub fn employee(&self, id: EmployeeId) -> Result<&'a Employee, CoreError> {
        self.employees()
            .iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Employee, id))
    }

    /// One customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no customer has this id.
    pub fn customer(&self, id: CustomerId) -> Result<&'a Customer, CoreError> {
        self.customers()
            .iter()
            .find(|customer| customer.id == id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Customer, id))
    }

    // -----------------------------------------------------------------------
    // Ticket reports
    // -----------------------------------------------------------------------

    /// Open tickets flagged as emergencies.
    pub fn emergency_tickets(&self) -> Vec<&'a ServiceTicket> {
        self.tickets()
            .iter()
            .filter(|ticket| ticket.emergency && ticket.is_open())
            .collect()
    }

    /// Tickets with no employee assigned, whether open or completed.
    pub fn unassigned_tickets(&self) -> Vec<&'a ServiceTicket> {
        self.tickets()
            .iter()
            .filter(|ticket| !ticket.is_assigned())
            .collect()
    }

    /// Completed tickets, oldest completion first.
    pub fn completed_tickets(&self) -> Vec<&'a ServiceTicket> {
        let mut completed: Vec<&ServiceTicket> = self
            .tickets()
            .iter()
            .filter(|ticket| ticket.is_completed())
            .collect();
        completed.sort_by_key(|ticket| ticket.date_completed);
        completed
    }

    /// Open tickets in work order.
    ///
    /// Emergencies come first. Within each group, unassigned tickets come
    /// before assigned ones. The sort is stable, so tickets that tie on
    /// both keys keep their collection order.
    pub fn prioritized_tickets(&self) -> Vec<&'a ServiceTicket> {
        let mut open: Vec<&ServiceTicket> =
            self.tickets().iter().filter(|ticket| ticket.is_open()).collect();
        open.sort_by_key(|ticket| (Reverse(ticket.emergency), ticket.is_assigned()));
        open
    }

    // -----------------------------------------------------------------------
    // Customer and employee reports
    // -----------------------------------------------------------------------

    /// Customers with no ticket completed inside the inactivity window.
    ///
    /// Customers with no tickets at all are inactive too.
    pub fn inactive_customers(&self, now: DateTime<Utc>) -> Vec<&'a Customer> {
        let cutoff = window_start(now, self.windows.inactivity());
        self.customers()
            .iter()
            .filter(|customer| {
                !self.tickets().iter().any(|ticket| {
                    ticket.customer_id == customer.id && ticket.completed_since(cutoff)
                })
            })
            .collect()
    }

    /// Employees with no open ticket assigned to them.
    pub fn available_employees(&self) -> Vec<&'a Employee> {
        self.employees()
            .iter()
            .filter(|employee| {
                !self
                    .tickets()
                    .iter()
                    .any(|ticket| ticket.is_assigned_to(employee.id) && ticket.is_open())
            })
            .collect()
    }

    /// Distinct customers with at least one ticket assigned to `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the employee does not exist.
    pub fn employee_customers(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<&'a Customer>, CoreError> {
        let employee = self.employee(employee_id)?;
        let resolver = self.resolver();
        let served: Vec<CustomerId> = self
            .tickets()
            .iter()
            .filter(|ticket| ticket.is_assigned_to(employee.id))
            .filter_map(|ticket| resolver.customer_of(ticket))
            .map(|customer| customer.id)
            .collect();
        Ok(self
            .customers()
            .iter()
            .filter(|customer| served.contains(&customer.id))
            .collect())
    }

    /// The employee with the most completions inside the window.
    ///
    /// Ties go to the employee earliest in collection order, so an
    /// employee is returned even when nobody completed anything. `None`
    /// only when there are no employees.
    pub fn employee_of_the_month(&self, now: DateTime<Utc>) -> Option<&'a Employee> {
        let cutoff = window_start(now, self.windows.employee_of_month());
        let mut best: Option<(&Employee, usize)> = None;

        for employee in self.employees() {
            let completions = self
                .tickets()
                .iter()
                .filter(|ticket| {
                    ticket.is_assigned_to(employee.id) && ticket.completed_since(cutoff)
                })
                .count();

            if best.is_none_or(|(_, top)| completions > top) {
                best = Some((employee, completions));
            }
        }

        if let Some((employee, completions)) = best {
            debug!(employee_id = %employee.id, completions, "Employee of the month selected");
        }
        best.map(|(employee, _)| employee)
    }
}

/// Start of a trailing window ending at `now`.
///
/// Saturates at the earliest representable instant instead of overflowing.
fn window_start(now: DateTime<Utc>, window: TimeDelta) -> DateTime<Utc> {
    now.checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> Option<DateTime<Utc>> {
        now().checked_sub_signed(TimeDelta::days(days))
    }

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id: CustomerId::new(id),
            name: name.to_owned(),
            address: format!("{id} Main St"),
        }
    }

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            name: name.to_owned(),
        }
    }

    fn ticket(
        id: i64,
        customer: i64,
        employee: Option<i64>,
        emergency: bool,
        completed: Option<DateTime<Utc>>,
    ) -> ServiceTicket {
        ServiceTicket {
            id: TicketId::new(id),
            customer_id: CustomerId::new(customer),
            employee_id: employee.map(EmployeeId::new),
            description: format!("Ticket {id}"),
            emergency,
            date_completed: completed,
        }
    }

    fn ids(tickets: &[&ServiceTicket]) -> Vec<i64> {
        tickets.iter().map(|t| t.id.into_inner()).collect()
    }

    /// The five-ticket fixture with completions spread across time.
    fn store() -> EntityStore {
        EntityStore::from_parts(
            vec![
                customer(1, "John Doe"),
                customer(2, "Jane Smith"),
                customer(3, "Bob Johnson"),
            ],
            vec![employee(101, "Alice"), employee(102, "Bob")],
            vec![
                ticket(1, 1, Some(101), true, days_ago(2)),
                ticket(2, 2, None, true, None),
                ticket(3, 1, None, false, days_ago(10)),
                ticket(4, 3, Some(102), true, None),
                ticket(5, 2, Some(101), false, days_ago(400)),
            ],
        )
    }

    #[test]
    fn ticket_lookup_attaches_employee() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let detail = engine.ticket(TicketId::new(4));
        assert_eq!(
            detail.ok().and_then(|d| d.employee).map(|e| e.name),
            Some(String::from("Bob"))
        );
    }

    #[test]
    fn unassigned_ticket_lookup_has_no_employee() {
        let store = store();
        let detail = QueryEngine::new(&store).ticket(TicketId::new(2));
        assert!(matches!(detail, Ok(ref d) if d.employee.is_none()));
    }

    #[test]
    fn lookups_report_not_found_uniformly() {
        let store = store();
        let engine = QueryEngine::new(&store);
        assert_eq!(
            engine.ticket(TicketId::new(99)).err(),
            Some(CoreError::not_found(EntityKind::ServiceTicket, 99))
        );
        assert_eq!(
            engine.employee(EmployeeId::new(7)).err(),
            Some(CoreError::not_found(EntityKind::Employee, 7))
        );
        assert_eq!(
            engine.customer(CustomerId::new(4)).err(),
            Some(CoreError::not_found(EntityKind::Customer, 4))
        );
    }

    #[test]
    fn emergency_queue_excludes_completed() {
        let store = store();
        assert_eq!(ids(&QueryEngine::new(&store).emergency_tickets()), vec![2, 4]);
    }

    #[test]
    fn unassigned_includes_completed_tickets() {
        let store = store();
        assert_eq!(ids(&QueryEngine::new(&store).unassigned_tickets()), vec![2, 3]);
    }

    #[test]
    fn completed_tickets_sorted_oldest_first() {
        let store = store();
        assert_eq!(ids(&QueryEngine::new(&store).completed_tickets()), vec![5, 3, 1]);
    }

    #[test]
    fn prioritized_puts_emergencies_then_unassigned_first() {
        let store = EntityStore::from_parts(
            Vec::new(),
            Vec::new(),
            vec![
                ticket(1, 1, Some(101), false, None),
                ticket(2, 1, None, false, None),
                ticket(3, 1, Some(102), true, None),
                ticket(4, 1, None, true, None),
                ticket(5, 1, None, true, days_ago(1)),
            ],
        );
        assert_eq!(ids(&QueryEngine::new(&store).prioritized_tickets()), vec![4, 3, 2, 1]);
    }

    #[test]
    fn prioritized_sort_is_stable_for_ties() {
        let store = EntityStore::from_parts(
            Vec::new(),
            Vec::new(),
            vec![
                ticket(7, 1, None, true, None),
                ticket(3, 2, None, true, None),
                ticket(5, 3, None, true, None),
            ],
        );
        assert_eq!(ids(&QueryEngine::new(&store).prioritized_tickets()), vec![7, 3, 5]);
    }

    #[test]
    fn inactive_customers_use_trailing_year() {
        let store = store();
        let inactive = QueryEngine::new(&store).inactive_customers(now());
        let names: Vec<&str> = inactive.iter().map(|c| c.name.as_str()).collect();
        // Jane's only completion is 400 days old; Bob has none at all.
        assert_eq!(names, vec!["Jane Smith", "Bob Johnson"]);
    }

    #[test]
    fn inactivity_window_boundary_is_inclusive() {
        let store = EntityStore::from_parts(
            vec![customer(1, "Edge")],
            Vec::new(),
            vec![ticket(1, 1, None, false, days_ago(365))],
        );
        assert!(QueryEngine::new(&store).inactive_customers(now()).is_empty());
    }

    #[test]
    fn available_employees_have_no_open_assignment() {
        let store = store();
        let available = QueryEngine::new(&store).available_employees();
        let names: Vec<&str> = available.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn employee_customers_are_distinct() {
        let store = store();
        let engine = QueryEngine::new(&store);
        let customers = engine.employee_customers(EmployeeId::new(101)).unwrap();
        let names: Vec<String> = customers
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith"]);
    }

    #[test]
    fn employee_customers_for_unknown_employee_is_not_found() {
        let store = store();
        let result = QueryEngine::new(&store).employee_customers(EmployeeId::new(999));
        assert_eq!(result.err(), Some(CoreError::not_found(EntityKind::Employee, 999)));
    }

    #[test]
    fn employee_of_the_month_counts_recent_completions() {
        let store = EntityStore::from_parts(
            Vec::new(),
            vec![employee(101, "Alice"), employee(102, "Bob")],
            vec![
                ticket(1, 1, Some(101), false, days_ago(40)),
                ticket(2, 1, Some(102), false, days_ago(3)),
                ticket(3, 1, Some(101), false, None),
            ],
        );
        let winner = QueryEngine::new(&store).employee_of_the_month(now());
        assert_eq!(winner.map(|e| e.id), Some(EmployeeId::new(102)));
    }

    #[test]
    fn employee_customers_follow_collection_order_and_skip_dangling_refs() {
        let store = EntityStore::from_parts(
            vec![customer(1, "John Doe"), customer(2, "Jane Smith")],
            vec![employee(101, "Alice")],
            vec![
                ticket(1, 2, Some(101), false, None),
                ticket(2, 99, Some(101), false, None),
                ticket(3, 1, Some(101), false, days_ago(2)),
                ticket(4, 2, Some(101), true, None),
            ],
        );
        let engine = QueryEngine::new(&store);
        let ids: Vec<i64> = engine
            .employee_customers(EmployeeId::new(101))
            .unwrap()
            .iter()
            .map(|c| c.id.into_inner())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn employee_of_the_month_window_is_inclusive() {
        // 30 days and one second.
        let just_outside = now().checked_sub_signed(TimeDelta::seconds(2_592_001));
        let inside = EntityStore::from_parts(
            Vec::new(),
            vec![employee(101, "Alice"), employee(102, "Bob")],
            vec![ticket(1, 1, Some(102), false, days_ago(30))],
        );
        let outside = EntityStore::from_parts(
            Vec::new(),
            vec![employee(101, "Alice"), employee(102, "Bob")],
            vec![ticket(1, 1, Some(102), false, just_outside)],
        );

        let winner = QueryEngine::new(&inside).employee_of_the_month(now());
        assert_eq!(winner.map(|e| e.name.as_str()), Some("Bob"));
        let winner = QueryEngine::new(&outside).employee_of_the_month(now());
        assert_eq!(winner.map(|e| e.name.as_str()), Some("Alice"));
    }

    #[test]
    fn employee_of_the_month_tie_goes_to_first_employee() {
        let store = EntityStore::from_parts(
            Vec::new(),
            vec![employee(102, "Bob"), employee(101, "Alice")],
            Vec::new(),
        );
        let winner = QueryEngine::new(&store).employee_of_the_month(now());
        assert_eq!(winner.map(|e| e.name.as_str()), Some("Bob"));
    }

    #[test]
    fn employee_of_the_month_without_employees_is_none() {
        let store = EntityStore::new();
        assert!(QueryEngine::new(&store).employee_of_the_month(now()).is_none());
    }

    #[test]
    fn custom_windows_are_respected() {
        let store = store();
        let windows = ReportWindows {
            inactive_customer_days: 1,
            employee_of_month_days: 1,
        };
        let engine = QueryEngine::with_windows(&store, windows);
        // Nothing completed in the last day: every customer is inactive.
        assert_eq!(engine.inactive_customers(now()).len(), 3);
        assert_eq!(
            engine.employee_of_the_month(now()).map(|e| e.name.as_str()),
            Some("Alice")
        );
    }
}
