//! Built-in starting state for the dispatch service.
//!
//! Three customers, two employees, and five tickets. Tickets that start
//! out completed are stamped with the seeding instant, so they count as
//! recent for every report window.

use chrono::{DateTime, Utc};
use honeyrae_types::{Customer, CustomerId, Employee, EmployeeId, ServiceTicket, TicketId};

use crate::store::EntityStore;

/// Build the fixture store, with completed tickets finished at `now`.
pub fn seed_store(now: DateTime<Utc>) -> EntityStore {
    EntityStore::from_parts(customers(), employees(), tickets(now))
}

fn customers() -> Vec<Customer> {
    [
        (1, "John Doe", "123 Main St"),
        (2, "Jane Smith", "456 Oak Ave"),
        (3, "Bob Johnson", "789 Pine Rd"),
    ]
    .into_iter()
    .map(|(id, name, address)| Customer {
        id: CustomerId::new(id),
        name: name.to_owned(),
        address: address.to_owned(),
    })
    .collect()
}

fn employees() -> Vec<Employee> {
    [(101, "Alice"), (102, "Bob")]
        .into_iter()
        .map(|(id, name)| Employee {
            id: EmployeeId::new(id),
            name: name.to_owned(),
        })
        .collect()
}

fn tickets(now: DateTime<Utc>) -> Vec<ServiceTicket> {
    // (id, customer, employee, description, emergency, completed)
    [
        (1, 1, Some(101), "Issue with printer", true, true),
        (2, 2, None, "Network connectivity problem", true, false),
        (3, 1, None, "Software installation", false, true),
        (4, 3, Some(102), "Hardware replacement", true, false),
        (5, 2, Some(101), "Email configuration", false, true),
    ]
    .into_iter()
    .map(
        |(id, customer, employee, description, emergency, completed)| ServiceTicket {
            id: TicketId::new(id),
            customer_id: CustomerId::new(customer),
            employee_id: employee.map(EmployeeId::new),
            description: description.to_owned(),
            emergency,
            date_completed: completed.then_some(now),
        },
    )
    .collect()
}
