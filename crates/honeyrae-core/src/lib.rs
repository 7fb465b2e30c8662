//! Dispatch core for the Honey Rae service business.
//!
//! Customers request service, employees are assigned to service tickets,
//! and a set of reports is derived on demand from the in-memory state.
//! This crate holds that state and every rule that reads or writes it.
//! It knows nothing about HTTP. The `honeyrae-api` crate invokes it and
//! serializes the results.
//!
//! # Architecture
//!
//! ```text
//!   QueryEngine ──> Resolver ──┐
//!        │                     ├──> EntityStore
//!   MutationGateway ───────────┘
//! ```
//!
//! - [`store`] -- [`EntityStore`]: the three collections and id assignment.
//! - [`resolver`] -- [`Resolver`]: ticket to employee / customer joins.
//! - [`query`] -- [`QueryEngine`]: lookups and derived reports.
//! - [`mutation`] -- [`MutationGateway`]: create, update, delete tickets.
//! - [`clock`] -- [`Clock`]: evaluation time for trailing-window reports.
//! - [`config`] -- [`ServiceConfig`]: YAML configuration.
//! - [`seed`] -- the built-in starting fixture.
//!
//! # Usage
//!
//! ```
//! use chrono::Utc;
//! use honeyrae_core::{MutationGateway, QueryEngine, seed::seed_store};
//! use honeyrae_types::{CustomerId, ServiceTicket, TicketId};
//!
//! let mut store = seed_store(Utc::now());
//!
//! let created = MutationGateway::new(&mut store).create(ServiceTicket {
//!     id: TicketId::default(),
//!     customer_id: CustomerId::new(3),
//!     employee_id: None,
//!     description: String::from("Router keeps rebooting"),
//!     emergency: true,
//!     date_completed: None,
//! });
//! assert_eq!(created.map(|t| t.id), Ok(TicketId::new(6)));
//!
//! let engine = QueryEngine::new(&store);
//! assert_eq!(engine.emergency_tickets().len(), 3);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod mutation;
pub mod query;
pub mod resolver;
pub mod seed;
pub mod store;

// Re-export primary types at crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, ReportWindows, ServiceConfig};
pub use error::CoreError;
pub use mutation::MutationGateway;
pub use query::QueryEngine;
pub use resolver::Resolver;
pub use store::EntityStore;
