//! Service ticket REST API for the Honey Rae dispatch core.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Ticket endpoints** for listing, reading, creating, replacing, and
//!   deleting service tickets
//! - **Report endpoints** for the emergency queue, unassigned work,
//!   completed and prioritized tickets, inactive customers, available
//!   employees, an employee's customers, and employee of the month
//! - **Minimal HTML page** (`GET /`) with collection sizes and links
//!
//! # Architecture
//!
//! Handlers are thin: they parse the path, take the store lock, call one
//! operation on [`QueryEngine`](honeyrae_core::QueryEngine) or
//! [`MutationGateway`](honeyrae_core::MutationGateway), and map
//! [`CoreError`](honeyrae_core::CoreError) to a status code through
//! [`ApiError`](error::ApiError).

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod tickets;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
