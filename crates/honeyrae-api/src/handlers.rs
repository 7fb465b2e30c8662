//! Read-only REST endpoint handlers.
//!
//! Every handler takes the store's read guard, runs one
//! [`QueryEngine`](honeyrae_core::QueryEngine) operation, and serializes
//! the result before the guard is released. Lists are returned as bare
//! JSON arrays.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/servicetickets` | All tickets |
//! | `GET` | `/servicetickets/{id}` | One ticket with its employee |
//! | `GET` | `/servicetickets/emergency` | Open emergency tickets |
//! | `GET` | `/servicetickets/unassigned` | Tickets without an employee |
//! | `GET` | `/completedtickets` | Completed tickets, oldest first |
//! | `GET` | `/prioritizedtickets` | Open tickets in work order |
//! | `GET` | `/employees` | All employees |
//! | `GET` | `/employees/{id}` | One employee |
//! | `GET` | `/employees/available` | Employees with no open ticket |
//! | `GET` | `/employees/{id}/customers` | Customers an employee has served |
//! | `GET` | `/employeeofthemonth` | Most completions in the last month |
//! | `GET` | `/customers` | All customers |
//! | `GET` | `/customers/{id}` | One customer |
//! | `GET` | `/customers/inactivecustomers` | Customers idle for a year |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use honeyrae_types::{CustomerId, EmployeeId, TicketId};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing collection sizes and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let customer_count = store.customers().len();
    let employee_count = store.employees().len();
    let ticket_count = store.tickets().len();
    let open_count = store.tickets().iter().filter(|t| t.is_open()).count();
    drop(store);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Honey Rae Dispatch</title>
    <style>
        body {{ font-family: system-ui, sans-serif; padding: 2rem; max-width: 760px; margin: 0 auto; }}
        .metric {{ display: inline-block; border: 1px solid #ccc; border-radius: 6px; padding: 0.75rem 1.25rem; margin: 0.25rem; }}
        .metric .value {{ font-size: 1.5rem; font-weight: bold; }}
        li::before {{ content: "GET "; font-weight: bold; }}
        ul {{ list-style: none; padding: 0; }}
    </style>
</head>
<body>
    <h1>Honey Rae Dispatch</h1>
    <div>
        <div class="metric"><div>Customers</div><div class="value">{customer_count}</div></div>
        <div class="metric"><div>Employees</div><div class="value">{employee_count}</div></div>
        <div class="metric"><div>Tickets</div><div class="value">{ticket_count}</div></div>
        <div class="metric"><div>Open</div><div class="value">{open_count}</div></div>
    </div>
    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/servicetickets">/servicetickets</a></li>
        <li><a href="/servicetickets/emergency">/servicetickets/emergency</a></li>
        <li><a href="/servicetickets/unassigned">/servicetickets/unassigned</a></li>
        <li><a href="/completedtickets">/completedtickets</a></li>
        <li><a href="/prioritizedtickets">/prioritizedtickets</a></li>
        <li><a href="/employees">/employees</a></li>
        <li><a href="/employees/available">/employees/available</a></li>
        <li><a href="/employeeofthemonth">/employeeofthemonth</a></li>
        <li><a href="/customers">/customers</a></li>
        <li><a href="/customers/inactivecustomers">/customers/inactivecustomers</a></li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Service tickets
// ---------------------------------------------------------------------------

/// List every service ticket in collection order.
pub async fn list_tickets(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).tickets())
}

/// Return one ticket with its assigned employee attached.
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = TicketId::new(parse_id(&id_str)?);
    let store = state.store.read().await;
    let detail = state.queries(&store).ticket(id)?;
    to_json(&detail)
}

/// Open tickets flagged as emergencies.
pub async fn emergency_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).emergency_tickets())
}

/// Tickets with no employee assigned.
pub async fn unassigned_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).unassigned_tickets())
}

/// Completed tickets ordered by completion time.
pub async fn completed_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).completed_tickets())
}

/// Open tickets, emergencies first, then unassigned first.
pub async fn prioritized_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).prioritized_tickets())
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

/// List every employee.
pub async fn list_employees(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).employees())
}

/// Return one employee.
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = EmployeeId::new(parse_id(&id_str)?);
    let store = state.store.read().await;
    to_json(state.queries(&store).employee(id)?)
}

/// Employees with no open ticket assigned to them.
pub async fn available_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).available_employees())
}

/// Distinct customers who have had a ticket assigned to the employee.
pub async fn employee_customers(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = EmployeeId::new(parse_id(&id_str)?);
    let store = state.store.read().await;
    to_json(&state.queries(&store).employee_customers(id)?)
}

/// The employee with the most recent completions, or `null` with no staff.
pub async fn employee_of_the_month(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let now = state.now();
    let store = state.store.read().await;
    to_json(&state.queries(&store).employee_of_the_month(now))
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

/// List every customer.
pub async fn list_customers(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    to_json(&state.queries(&store).customers())
}

/// Return one customer.
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = CustomerId::new(parse_id(&id_str)?);
    let store = state.store.read().await;
    to_json(state.queries(&store).customer(id)?)
}

/// Customers with no completed ticket inside the inactivity window.
pub async fn inactive_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let now = state.now();
    let store = state.store.read().await;
    to_json(&state.queries(&store).inactive_customers(now))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an integer path id, returning an [`ApiError`] on failure.
pub(crate) fn parse_id(s: &str) -> Result<i64, ApiError> {
    s.parse::<i64>()
        .map_err(|e| ApiError::InvalidId(format!("{s}: {e}")))
}

/// Serialize a borrowed query result while the read guard is still held.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Json<Value>, ApiError> {
    Ok(Json(serde_json::to_value(value)?))
}
