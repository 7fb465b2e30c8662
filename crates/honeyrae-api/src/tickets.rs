//! Mutating REST handlers for service tickets.
//!
//! Each handler holds the store's write guard for the whole mutation, so
//! id assignment and position lookups never interleave with another
//! writer.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/servicetickets` | Create a ticket (id is assigned) |
//! | `PUT` | `/servicetickets/{id}` | Replace a ticket wholesale |
//! | `DELETE` | `/servicetickets/{id}` | Remove a ticket |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use honeyrae_core::MutationGateway;
use honeyrae_types::{ServiceTicket, TicketId};

use crate::error::ApiError;
use crate::handlers::parse_id;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /servicetickets
// ---------------------------------------------------------------------------

/// Create a ticket from the request body.
///
/// Any `id` in the body is ignored. Responds `201 Created` with the
/// stored ticket.
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ServiceTicket>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = state.store.write().await;
    let created = MutationGateway::new(&mut store).create(payload)?;
    drop(store);

    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// PUT /servicetickets/{id}
// ---------------------------------------------------------------------------

/// Replace the ticket at `id` with the request body.
///
/// `404` if the ticket does not exist, `400` if the body's `id` differs
/// from the path. Responds `200 OK` with an empty body on success.
pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(payload): Json<ServiceTicket>,
) -> Result<StatusCode, ApiError> {
    let id = TicketId::new(parse_id(&id_str)?);
    let mut store = state.store.write().await;
    MutationGateway::new(&mut store).update(id, payload)?;
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// DELETE /servicetickets/{id}
// ---------------------------------------------------------------------------

/// Remove the ticket at `id` and return a confirmation.
pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = TicketId::new(parse_id(&id_str)?);
    let mut store = state.store.write().await;
    let confirmation = MutationGateway::new(&mut store).delete(id)?;
    Ok(Json(confirmation))
}
