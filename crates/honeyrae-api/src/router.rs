//! Axum router construction for the service ticket API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::tickets;

/// Build the complete Axum router.
///
/// Static segments such as `/servicetickets/emergency` take precedence
/// over the `{id}` capture at the same depth. The `/employee/...` paths
/// are aliases kept for clients of the legacy route names.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Service tickets
        .route(
            "/servicetickets",
            get(handlers::list_tickets).post(tickets::create_ticket),
        )
        .route("/servicetickets/emergency", get(handlers::emergency_tickets))
        .route("/servicetickets/unassigned", get(handlers::unassigned_tickets))
        .route(
            "/servicetickets/{id}",
            get(handlers::get_ticket)
                .put(tickets::update_ticket)
                .delete(tickets::delete_ticket),
        )
        .route("/completedtickets", get(handlers::completed_tickets))
        .route("/prioritizedtickets", get(handlers::prioritized_tickets))
        // Employees
        .route("/employees", get(handlers::list_employees))
        .route("/employees/available", get(handlers::available_employees))
        .route("/employees/{id}", get(handlers::get_employee))
        .route("/employees/{id}/customers", get(handlers::employee_customers))
        .route(
            "/employee/availableemployees",
            get(handlers::available_employees),
        )
        .route("/employee/{id}/customers", get(handlers::employee_customers))
        .route("/employeeofthemonth", get(handlers::employee_of_the_month))
        // Customers
        .route("/customers", get(handlers::list_customers))
        .route(
            "/customers/inactivecustomers",
            get(handlers::inactive_customers),
        )
        .route("/customers/{id}", get(handlers::get_customer))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
