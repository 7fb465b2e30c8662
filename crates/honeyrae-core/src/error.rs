//! Error taxonomy for the dispatch core.
//!
//! Every single-entity lookup (ticket, employee, customer) reports a miss
//! as [`CoreError::NotFound`]. A lookup never silently returns nothing.
//! The only "absent" result in the core is the employee of the month over
//! an empty roster, which is an `Option` because it is not a failure.

use honeyrae_types::{EntityKind, TicketId};

/// Errors produced by the query engine and the mutation gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No entity with the given id exists in its collection.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Which collection was searched.
        entity: EntityKind,
        /// The id that did not match.
        id: i64,
    },

    /// An update named one ticket in the path and another in the body.
    #[error("path id {path} does not match payload id {body}")]
    IdMismatch {
        /// The id the caller addressed.
        path: TicketId,
        /// The id carried by the replacement ticket.
        body: TicketId,
    },

    /// The next ticket id would overflow `i64`.
    #[error("ticket id space exhausted")]
    IdExhausted,
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on any id type.
    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
