//! Type-safe identifier wrappers around `i64`.
//!
//! Customers, employees, and service tickets are keyed by plain integers
//! on the wire. Wrapping each in its own newtype keeps a customer id from
//! being compared against an employee id by accident. Serialization is
//! transparent: every id is a bare JSON integer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around `i64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
            Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw integer identifier.
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a customer.
    CustomerId
}

define_id! {
    /// Unique identifier for an employee.
    EmployeeId
}

define_id! {
    /// Unique identifier for a service ticket, assigned on creation.
    TicketId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&TicketId::new(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));

        let restored: Result<EmployeeId, _> = serde_json::from_str("101");
        assert_eq!(restored.ok(), Some(EmployeeId::new(101)));
    }

    #[test]
    fn default_id_is_zero() {
        assert_eq!(TicketId::default().into_inner(), 0);
    }

    #[test]
    fn id_display_matches_inner() {
        let id = CustomerId::from(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(i64::from(id), 7);
    }
}
