//! The mutation gateway: the only writer of the ticket collection.
//!
//! Every mutation either applies completely or is rejected with the store
//! untouched. No lifecycle transition is enforced. An update may write
//! any combination of assignment, completion, and emergency flag.
//!
//! Callers serving concurrent requests must hold one exclusive lock
//! around each mutation, so that id assignment in [`MutationGateway::create`]
//! cannot race another create.

use honeyrae_types::{DeleteConfirmation, EntityKind, ServiceTicket, TicketId};
use tracing::{info, warn};

use crate::error::CoreError;
use crate::store::EntityStore;

/// Validates and applies create, update, and delete on service tickets.
#[derive(Debug)]
pub struct MutationGateway<'a> {
    store: &'a mut EntityStore,
}

impl<'a> MutationGateway<'a> {
    /// Create a gateway holding exclusive access to the store.
    pub const fn new(store: &'a mut EntityStore) -> Self {
        Self { store }
    }

    /// Append a new ticket and return it as stored.
    ///
    /// Whatever `id` the payload carries is replaced by
    /// [`EntityStore::next_ticket_id`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdExhausted`] if the next id would overflow.
    pub fn create(&mut self, mut payload: ServiceTicket) -> Result<ServiceTicket, CoreError> {
        let id = self.store.next_ticket_id().ok_or(CoreError::IdExhausted)?;
        payload.id = id;
        self.store.tickets_mut().push(payload.clone());

        info!(
            ticket_id = %id,
            customer_id = %payload.customer_id,
            emergency = payload.emergency,
            "Service ticket created"
        );
        Ok(payload)
    }

    /// Remove the ticket with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no ticket has this id. The
    /// collection is unchanged in that case.
    pub fn delete(&mut self, id: TicketId) -> Result<DeleteConfirmation, CoreError> {
        let Some(index) = self.position(id) else {
            warn!(ticket_id = %id, "Delete rejected: ticket not found");
            return Err(CoreError::not_found(EntityKind::ServiceTicket, id));
        };

        self.store.tickets_mut().remove(index);
        info!(ticket_id = %id, "Service ticket deleted");
        Ok(DeleteConfirmation::for_ticket(id))
    }

    /// Replace the ticket at `id` wholesale with `payload`.
    ///
    /// This is a full replacement, not a field merge: optional fields
    /// missing from the payload become absent on the stored ticket.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no ticket has this id, checked
    /// first. Returns [`CoreError::IdMismatch`] if `payload.id` differs
    /// from `id`. The stored ticket is unchanged on either error.
    pub fn update(&mut self, id: TicketId, payload: ServiceTicket) -> Result<(), CoreError> {
        let Some(index) = self.position(id) else {
            warn!(ticket_id = %id, "Update rejected: ticket not found");
            return Err(CoreError::not_found(EntityKind::ServiceTicket, id));
        };

        if payload.id != id {
            warn!(ticket_id = %id, payload_id = %payload.id, "Update rejected: id mismatch");
            return Err(CoreError::IdMismatch {
                path: id,
                body: payload.id,
            });
        }

        let slot = self
            .store
            .tickets_mut()
            .get_mut(index)
            .ok_or_else(|| CoreError::not_found(EntityKind::ServiceTicket, id))?;
        *slot = payload;

        info!(ticket_id = %id, "Service ticket replaced");
        Ok(())
    }

    fn position(&self, id: TicketId) -> Option<usize> {
        self.store.tickets().iter().position(|ticket| ticket.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use honeyrae_types::{CustomerId, EmployeeId, TicketStatus};

    fn ticket(id: i64, employee: Option<i64>) -> ServiceTicket {
        ServiceTicket {
            id: TicketId::new(id),
            customer_id: CustomerId::new(1),
            employee_id: employee.map(EmployeeId::new),
            description: format!("Ticket {id}"),
            emergency: false,
            date_completed: None,
        }
    }

    fn store_with(ids: &[i64]) -> EntityStore {
        EntityStore::from_parts(
            Vec::new(),
            Vec::new(),
            ids.iter().map(|&id| ticket(id, None)).collect(),
        )
    }

    fn stored_ids(store: &EntityStore) -> Vec<i64> {
        store.tickets().iter().map(|t| t.id.into_inner()).collect()
    }

    #[test]
    fn create_assigns_next_id_and_ignores_payload_id() {
        let mut store = store_with(&[1, 2, 3, 4, 5]);
        let created = MutationGateway::new(&mut store).create(ticket(77, None));
        assert_eq!(created.map(|t| t.id), Ok(TicketId::new(6)));
        assert_eq!(stored_ids(&store), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn create_on_empty_store_starts_at_one() {
        let mut store = EntityStore::new();
        let created = MutationGateway::new(&mut store).create(ticket(0, None));
        assert_eq!(created.map(|t| t.id), Ok(TicketId::new(1)));
    }

    #[test]
    fn create_after_delete_of_max_reuses_nothing_existing() {
        let mut store = store_with(&[1, 2, 3]);
        let mut gateway = MutationGateway::new(&mut store);
        assert!(gateway.delete(TicketId::new(2)).is_ok());
        let created = gateway.create(ticket(0, None));
        assert_eq!(created.map(|t| t.id), Ok(TicketId::new(4)));
    }

    #[test]
    fn create_reports_exhausted_id_space() {
        let mut store = store_with(&[i64::MAX]);
        let result = MutationGateway::new(&mut store).create(ticket(0, None));
        assert_eq!(result, Err(CoreError::IdExhausted));
        assert_eq!(store.tickets().len(), 1);
    }

    #[test]
    fn delete_removes_and_confirms() {
        let mut store = store_with(&[1, 2, 3]);
        let confirmation = MutationGateway::new(&mut store).delete(TicketId::new(2));
        assert_eq!(
            confirmation.map(|c| c.message),
            Ok(String::from("Service ticket with ID 2 has been deleted."))
        );
        assert_eq!(stored_ids(&store), vec![1, 3]);
    }

    #[test]
    fn delete_missing_leaves_collection_unchanged() {
        let mut store = store_with(&[1, 2, 3]);
        let before = store.clone();
        let result = MutationGateway::new(&mut store).delete(TicketId::new(9));
        assert_eq!(
            result,
            Err(CoreError::not_found(EntityKind::ServiceTicket, 9))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn update_replaces_whole_ticket_in_place() {
        let mut store = store_with(&[1, 2, 3]);
        let mut replacement = ticket(2, Some(101));
        replacement.date_completed = Some(Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap());

        let result = MutationGateway::new(&mut store).update(TicketId::new(2), replacement.clone());
        assert_eq!(result, Ok(()));
        assert_eq!(stored_ids(&store), vec![1, 2, 3]);
        assert_eq!(store.tickets().get(1), Some(&replacement));
        assert_eq!(
            store.tickets().get(1).map(ServiceTicket::status),
            Some(TicketStatus::Completed)
        );
    }

    #[test]
    fn update_is_full_replace_not_merge() {
        let mut store = EntityStore::from_parts(Vec::new(), Vec::new(), vec![ticket(1, Some(101))]);
        let result = MutationGateway::new(&mut store).update(TicketId::new(1), ticket(1, None));
        assert_eq!(result, Ok(()));
        assert_eq!(store.tickets().first().and_then(|t| t.employee_id), None);
    }

    #[test]
    fn update_with_mismatched_id_is_rejected_without_change() {
        let mut store = store_with(&[1, 2]);
        let before = store.clone();
        let result = MutationGateway::new(&mut store).update(TicketId::new(1), ticket(2, Some(5)));
        assert_eq!(
            result,
            Err(CoreError::IdMismatch {
                path: TicketId::new(1),
                body: TicketId::new(2),
            })
        );
        assert_eq!(store, before);
    }

    #[test]
    fn update_missing_ticket_is_not_found_before_mismatch() {
        let mut store = store_with(&[1]);
        let result = MutationGateway::new(&mut store).update(TicketId::new(8), ticket(9, None));
        assert_eq!(
            result,
            Err(CoreError::not_found(EntityKind::ServiceTicket, 8))
        );
    }
}
