use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::hotel::reservation::{Reservation, ReservationState};
use crate::domain::utils::id::ReservationId;

new_key_type! {
    pub struct ReservationKey;
}

/// Append-only reservation history.
///
/// Nothing is ever removed, so iteration follows creation order.
#[derive(Debug)]
pub struct ReservationStore {
    /// Reservation Storage.
    slots: SlotMap<ReservationKey, Reservation>,

    /// Index lookup ReservationKey using the public reservation id.
    id_index: HashMap<ReservationId, ReservationKey>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self { slots: SlotMap::with_key(), id_index: HashMap::new() }
    }

    /// Adds a reservation to the history.
    ///
    /// # Returns
    /// Returns the ReservationKey (internal key for the ReservationStore).
    pub fn add(&mut self, reservation: Reservation) -> ReservationKey {
        let id = reservation.id();
        let key = self.slots.insert(reservation);
        self.id_index.insert(id, key);

        key
    }

    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        let key = self.id_index.get(&id)?;
        self.slots.get(*key)
    }

    pub(crate) fn get_mut(&mut self, id: ReservationId) -> Option<&mut Reservation> {
        let key = self.id_index.get(&id)?;
        self.slots.get_mut(*key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.slots.values()
    }

    /// Copies of all reservations, optionally only those in `state`.
    pub fn list(&self, state: Option<ReservationState>) -> Vec<Reservation> {
        self.iter()
            .filter(|reservation| state.is_none_or(|state| reservation.state() == state))
            .cloned()
            .collect()
    }
}
