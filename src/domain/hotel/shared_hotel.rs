use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::hotel::guest::Guest;
use crate::domain::hotel::hotel::Hotel;
use crate::domain::hotel::occupancy::OccupancyReport;
use crate::domain::hotel::reservation::{Reservation, ReservationState};
use crate::domain::hotel::room::{Room, RoomCategory};
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::HotelError;

/// Thread-safe handle to one hotel.
///
/// The whole aggregate sits behind a single lock, so the availability check
/// and the marking of rooms during creation happen as one step for every caller.
/// Clones share the same hotel.
#[derive(Debug, Clone)]
pub struct SharedHotel {
    inner: Arc<Mutex<Hotel>>,
}

impl SharedHotel {
    pub fn new(hotel: Hotel) -> Self {
        Self { inner: Arc::new(Mutex::new(hotel)) }
    }

    // Every operation validates before mutating, so a poisoned lock still guards a consistent hotel.
    fn lock(&self) -> MutexGuard<'_, Hotel> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the hotel.
    pub fn with_hotel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Hotel) -> R,
    {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn create_reservation(
        &self,
        guest: impl Into<Arc<Guest>>,
        room_numbers: &[RoomNumber],
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation, HotelError> {
        self.lock().create_reservation(guest, room_numbers, check_in, check_out)
    }

    pub fn check_in(&self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.lock().check_in(id)
    }

    pub fn check_out(&self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.lock().check_out(id)
    }

    pub fn cancel_reservation(&self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.lock().cancel_reservation(id)
    }

    pub fn find_reservation(&self, id: ReservationId) -> Result<Reservation, HotelError> {
        self.lock().find_reservation(id)
    }

    pub fn list_reservations(&self, state: Option<ReservationState>) -> Vec<Reservation> {
        self.lock().list_reservations(state)
    }

    pub fn list_available_rooms(&self, category: Option<RoomCategory>) -> Vec<Room> {
        self.lock().list_available_rooms(category)
    }

    pub fn find_room(&self, number: RoomNumber) -> Option<Room> {
        self.lock().find_room(number)
    }

    pub fn occupancy_report(&self) -> OccupancyReport {
        self.lock().occupancy_report()
    }
}
