use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

use crate::domain::hotel::guest::Guest;
use crate::domain::hotel::room::Room;
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::HotelError;

/// Lifecycle state of a reservation.
///
/// `Active` is the state every reservation is created in. `CheckedOut` and
/// `Cancelled` are terminal: nothing moves a reservation out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationState {
    /// Booked, guest has not arrived yet.
    Active,

    /// Guest is in the house.
    CheckedIn,

    /// Stay finished, rooms released.
    CheckedOut,

    /// Booking withdrawn before check-out, rooms released.
    Cancelled,
}

impl ReservationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationState::CheckedOut | ReservationState::Cancelled)
    }

    /// Availability the reserved rooms take on when a reservation enters this state.
    pub fn room_availability(&self) -> Option<bool> {
        match self {
            ReservationState::Active => None,
            ReservationState::CheckedIn => Some(false),
            ReservationState::CheckedOut | ReservationState::Cancelled => Some(true),
        }
    }
}

impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReservationState::Active => "Active",
            ReservationState::CheckedIn => "CheckedIn",
            ReservationState::CheckedOut => "CheckedOut",
            ReservationState::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// Whole nights between the two dates, at least one.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(1)
}

/// A booking of one or more rooms for one guest.
///
/// The total price is fixed when the reservation is built, from the room rates
/// and dates of that moment, and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    guest: Arc<Guest>,
    rooms: Vec<RoomNumber>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    state: ReservationState,
    total_price: Decimal,
}

impl Reservation {
    /// Builds an `Active` reservation. Callers validate dates and rooms beforehand.
    pub(crate) fn new(id: ReservationId, guest: Arc<Guest>, rooms: &[&Room], check_in: NaiveDate, check_out: NaiveDate) -> Reservation {
        let nightly_total: Decimal = rooms.iter().map(|room| room.nightly_rate).sum();
        let total_price = nightly_total * Decimal::from(stay_nights(check_in, check_out));

        Reservation {
            id,
            guest,
            rooms: rooms.iter().map(|room| room.number).collect(),
            check_in,
            check_out,
            state: ReservationState::Active,
            total_price,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn guest(&self) -> &Guest {
        &self.guest
    }

    pub fn rooms(&self) -> &[RoomNumber] {
        &self.rooms
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn state(&self) -> ReservationState {
        self.state
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn nights(&self) -> i64 {
        stay_nights(self.check_in, self.check_out)
    }

    /// Checks whether the reservation may move to `to` on `today`, without changing anything.
    pub(crate) fn check_transition(&self, to: ReservationState, today: NaiveDate) -> Result<(), HotelError> {
        let invalid = HotelError::InvalidTransition { id: self.id, from: self.state, to };

        match (self.state, to) {
            (ReservationState::Active, ReservationState::CheckedIn) => {
                if today < self.check_in {
                    return Err(HotelError::CheckInTooEarly { id: self.id, check_in: self.check_in, today });
                }
                Ok(())
            }
            (ReservationState::CheckedIn, ReservationState::CheckedOut) => Ok(()),
            (ReservationState::Active | ReservationState::CheckedIn, ReservationState::Cancelled) => Ok(()),
            (ReservationState::CheckedOut, ReservationState::Cancelled) => Err(HotelError::AlreadyFinalized(self.id)),
            _ => Err(invalid),
        }
    }

    pub(crate) fn set_state(&mut self, state: ReservationState) {
        self.state = state;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation #{} - {} - {} room(s) - {} - Total: {:.2}",
            self.id,
            self.guest.name,
            self.rooms.len(),
            self.state,
            self.total_price
        )
    }
}
