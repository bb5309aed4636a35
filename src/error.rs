use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::hotel::reservation::ReservationState;
use crate::domain::hotel::room::RoomCategory;
use crate::domain::utils::id::{ReservationId, RoomNumber};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse hotel configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to build hotel from configuration: {0}")]
    ConversionError(#[from] ConversionError),

    #[error(transparent)]
    Hotel(#[from] HotelError),
}

/// Failures while turning a `HotelDto` into a `Hotel`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unknown room category '{0}'")]
    UnknownRoomCategory(String),

    #[error("Invalid room number range {first}..={last}")]
    InvalidNumberRange { first: u32, last: u32 },

    #[error("Nightly rate {rate} for {category} must not be negative")]
    NegativeRate { category: RoomCategory, rate: Decimal },

    #[error("Room {0} is declared more than once")]
    DuplicateRoomNumber(RoomNumber),

    #[error("The room catalog is empty")]
    EmptyCatalog,
}

/// Rejections raised by the hotel service. None of them mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HotelError {
    #[error("Check-in date {check_in} must be before check-out date {check_out}")]
    InvalidDateRange { check_in: NaiveDate, check_out: NaiveDate },

    #[error("Check-in date {check_in} is in the past (today is {today})")]
    PastCheckIn { check_in: NaiveDate, today: NaiveDate },

    #[error("A reservation needs at least one room")]
    NoRoomsRequested,

    #[error("Room {0} not found")]
    RoomNotFound(RoomNumber),

    #[error("Room {0} was requested more than once")]
    DuplicateRoom(RoomNumber),

    #[error("Room {0} is not available")]
    RoomUnavailable(RoomNumber),

    #[error("Reservation #{0} not found")]
    ReservationNotFound(ReservationId),

    #[error("Reservation #{id} cannot move from {from} to {to}")]
    InvalidTransition { id: ReservationId, from: ReservationState, to: ReservationState },

    #[error("Reservation #{id} cannot check in before {check_in} (today is {today})")]
    CheckInTooEarly { id: ReservationId, check_in: NaiveDate, today: NaiveDate },

    #[error("Reservation #{0} is already finalized")]
    AlreadyFinalized(ReservationId),

    #[error("No reservation ids left")]
    ReservationIdsExhausted,
}

pub type Result<T> = std::result::Result<T, Error>;
