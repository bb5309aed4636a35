use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::utils::id::RoomNumber;
use crate::error::ConversionError;

/// Room class. Each class carries one nightly rate, set in the hotel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RoomCategory {
    Standard,
    Luxury,
    Suite,
}

impl RoomCategory {
    /// Every category, in reporting order.
    pub const ALL: [RoomCategory; 3] = [RoomCategory::Standard, RoomCategory::Luxury, RoomCategory::Suite];
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Luxury => "Luxury",
            RoomCategory::Suite => "Suite",
        };
        f.write_str(name)
    }
}

impl FromStr for RoomCategory {
    type Err = ConversionError;

    fn from_str(category_dto: &str) -> Result<RoomCategory, Self::Err> {
        match category_dto.to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomCategory::Standard),
            "luxury" | "luxo" => Ok(RoomCategory::Luxury),
            "suite" => Ok(RoomCategory::Suite),
            _ => Err(ConversionError::UnknownRoomCategory(category_dto.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub number: RoomNumber,
    pub category: RoomCategory,
    pub nightly_rate: Decimal,
    pub available: bool,
}

impl Room {
    /// New rooms start out available.
    pub fn new(number: RoomNumber, category: RoomCategory, nightly_rate: Decimal) -> Room {
        Room { number, category, nightly_rate, available: true }
    }

    pub fn is_occupied(&self) -> bool {
        !self.available
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Occupied" };
        write!(f, "Room {} - {} - {:.2}/night - {}", self.number, self.category, self.nightly_rate, status)
    }
}
