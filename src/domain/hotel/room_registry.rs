use rust_decimal::Decimal;
use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::hotel::room::{Room, RoomCategory};
use crate::domain::utils::id::RoomNumber;
use crate::error::ConversionError;

new_key_type! {
    pub struct RoomKey;
}

/// Fixed catalog of rooms.
///
/// Rooms are never removed, so slot order equals insertion order and every
/// listing comes back in the order the catalog was seeded.
#[derive(Debug)]
pub struct RoomRegistry {
    /// Room Storage.
    slots: SlotMap<RoomKey, Room>,

    /// Index lookup RoomKey using the public room number.
    number_index: HashMap<RoomNumber, RoomKey>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self { slots: SlotMap::with_key(), number_index: HashMap::new() }
    }

    /// Adds a room to the catalog. Rooms always enter the catalog available,
    /// whatever flag they carry, since no reservation holds them yet.
    ///
    /// # Returns
    /// The internal key, `NegativeRate` for a rate below zero, or
    /// `DuplicateRoomNumber` if the number is already taken.
    pub fn add(&mut self, mut room: Room) -> Result<RoomKey, ConversionError> {
        if room.nightly_rate < Decimal::ZERO {
            return Err(ConversionError::NegativeRate { category: room.category, rate: room.nightly_rate });
        }

        if self.number_index.contains_key(&room.number) {
            return Err(ConversionError::DuplicateRoomNumber(room.number));
        }

        room.available = true;

        let number = room.number;
        let key = self.slots.insert(room);
        self.number_index.insert(number, key);

        Ok(key)
    }

    /// All available rooms, optionally restricted to one category.
    pub fn list_available(&self, category: Option<RoomCategory>) -> Vec<Room> {
        self.slots
            .values()
            .filter(|room| room.available)
            .filter(|room| category.is_none_or(|category| room.category == category))
            .cloned()
            .collect()
    }

    pub fn find_by_number(&self, number: RoomNumber) -> Option<&Room> {
        let key = self.number_index.get(&number)?;
        self.slots.get(*key)
    }

    /// Sets the availability flag of every listed room. Unknown numbers are skipped.
    pub(crate) fn set_available(&mut self, numbers: &[RoomNumber], available: bool) {
        for number in numbers {
            if let Some(room) = self.number_index.get(number).and_then(|key| self.slots.get_mut(*key)) {
                room.available = available;
            }
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
