use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::hotel::room::RoomCategory;
use crate::domain::hotel::room_registry::RoomRegistry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOccupancy {
    pub category: RoomCategory,
    pub occupied: usize,
    pub total: usize,
}

/// Snapshot of how many rooms are taken, overall and per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReport {
    pub hotel_name: String,
    pub date: NaiveDate,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub free_rooms: usize,
    /// `None` when the hotel has no rooms.
    pub occupancy_percentage: Option<f64>,
    /// One entry per category, in `RoomCategory::ALL` order.
    pub by_category: Vec<CategoryOccupancy>,
}

impl OccupancyReport {
    pub fn from_registry(hotel_name: &str, date: NaiveDate, registry: &RoomRegistry) -> OccupancyReport {
        let total_rooms = registry.len();
        let occupied_rooms = registry.rooms().filter(|room| room.is_occupied()).count();

        let occupancy_percentage =
            if total_rooms == 0 { None } else { Some(occupied_rooms as f64 / total_rooms as f64 * 100.0) };

        let by_category = RoomCategory::ALL
            .iter()
            .map(|&category| {
                let (occupied, total) = registry
                    .rooms()
                    .filter(|room| room.category == category)
                    .fold((0, 0), |(occupied, total), room| (occupied + usize::from(room.is_occupied()), total + 1));
                CategoryOccupancy { category, occupied, total }
            })
            .collect();

        OccupancyReport {
            hotel_name: hotel_name.to_string(),
            date,
            total_rooms,
            occupied_rooms,
            free_rooms: total_rooms - occupied_rooms,
            occupancy_percentage,
            by_category,
        }
    }
}

impl fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== OCCUPANCY REPORT - {} ===", self.hotel_name)?;
        writeln!(f, "Date: {}", self.date.format("%d/%m/%Y"))?;
        writeln!(f, "Total rooms: {}", self.total_rooms)?;
        writeln!(f, "Occupied rooms: {}", self.occupied_rooms)?;
        writeln!(f, "Free rooms: {}", self.free_rooms)?;
        match self.occupancy_percentage {
            Some(percentage) => writeln!(f, "Occupancy rate: {:.1}%", percentage)?,
            None => writeln!(f, "Occupancy rate: n/a")?,
        }
        for entry in &self.by_category {
            writeln!(f, "{}: {}/{} occupied", entry.category, entry.occupied, entry.total)?;
        }
        Ok(())
    }
}
