use std::sync::Arc;

use crate::api::hotel_dto::HotelDto;
use crate::domain::clock::Clock;
use crate::domain::hotel::hotel::Hotel;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads the hotel configuration at `file_path` and opens the hotel.
pub fn generate_hotel(file_path: &str, clock: Arc<dyn Clock>) -> Result<Hotel> {
    logger::init();
    log::info!("Logger initialized. Loading hotel configuration from '{}'.", file_path);

    let hotel_dto: HotelDto = parse_json_file::<HotelDto>(file_path)?;
    log::info!("JSON file parsed successfully.");

    let hotel = Hotel::try_from((hotel_dto, clock))?;
    log::info!("Hotel '{}' constructed successfully.", hotel.name());

    Ok(hotel)
}
