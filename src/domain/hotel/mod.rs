pub mod guest;
pub mod hotel;
pub mod occupancy;
pub mod reservation;
pub mod reservation_store;
pub mod room;
pub mod room_registry;
pub mod shared_hotel;
