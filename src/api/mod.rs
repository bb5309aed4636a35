pub mod hotel_dto;
