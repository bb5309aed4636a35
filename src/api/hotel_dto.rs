use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub name: String,
    pub categories: Vec<CategoryDto>,
}

/// One numbering range of rooms sharing a category and nightly rate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub category: String,
    pub nightly_rate: Decimal,
    pub first_number: u32,
    pub last_number: u32,
}

impl CategoryDto {
    pub fn new(category: &str, nightly_rate: Decimal, first_number: u32, last_number: u32) -> Self {
        Self { category: category.to_string(), nightly_rate, first_number, last_number }
    }
}

impl Default for HotelDto {
    /// The stock catalog: twenty Standard rooms, ten Luxury rooms and five Suites.
    fn default() -> Self {
        Self {
            name: "Hotel Paradise".to_string(),
            categories: vec![
                CategoryDto::new("Standard", Decimal::new(15000, 2), 101, 120),
                CategoryDto::new("Luxury", Decimal::new(30000, 2), 201, 210),
                CategoryDto::new("Suite", Decimal::new(50000, 2), 301, 305),
            ],
        }
    }
}
