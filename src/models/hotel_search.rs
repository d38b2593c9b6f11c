use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/hotels`. Dates are `YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchQuery {
    pub city: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub rooms: Option<u32>,
}

/// Dates and party size shared by every listing of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
}

impl Stay {
    /// Whole nights between the two dates, at least one.
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days().unsigned_abs();
        days.max(1) as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListing {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub price: u32,
    pub price_per_night: u32,
    pub total_price: u32,
    pub nights: u32,
    pub amenities: Vec<String>,
    pub location: String,
    pub images: Vec<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub rooms: u32,
    pub available: bool,
    pub free_cancellation: bool,
    pub breakfast_included: bool,
    pub wifi_included: bool,
    pub parking: bool,
    pub pool: bool,
    pub spa: bool,
    pub restaurant: bool,
    pub fitness_center: bool,
    pub booking_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSearchMetadata {
    pub total_hotels: usize,
    pub cheapest_price: Option<u32>,
    pub average_price: u32,
    pub highest_rating: Option<f64>,
    pub search_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSearchResponse {
    pub success: bool,
    pub city: String,
    pub hotels: Vec<HotelListing>,
    pub metadata: HotelSearchMetadata,
}
