use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::destination::Destination;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub from: Airport,
    pub to: Airport,
    pub depart_at: DateTime<Utc>,
    pub arrive_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub price: u32,
    pub currency: String,
    pub stops: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub price_per_night: u32,
    pub rating: f64,
    pub location: HotelLocation,
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRequest {
    pub destination_id: String,
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub success: bool,
    pub destination: Destination,
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
}
