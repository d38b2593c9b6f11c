use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u32,
    pub pressure: u32,
    pub visibility: u32,
    pub uv_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conditions {
    pub main: String,
    pub description: String,
    pub icon: String,
    pub id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub direction: u32,
    pub gust: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clouds {
    pub coverage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sun {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
    pub conditions: Conditions,
    pub wind: Wind,
    pub clouds: Clouds,
    pub sun: Sun,
    pub timestamp: DateTime<Utc>,
    pub mock: bool,
}
