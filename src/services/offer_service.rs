use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::error::ApiError;

use crate::models::destination::Destination;
use crate::models::offers::{Airport, Flight, Hotel, HotelLocation};

const OFFER_COUNT: usize = 6;
const DEFAULT_AIRPORT: &str = "LAX";

const AIRLINES: [&str; 6] = ["Delta", "United", "American", "Emirates", "Qatar Airways", "KLM"];
const ORIGINS: [(&str, &str); 5] = [
    ("JFK", "New York"),
    ("LAX", "Los Angeles"),
    ("SFO", "San Francisco"),
    ("ORD", "Chicago"),
    ("ATL", "Atlanta"),
];
const HOTEL_SUFFIXES: [&str; 6] = ["Grand", "Plaza", "Sunset", "Harbor", "Skyline", "Riverside"];
const AMENITIES: [&str; 4] = ["Free WiFi", "Breakfast", "Pool", "Gym"];

/// Generates placeholder flight and hotel offers for a destination.
pub struct OfferService;

impl OfferService {
    /// First flight leaves at `first_departure`, the rest one day apart.
    pub fn mock_flights<R: Rng>(
        destination: &Destination,
        first_departure: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Flight> {
        let arrival_code = destination
            .airport_code
            .clone()
            .unwrap_or_else(|| DEFAULT_AIRPORT.to_string());

        (0..OFFER_COUNT)
            .map(|i| {
                let depart_at = first_departure + Duration::days(i as i64);
                let arrive_at = depart_at + Duration::hours(6 + i as i64);
                let airline = AIRLINES[i % AIRLINES.len()];
                let (origin_code, origin_city) = ORIGINS[i % ORIGINS.len()];
                let prefix: String = airline.chars().take(2).collect::<String>().to_uppercase();

                Flight {
                    id: format!("FL-{}-{}", destination.id, i),
                    airline: airline.to_string(),
                    flight_number: format!("{}{}", prefix, 300 + i),
                    from: Airport {
                        code: origin_code.to_string(),
                        city: origin_city.to_string(),
                    },
                    to: Airport {
                        code: arrival_code.clone(),
                        city: destination.name.clone(),
                    },
                    depart_at,
                    arrive_at,
                    duration_minutes: (arrive_at - depart_at).num_minutes(),
                    price: rng.gen_range(300.0..1000.0_f64).round() as u32,
                    currency: "USD".to_string(),
                    stops: if rng.gen_bool(0.3) { 1 } else { 0 },
                }
            })
            .collect()
    }

    pub fn mock_hotels<R: Rng>(destination: &Destination, rng: &mut R) -> Vec<Hotel> {
        let address = destination
            .city
            .as_ref()
            .map(|city| format!("{} city center", city))
            .unwrap_or_else(|| format!("{} city center", destination.name));

        (0..OFFER_COUNT)
            .map(|i| Hotel {
                id: format!("HT-{}-{}", destination.id, i),
                name: format!(
                    "{} {}",
                    destination.name,
                    HOTEL_SUFFIXES[i % HOTEL_SUFFIXES.len()]
                ),
                price_per_night: rng.gen_range(80.0..400.0_f64).round() as u32,
                rating: (rng.gen_range(3.0..5.0_f64) * 10.0).round() / 10.0,
                location: HotelLocation {
                    lat: destination.latitude.unwrap_or_default(),
                    lng: destination.longitude.unwrap_or_default(),
                    address: address.clone(),
                },
                amenities: AMENITIES
                    .iter()
                    .take(2 + i % 3)
                    .map(|a| a.to_string())
                    .collect(),
            })
            .collect()
    }
}

/// Departure of the first offered flight: midnight UTC on `start_date`
/// (`YYYY-MM-DD` or RFC 3339), or a day from now when none is given.
pub fn first_departure(
    start_date: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ApiError> {
    let start_date = match start_date.map(str::trim).filter(|s| !s.is_empty()) {
        Some(start_date) => start_date,
        None => return Ok(now + Duration::days(1)),
    };

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(start_date) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| ApiError::validation("Invalid start date"))
}
