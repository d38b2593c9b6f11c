use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::error::ApiError;
use crate::models::hotel_search::{
    HotelListing, HotelSearchMetadata, HotelSearchQuery, HotelSearchResponse, Stay,
};

const DEFAULT_NIGHTS: i64 = 3;
const DEFAULT_GUESTS: u32 = 2;
const DEFAULT_ROOMS: u32 = 1;
const BOOKING_WINDOW_DAYS: i64 = 30;

const LISTING_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1571896349842-33c89424de2d?w=400&h=300&fit=crop",
    "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=400&h=300&fit=crop",
];

const GENERIC_BRANDS: [&str; 8] = [
    "Grand Hotel",
    "Plaza Hotel",
    "Marriott",
    "Hilton",
    "Sheraton",
    "Intercontinental",
    "Westin",
    "Hyatt",
];
const GENERIC_AMENITIES: [&str; 4] = ["Free WiFi", "Air Conditioning", "TV", "Private Bathroom"];

struct HotelTemplate {
    name: &'static str,
    stars: u8,
    min_price: u32,
    max_price: u32,
    amenities: &'static [&'static str],
    location: &'static str,
}

const fn hotel(
    name: &'static str,
    stars: u8,
    min_price: u32,
    max_price: u32,
    amenities: &'static [&'static str],
    location: &'static str,
) -> HotelTemplate {
    HotelTemplate {
        name,
        stars,
        min_price,
        max_price,
        amenities,
        location,
    }
}

const KNOWN_CITIES: &[(&str, &[HotelTemplate])] = &[
    (
        "Paris",
        &[
            hotel("Le Meurice", 5, 800, 2000, &["Spa", "Restaurant", "Fitness Center", "Concierge"], "1st Arrondissement"),
            hotel("The Ritz Paris", 5, 1000, 2500, &["Spa", "Restaurant", "Bar", "Room Service"], "Place Vendôme"),
            hotel("Hotel Lutetia", 5, 700, 1800, &["Spa", "Restaurant", "Fitness Center"], "Saint-Germain-des-Prés"),
        ],
    ),
    (
        "Tokyo",
        &[
            hotel("Aman Tokyo", 5, 1000, 3000, &["Spa", "Restaurant", "Fitness Center", "Pool"], "Otemachi"),
            hotel("Imperial Hotel Tokyo", 5, 600, 1500, &["Spa", "Restaurant", "Fitness Center"], "Hibiya"),
            hotel("Park Hyatt Tokyo", 5, 800, 2000, &["Spa", "Restaurant", "Pool", "Fitness Center"], "Shinjuku"),
        ],
    ),
    (
        "New York",
        &[
            hotel("The Plaza Hotel", 5, 800, 2500, &["Spa", "Restaurant", "Fitness Center", "Concierge"], "Fifth Avenue"),
            hotel("The St. Regis New York", 5, 900, 2200, &["Spa", "Restaurant", "Bar", "Room Service"], "Midtown East"),
            hotel("Four Seasons Hotel New York", 5, 1000, 2800, &["Spa", "Restaurant", "Pool", "Fitness Center"], "Midtown"),
        ],
    ),
    (
        "Dubai",
        &[
            hotel("Burj Al Arab", 7, 1500, 5000, &["Spa", "Restaurant", "Pool", "Private Beach", "Helicopter"], "Jumeirah"),
            hotel("Atlantis The Palm", 5, 400, 1200, &["Spa", "Restaurant", "Pool", "Water Park", "Beach"], "Palm Jumeirah"),
            hotel("Armani Hotel Dubai", 5, 600, 1800, &["Spa", "Restaurant", "Pool", "Fitness Center"], "Burj Khalifa"),
        ],
    ),
    (
        "Singapore",
        &[
            hotel("Marina Bay Sands", 5, 500, 1500, &["Spa", "Restaurant", "Pool", "Casino", "Shopping"], "Marina Bay"),
            hotel("Raffles Hotel Singapore", 5, 800, 2000, &["Spa", "Restaurant", "Bar", "Butler Service"], "Colonial District"),
            hotel("Fullerton Bay Hotel", 5, 600, 1600, &["Spa", "Restaurant", "Pool", "Fitness Center"], "Marina Bay"),
        ],
    ),
    (
        "Sydney",
        &[
            hotel("Park Hyatt Sydney", 5, 600, 1800, &["Spa", "Restaurant", "Pool", "Fitness Center"], "The Rocks"),
            hotel("Four Seasons Hotel Sydney", 5, 700, 2000, &["Spa", "Restaurant", "Pool", "Fitness Center"], "Circular Quay"),
            hotel("Shangri-La Hotel Sydney", 5, 500, 1500, &["Spa", "Restaurant", "Pool", "Fitness Center"], "The Rocks"),
        ],
    ),
];

/// Resolves check-in, check-out and party size. Missing dates default to a
/// three-night stay starting within the next month.
pub fn resolve_stay<R: Rng>(
    query: &HotelSearchQuery,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Stay, ApiError> {
    let check_in = parse_date(query.check_in.as_deref(), "Invalid check-in date")?;
    let check_out = parse_date(query.check_out.as_deref(), "Invalid check-out date")?;
    let default_length = Duration::days(DEFAULT_NIGHTS);

    let (check_in, check_out) = match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_in, check_out),
        (Some(check_in), None) => (check_in, check_in + default_length),
        (None, Some(check_out)) => (check_out - default_length, check_out),
        (None, None) => {
            let offset = Duration::days(rng.gen_range(0..BOOKING_WINDOW_DAYS));
            let check_in = now.date_naive() + offset;
            (check_in, check_in + default_length)
        }
    };

    Ok(Stay {
        check_in,
        check_out,
        guests: query.guests.filter(|g| *g > 0).unwrap_or(DEFAULT_GUESTS),
        rooms: query.rooms.filter(|r| *r > 0).unwrap_or(DEFAULT_ROOMS),
    })
}

fn parse_date(value: Option<&str>, message: &str) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiError::validation(message)),
        None => Ok(None),
    }
}

/// Hotel offers for a city, cheapest first. Cities without curated hotels
/// get a generic set of chain hotels.
pub fn search_hotels<R: Rng>(
    query: &HotelSearchQuery,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<HotelSearchResponse, ApiError> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .ok_or_else(|| ApiError::validation("Missing required parameter: city"))?
        .to_string();
    let stay = resolve_stay(query, now, rng)?;

    let mut hotels = match curated_hotels(&city) {
        Some(templates) => templates
            .iter()
            .enumerate()
            .map(|(i, template)| curated_listing(i, template, &city, &stay, rng))
            .collect::<Vec<_>>(),
        None => {
            log::debug!("No curated hotels for {}, generating generic ones", city);
            GENERIC_BRANDS
                .iter()
                .enumerate()
                .map(|(i, brand)| generic_listing(i, brand, &city, &stay, rng))
                .collect()
        }
    };
    hotels.sort_by_key(|hotel| hotel.price);

    let metadata = summarize(&hotels, now);
    Ok(HotelSearchResponse {
        success: true,
        city,
        hotels,
        metadata,
    })
}

fn curated_hotels(city: &str) -> Option<&'static [HotelTemplate]> {
    KNOWN_CITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, hotels)| *hotels)
}

fn curated_listing<R: Rng>(
    index: usize,
    template: &HotelTemplate,
    city: &str,
    stay: &Stay,
    rng: &mut R,
) -> HotelListing {
    let price = rng.gen_range(template.min_price..template.max_price);
    let rating = (f64::from(template.stars) + rng.gen_range(-0.1..0.1)).clamp(1.0, 5.0);
    let has = |amenity: &str| template.amenities.iter().any(|a| *a == amenity);

    HotelListing {
        id: format!("hotel-{}", index + 1),
        name: template.name.to_string(),
        rating: round_rating(rating),
        price,
        price_per_night: price,
        total_price: price * stay.nights(),
        nights: stay.nights(),
        amenities: template.amenities.iter().map(|a| a.to_string()).collect(),
        location: template.location.to_string(),
        images: LISTING_IMAGES.iter().map(|i| i.to_string()).collect(),
        check_in: stay.check_in,
        check_out: stay.check_out,
        guests: stay.guests,
        rooms: stay.rooms,
        available: rng.gen_bool(0.9),
        free_cancellation: rng.gen_bool(0.7),
        breakfast_included: rng.gen_bool(0.5),
        wifi_included: true,
        parking: rng.gen_bool(0.4),
        pool: has("Pool"),
        spa: has("Spa"),
        restaurant: has("Restaurant"),
        fitness_center: has("Fitness Center"),
        booking_url: booking_url(city, template.name),
    }
}

fn generic_listing<R: Rng>(
    index: usize,
    brand: &str,
    city: &str,
    stay: &Stay,
    rng: &mut R,
) -> HotelListing {
    let name = format!("{} {}", city, brand);
    let price = rng.gen_range(100..1100);

    HotelListing {
        id: format!("hotel-{}", index + 1),
        rating: round_rating(rng.gen_range(3.0..5.0)),
        price,
        price_per_night: price,
        total_price: price * stay.nights(),
        nights: stay.nights(),
        amenities: GENERIC_AMENITIES.iter().map(|a| a.to_string()).collect(),
        location: format!("City Center, {}", city),
        images: LISTING_IMAGES.iter().take(2).map(|i| i.to_string()).collect(),
        check_in: stay.check_in,
        check_out: stay.check_out,
        guests: stay.guests,
        rooms: stay.rooms,
        available: rng.gen_bool(0.9),
        free_cancellation: rng.gen_bool(0.7),
        breakfast_included: rng.gen_bool(0.5),
        wifi_included: true,
        parking: rng.gen_bool(0.4),
        pool: rng.gen_bool(0.6),
        spa: rng.gen_bool(0.7),
        restaurant: rng.gen_bool(0.5),
        fitness_center: rng.gen_bool(0.6),
        booking_url: booking_url(city, &name),
        name,
    }
}

fn summarize(hotels: &[HotelListing], now: DateTime<Utc>) -> HotelSearchMetadata {
    let total: u64 = hotels.iter().map(|h| u64::from(h.price)).sum();
    let average_price = if hotels.is_empty() {
        0
    } else {
        (total / hotels.len() as u64) as u32
    };

    HotelSearchMetadata {
        total_hotels: hotels.len(),
        cheapest_price: hotels.iter().map(|h| h.price).min(),
        average_price,
        highest_rating: hotels.iter().map(|h| h.rating).reduce(f64::max),
        search_time: now,
    }
}

fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

fn slug(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn booking_url(city: &str, hotel: &str) -> String {
    format!("https://booking.com/hotel/{}/{}", slug(city), slug(hotel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn query(city: &str) -> HotelSearchQuery {
        HotelSearchQuery {
            city: Some(city.to_string()),
            ..HotelSearchQuery::default()
        }
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_curated_city_sorted_by_price() {
        let mut rng = StdRng::seed_from_u64(11);
        let response = search_hotels(&query("paris"), Utc::now(), &mut rng).unwrap();

        assert_eq!(response.city, "paris");
        assert_eq!(response.hotels.len(), 3);
        assert!(response.hotels.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(response.metadata.cheapest_price, Some(response.hotels[0].price));

        let lutetia = response
            .hotels
            .iter()
            .find(|h| h.name == "Hotel Lutetia")
            .unwrap();
        assert!((700..1800).contains(&lutetia.price));
        assert!(lutetia.spa && lutetia.restaurant && !lutetia.pool);
        assert_eq!(lutetia.booking_url, "https://booking.com/hotel/paris/hotel-lutetia");
    }

    #[test]
    fn test_curated_rating_capped_at_five() {
        let mut rng = StdRng::seed_from_u64(2);
        let response = search_hotels(&query("Dubai"), Utc::now(), &mut rng).unwrap();
        let burj = response.hotels.iter().find(|h| h.name == "Burj Al Arab").unwrap();
        assert_eq!(burj.rating, 5.0);
        assert_eq!(response.metadata.highest_rating, Some(5.0));
        for hotel in &response.hotels {
            assert!(hotel.rating >= 4.9 && hotel.rating <= 5.0);
        }
    }

    #[test]
    fn test_unknown_city_gets_generic_hotels() {
        let mut rng = StdRng::seed_from_u64(4);
        let response = search_hotels(&query("Lisbon"), Utc::now(), &mut rng).unwrap();

        assert_eq!(response.hotels.len(), 8);
        assert!(response.hotels.iter().any(|h| h.name == "Lisbon Hilton"));
        assert!(response.hotels.windows(2).all(|w| w[0].price <= w[1].price));
        for hotel in &response.hotels {
            assert!((100..1100).contains(&hotel.price));
            assert!(hotel.rating >= 3.0 && hotel.rating <= 5.0);
            assert_eq!(hotel.location, "City Center, Lisbon");
            assert_eq!(hotel.total_price, hotel.price * 3);
        }

        let total: u32 = response.hotels.iter().map(|h| h.price).sum();
        assert_eq!(response.metadata.average_price, total / 8);
        assert_eq!(response.metadata.total_hotels, 8);
    }

    #[test]
    fn test_missing_city_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = search_hotels(&query("  "), Utc::now(), &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: city");
    }

    #[test]
    fn test_stay_from_explicit_dates() {
        let mut rng = StdRng::seed_from_u64(1);
        let stay_query = HotelSearchQuery {
            city: Some("Tokyo".to_string()),
            check_in: Some("2026-11-02".to_string()),
            check_out: Some("2026-11-07".to_string()),
            guests: Some(3),
            rooms: Some(2),
        };
        let stay = resolve_stay(&stay_query, Utc::now(), &mut rng).unwrap();
        assert_eq!(stay.nights(), 5);
        assert_eq!(stay.guests, 3);
        assert_eq!(stay.rooms, 2);

        let response = search_hotels(&stay_query, Utc::now(), &mut rng).unwrap();
        for hotel in &response.hotels {
            assert_eq!(hotel.total_price, hotel.price * 5);
            assert_eq!(hotel.check_in, date("2026-11-02"));
        }
    }

    #[test]
    fn test_stay_defaults() {
        let mut rng = StdRng::seed_from_u64(8);
        let now = Utc::now();
        let stay = resolve_stay(&query("Sydney"), now, &mut rng).unwrap();
        assert_eq!(stay.nights(), 3);
        assert_eq!(stay.guests, 2);
        assert_eq!(stay.rooms, 1);
        assert!(stay.check_in >= now.date_naive());
        assert!(stay.check_in < now.date_naive() + Duration::days(30));

        let only_out = HotelSearchQuery {
            check_out: Some("2026-12-10".to_string()),
            ..query("Sydney")
        };
        let stay = resolve_stay(&only_out, now, &mut rng).unwrap();
        assert_eq!(stay.check_in, date("2026-12-07"));
    }

    #[test]
    fn test_same_day_stay_counts_one_night() {
        let stay = Stay {
            check_in: date("2026-05-01"),
            check_out: date("2026-05-01"),
            guests: 1,
            rooms: 1,
        };
        assert_eq!(stay.nights(), 1);
    }

    #[test]
    fn test_invalid_check_in_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let bad = HotelSearchQuery {
            check_in: Some("01/11/2026".to_string()),
            ..query("Paris")
        };
        let err = search_hotels(&bad, Utc::now(), &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Invalid check-in date");
    }
}
