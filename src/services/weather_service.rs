use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::weather::{
    Clouds, Conditions, Coordinates, CurrentConditions, Sun, WeatherLocation, WeatherReport, Wind,
};

const CONDITIONS: [&str; 4] = ["Clear", "Partly Cloudy", "Cloudy", "Light Rain"];

/// Plausible current weather for a coordinate; temperature drops with latitude.
pub fn mock_weather<R: Rng>(
    lat: f64,
    lon: f64,
    city: Option<&str>,
    now: DateTime<Utc>,
    rng: &mut R,
) -> WeatherReport {
    let condition = CONDITIONS[rng.gen_range(0..CONDITIONS.len())];

    let base_temp = 25.0 - lat.abs() * 0.5;
    let temperature = (base_temp + rng.gen_range(-5.0..5.0)).round() as i32;

    WeatherReport {
        location: WeatherLocation {
            name: city.unwrap_or("Unknown").to_string(),
            country: "Unknown".to_string(),
            coordinates: Coordinates { lat, lon },
        },
        current: CurrentConditions {
            temperature,
            feels_like: temperature + rng.gen_range(-2..=2),
            humidity: rng.gen_range(40..80),
            pressure: rng.gen_range(1010..1030),
            visibility: rng.gen_range(8..13),
            uv_index: rng.gen_range(1..=10),
        },
        conditions: Conditions {
            main: condition.to_string(),
            description: condition.to_lowercase(),
            icon: "01d".to_string(),
            id: 800,
        },
        wind: Wind {
            speed: (rng.gen_range(5.0..20.0_f64) * 10.0).round() / 10.0,
            direction: rng.gen_range(0..360),
            gust: (rng.gen_range(5.0..25.0_f64) * 10.0).round() / 10.0,
        },
        clouds: Clouds {
            coverage: rng.gen_range(0..100),
        },
        sun: Sun {
            sunrise: now - Duration::hours(6),
            sunset: now + Duration::hours(6),
        },
        timestamp: now,
        mock: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_mock_weather_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = Utc::now();
        let report = mock_weather(64.1, -21.9, Some("Reykjavik"), now, &mut rng);

        assert!(report.mock);
        assert_eq!(report.location.name, "Reykjavik");
        // 25 - 64.1 * 0.5 = -7.05, +/- 5
        assert!(report.current.temperature >= -12 && report.current.temperature <= -2);
        assert!((report.current.feels_like - report.current.temperature).abs() <= 2);
        assert!((40..80).contains(&report.current.humidity));
        assert!((1010..1030).contains(&report.current.pressure));
        assert!((1..=10).contains(&report.current.uv_index));
        assert!(CONDITIONS.contains(&report.conditions.main.as_str()));
        assert!(report.wind.direction < 360);
        assert_eq!(report.sun.sunset - report.sun.sunrise, Duration::hours(12));
    }

    #[test]
    fn test_unknown_location_name() {
        let mut rng = StdRng::seed_from_u64(11);
        let report = mock_weather(0.0, 0.0, None, Utc::now(), &mut rng);
        assert_eq!(report.location.name, "Unknown");
    }
}
