use std::env;

use crate::error::ApiError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATABASE: &str = "smart-travel-advisor";
const DESTINATIONS_PATH: &str = "data/destinations.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub jwt_secret: String,
    pub destinations_path: String,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ApiError> {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        let mongodb_uri = required("MONGODB_URI")?;
        let jwt_secret = required("JWT_SECRET")?;

        Ok(Self {
            host,
            port,
            mongodb_uri,
            mongodb_database: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| DATABASE.to_string()),
            jwt_secret,
            destinations_path: env::var("DESTINATIONS_PATH")
                .unwrap_or_else(|_| DESTINATIONS_PATH.to_string()),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }
}

fn required(key: &str) -> Result<String, ApiError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Config(format!("{} must be set", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 7] = [
        "HOST",
        "PORT",
        "MONGODB_URI",
        "MONGODB_DATABASE",
        "JWT_SECRET",
        "DESTINATIONS_PATH",
        "RUST_ENV",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        env::set_var("JWT_SECRET", "secret");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.mongodb_database, "smart-travel-advisor");
        assert_eq!(config.destinations_path, "data/destinations.json");
        assert_eq!(config.environment, "development");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back() {
        clear_env();
        env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        env::set_var("JWT_SECRET", "secret");
        env::set_var("PORT", "not-a-port");

        assert_eq!(AppConfig::from_env().unwrap().port, 8080);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_required_values() {
        clear_env();
        env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
        clear_env();
    }
}
