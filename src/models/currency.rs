use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/currency`. `amount` stays a string so a bad
/// number gets the same JSON error as a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct CurrencyQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    /// ISO 3166 alpha-2 code, used when `to` is absent.
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversion {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}
