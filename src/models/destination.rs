use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Hot,
    Moderate,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

/// A travel location record as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub climate: Climate,
    #[serde(default)]
    pub activities: Vec<String>,
    pub budget_level: BudgetLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_code: Option<String>,
}

/// Result of matching a destination against a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination {
    pub id: String,
    pub score: f64,
    pub match_reason: String,
    pub name: String,
    pub city: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceFilter {
    pub budget: Option<BudgetLevel>,
    pub climate: Option<Climate>,
    pub activities: Option<Vec<String>>,
}
