use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct WikipediaQuery {
    pub query: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaImage {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikipediaSummary {
    pub title: String,
    pub display_title: String,
    pub extract: String,
    pub extract_html: Option<String>,
    pub thumbnail: Option<WikipediaImage>,
    pub original_image: Option<WikipediaImage>,
    pub url: String,
    pub lang: String,
    pub timestamp: DateTime<Utc>,
    pub mock: bool,
}
