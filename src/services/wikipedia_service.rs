use chrono::{DateTime, Utc};

use crate::error::ApiError;
use crate::models::wikipedia::{WikipediaQuery, WikipediaSummary};

const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

const SUMMARIES: [(&str, &str); 3] = [
    (
        "paris",
        "Paris is the capital and most populous city of France. Situated on the Seine River, \
         in the heart of the Île-de-France region, it is one of the world's leading centers \
         for art, fashion, gastronomy, and culture.",
    ),
    (
        "tokyo",
        "Tokyo is the capital and most populous city of Japan. A bustling metropolis that \
         blends ultramodern and traditional elements, from neon-lit skyscrapers to historic \
         temples.",
    ),
    (
        "bali",
        "Bali is a province of Indonesia and the westernmost of the Lesser Sunda Islands. \
         East of Java and west of Lombok, the province includes the island of Bali and a few \
         smaller neighbouring islands.",
    ),
];

/// Search term of a request: `query` wins over `title`.
pub fn search_term(params: &WikipediaQuery) -> Result<&str, ApiError> {
    [&params.query, &params.title]
        .into_iter()
        .filter_map(|value| value.as_deref().map(str::trim))
        .find(|value| !value.is_empty())
        .ok_or_else(|| ApiError::validation("Missing required parameters: query or title"))
}

/// Canned article summary; places without one get a generic blurb.
pub fn mock_summary(term: &str, now: DateTime<Utc>) -> WikipediaSummary {
    let key = term.to_lowercase();
    let extract = SUMMARIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, summary)| summary.to_string())
        .unwrap_or_else(|| {
            format!(
                "{} is a popular travel destination known for its unique culture, beautiful \
                 landscapes, and rich history. Visitors can enjoy local cuisine, explore \
                 historical sites, and experience the authentic atmosphere of this remarkable \
                 place.",
                term
            )
        });

    WikipediaSummary {
        title: term.to_string(),
        display_title: term.to_string(),
        extract,
        extract_html: None,
        thumbnail: None,
        original_image: None,
        url: format!("{}{}", ARTICLE_BASE_URL, urlencoding::encode(term)),
        lang: "en".to_string(),
        timestamp: now,
        mock: true,
    }
}
