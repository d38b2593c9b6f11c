use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::destination::ScoredDestination;
use crate::services::destination_catalog::DestinationCatalog;
use crate::services::suitability::SuitabilityScorer;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredDestination>,
    pub count: usize,
}

/*
    /api/ai/match
*/
pub async fn find_matches(
    catalog: web::Data<DestinationCatalog>,
    scorer: web::Data<SuitabilityScorer>,
    input: web::Json<MatchRequest>,
) -> Result<HttpResponse, ApiError> {
    let query = input
        .into_inner()
        .query
        .filter(|query| !query.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Query is required"))?;

    let matches: Vec<ScoredDestination> = catalog
        .score(&query, &scorer, &mut rand::thread_rng())
        .into_iter()
        .filter(|scored| scored.score > 0.0)
        .collect();

    log::info!("Query '{}' matched {} destinations", query, matches.len());

    Ok(HttpResponse::Ok().json(MatchResponse {
        count: matches.len(),
        matches,
    }))
}
