use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::error::ApiError;
use crate::models::wikipedia::WikipediaQuery;
use crate::services::wikipedia_service::{mock_summary, search_term};

/*
    /api/wikipedia?query=  or  ?title=
*/
pub async fn get_summary(params: web::Query<WikipediaQuery>) -> Result<HttpResponse, ApiError> {
    let term = search_term(&params)?;
    Ok(HttpResponse::Ok().json(mock_summary(term, Utc::now())))
}
