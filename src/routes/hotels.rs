use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::error::ApiError;
use crate::models::hotel_search::HotelSearchQuery;
use crate::services::hotel_search_service::search_hotels;

/*
    /api/hotels?city=&checkIn=&checkOut=&guests=&rooms=
*/
pub async fn get_hotels(params: web::Query<HotelSearchQuery>) -> Result<HttpResponse, ApiError> {
    let response = search_hotels(&params, Utc::now(), &mut rand::thread_rng())?;
    log::info!(
        "Found {} hotels in {}",
        response.metadata.total_hotels,
        response.city
    );
    Ok(HttpResponse::Ok().json(response))
}
