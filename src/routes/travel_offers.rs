use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::error::ApiError;
use crate::models::offers::{OfferRequest, OfferResponse};
use crate::services::destination_catalog::DestinationCatalog;
use crate::services::offer_service::{first_departure, OfferService};

/*
    /api/travel/offers
*/
pub async fn get_offers(
    catalog: web::Data<DestinationCatalog>,
    input: web::Json<OfferRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = input.into_inner();
    let destination = catalog
        .find(&request.destination_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Destination not found"))?;

    let departure = first_departure(request.start_date.as_deref(), Utc::now())?;

    let mut rng = rand::thread_rng();
    let flights = OfferService::mock_flights(&destination, departure, &mut rng);
    let hotels = OfferService::mock_hotels(&destination, &mut rng);

    Ok(HttpResponse::Ok().json(OfferResponse {
        success: true,
        destination,
        flights,
        hotels,
    }))
}
