use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::destination::{Destination, PreferenceFilter};
use crate::services::destination_catalog::{DestinationCatalog, BROWSE_LIMIT};

#[derive(Serialize)]
struct DestinationList {
    success: bool,
    destinations: Vec<Destination>,
}

/*
    GET /api/destinations
*/
pub async fn get_destinations(catalog: web::Data<DestinationCatalog>) -> impl Responder {
    HttpResponse::Ok().json(DestinationList {
        success: true,
        destinations: catalog.browse(BROWSE_LIMIT),
    })
}

/*
    POST /api/destinations
*/
pub async fn filter_destinations(
    catalog: web::Data<DestinationCatalog>,
    input: web::Json<PreferenceFilter>,
) -> impl Responder {
    let preferences = input.into_inner();
    log::debug!("Filtering destinations with {:?}", preferences);

    HttpResponse::Ok().json(DestinationList {
        success: true,
        destinations: catalog.filter(&preferences),
    })
}
