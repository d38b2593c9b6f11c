use actix_web::{error, web, HttpRequest};

use crate::error::ApiError;
use crate::middleware::auth::AuthMiddleware;

pub mod ai_match;
pub mod auth;
pub mod currency;
pub mod destinations;
pub mod health;
pub mod hotels;
pub mod saved_trips;
pub mod travel_offers;
pub mod weather;
pub mod wikipedia;

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body: {}", err);
    ApiError::validation(format!("Invalid request body: {}", err)).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected query string: {}", err);
    ApiError::validation(format!("Invalid query parameters: {}", err)).into()
}

/// Registers every route. Expects `Arc<mongodb::Client>`, `AppConfig`,
/// `DestinationCatalog` and `SuitabilityScorer` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/ai/match", web::post().to(ai_match::find_matches))
                .route(
                    "/destinations",
                    web::get().to(destinations::get_destinations),
                )
                .route(
                    "/destinations",
                    web::post().to(destinations::filter_destinations),
                )
                .route("/travel/offers", web::post().to(travel_offers::get_offers))
                .route("/weather", web::get().to(weather::get_weather))
                .route("/currency", web::get().to(currency::convert_currency))
                .route("/hotels", web::get().to(hotels::get_hotels))
                .route("/wikipedia", web::get().to(wikipedia::get_summary))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/signin", web::post().to(auth::signin)),
                )
                // Protected routes
                .service(
                    web::scope("/saved-trips")
                        .wrap(AuthMiddleware)
                        .route("", web::get().to(saved_trips::list))
                        .route("", web::post().to(saved_trips::create))
                        .route("/{id}", web::delete().to(saved_trips::delete)),
                ),
        );
}
