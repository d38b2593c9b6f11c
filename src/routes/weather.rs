use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;

use crate::models::weather::WeatherQuery;
use crate::services::weather_service::mock_weather;

/*
    /api/weather?lat=&lon=&city=
*/
pub async fn get_weather(params: web::Query<WeatherQuery>) -> impl Responder {
    let report = mock_weather(
        params.lat.unwrap_or_default(),
        params.lon.unwrap_or_default(),
        params.city.as_deref(),
        Utc::now(),
        &mut rand::thread_rng(),
    );
    HttpResponse::Ok().json(report)
}
