use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::error::ApiError;
use crate::models::currency::CurrencyQuery;
use crate::services::currency_service::convert;

/*
    /api/currency?from=&to=&amount=&country=
*/
pub async fn convert_currency(
    params: web::Query<CurrencyQuery>,
) -> Result<HttpResponse, ApiError> {
    let conversion = convert(&params, Utc::now())?;
    Ok(HttpResponse::Ok().json(conversion))
}
