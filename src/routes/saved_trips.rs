use actix_web::{web, HttpResponse};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use serde_json::json;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::mongo::SAVED_TRIPS_COLLECTION;
use crate::error::ApiError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::saved_trip::{NewSavedTrip, SavedTrip, SavedTripView};

fn saved_trips(client: &Client, config: &AppConfig) -> mongodb::Collection<SavedTrip> {
    client
        .database(&config.mongodb_database)
        .collection(SAVED_TRIPS_COLLECTION)
}

/*
    GET /api/saved-trips
*/
pub async fn list(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let cursor = saved_trips(&data, &config)
        .find(doc! { "user_id": &user.user_id })
        .sort(doc! { "created_at": -1 })
        .await?;
    let trips: Vec<SavedTrip> = cursor.try_collect().await?;

    let views: Vec<SavedTripView> = trips.into_iter().map(SavedTripView::from).collect();
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "savedTrips": views,
    })))
}

/*
    POST /api/saved-trips
*/
pub async fn create(
    user: AuthenticatedUser,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    input: web::Json<NewSavedTrip>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    if input.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let trip = input.into_saved_trip(user.user_id, Utc::now());
    let result = saved_trips(&data, &config).insert_one(&trip).await?;
    let id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .unwrap_or_default();

    log::info!("Saved trip {} for user {}", id, trip.user_id);
    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "savedTrip": { "id": id },
    })))
}

/*
    DELETE /api/saved-trips/{id}
*/
pub async fn delete(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let id = ObjectId::parse_str(path.into_inner().as_str())
        .map_err(|_| ApiError::validation("Invalid ID"))?;

    let collection = saved_trips(&data, &config);
    let trip = collection
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::not_found("Not found"))?;

    if trip.user_id != user.user_id {
        return Err(ApiError::Forbidden);
    }

    collection.delete_one(doc! { "_id": id }).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
