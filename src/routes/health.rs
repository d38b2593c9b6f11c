use actix_web::{web, HttpResponse, Responder};
use mongodb::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::mongo::ping;
use crate::services::destination_catalog::DestinationCatalog;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    client: web::Data<Arc<Client>>,
    config: web::Data<AppConfig>,
    catalog: web::Data<DestinationCatalog>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client, &config.mongodb_database).await;
    let catalog_result = check_catalog(&catalog);

    // Any failing service degrades the overall status
    if mongo_result.status != "ok" || catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    health.services.insert("mongodb".to_string(), mongo_result);
    health.services.insert("catalog".to_string(), catalog_result);

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &Client, database: &str) -> ServiceStatus {
    match ping(client, database).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            log::warn!("MongoDB health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to connect: {}", e)),
            }
        }
    }
}

fn check_catalog(catalog: &DestinationCatalog) -> ServiceStatus {
    if catalog.is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("No destinations loaded".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} destinations loaded", catalog.len())),
        }
    }
}
