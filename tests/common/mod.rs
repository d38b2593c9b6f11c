#![allow(dead_code)]

use actix_web::{web, App};
use std::sync::Arc;

use travel_advisor_api::db::mongo::create_mongo_client;
use travel_advisor_api::middleware::auth::generate_token;
use travel_advisor_api::{routes, AppConfig, DestinationCatalog, SuitabilityScorer, SuitabilityWeights};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_USER_ID: &str = "64b7f0c2a1b2c3d4e5f60718";

pub const FIXTURE_DESTINATIONS: &str = r#"[
    {
        "id": "taj-mahal",
        "name": "Taj Mahal",
        "country": "India",
        "city": "Agra",
        "description": "Marble mausoleum on the bank of the Yamuna river.",
        "climate": "hot",
        "activities": ["Sightseeing", "History"],
        "budgetLevel": "low",
        "airportCode": "AGR"
    },
    {
        "id": "eiffel-tower",
        "name": "Eiffel Tower",
        "country": "France",
        "city": "Paris",
        "description": "Wrought-iron lattice tower in the heart of Paris.",
        "climate": "moderate",
        "activities": ["Sightseeing", "Dining", "Museums"],
        "budgetLevel": "high",
        "airportCode": "CDG"
    },
    {
        "id": "bali",
        "name": "Bali",
        "country": "Indonesia",
        "city": "Denpasar",
        "description": "Tropical island with rice terraces and coral reefs.",
        "climate": "hot",
        "activities": ["Beaches", "Surfing", "Temples"],
        "budgetLevel": "low",
        "airportCode": "DPS"
    },
    {
        "id": "banff",
        "name": "Banff",
        "country": "Canada",
        "description": "Rocky Mountain lakes and snowy trails.",
        "climate": "cold",
        "activities": ["Skiing", "Hiking"],
        "budgetLevel": "high",
        "airportCode": "YYC"
    }
]"#;

pub struct TestApp {
    pub client: Arc<mongodb::Client>,
    pub config: AppConfig,
    pub catalog: DestinationCatalog,
}

impl TestApp {
    /// The Mongo client connects lazily, so routes that never touch the
    /// database work without a running server.
    pub async fn new() -> Self {
        let mongo_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let client = create_mongo_client(&mongo_uri)
            .await
            .expect("valid MongoDB URI");

        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            mongodb_uri: mongo_uri,
            mongodb_database: "smart-travel-advisor-test".to_string(),
            jwt_secret: TEST_SECRET.to_string(),
            destinations_path: "data/destinations.json".to_string(),
            environment: "test".to_string(),
        };

        let catalog = DestinationCatalog::from_json_str(FIXTURE_DESTINATIONS)
            .expect("fixture destinations parse");

        Self {
            client,
            config,
            catalog,
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.client.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(SuitabilityScorer::with_weights(
                SuitabilityWeights::default(),
            )))
            .configure(routes::configure)
    }
}

pub fn bearer_token() -> String {
    let token = generate_token("traveler@example.com", TEST_USER_ID, TEST_SECRET)
        .expect("token encodes");
    format!("Bearer {}", token)
}
