use env_logger::Env;
use mongodb::bson::doc;
use std::process::ExitCode;

use travel_advisor_api::{
    db::mongo::create_mongo_client,
    models::destination::Destination,
    services::destination_catalog::DESTINATIONS_COLLECTION,
    ApiError, AppConfig, DestinationCatalog,
};

/// Replace the destinations collection with the JSON catalog.
async fn seed() -> Result<usize, ApiError> {
    let config = AppConfig::from_env()?;
    let catalog = DestinationCatalog::from_json_file(&config.destinations_path)?;

    let client = create_mongo_client(&config.mongodb_uri).await?;
    let collection: mongodb::Collection<Destination> = client
        .database(&config.mongodb_database)
        .collection(DESTINATIONS_COLLECTION);

    let removed = collection.delete_many(doc! {}).await?;
    log::info!("Removed {} existing destinations", removed.deleted_count);

    if catalog.is_empty() {
        return Ok(0);
    }
    let inserted = collection.insert_many(catalog.all()).await?;
    Ok(inserted.inserted_ids.len())
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    match seed().await {
        Ok(count) => {
            log::info!("Successfully seeded {} destinations", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Error seeding destinations: {}", err);
            ExitCode::FAILURE
        }
    }
}
