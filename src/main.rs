use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use std::io;

use travel_advisor_api::{
    db, routes, AppConfig, DestinationCatalog, SuitabilityScorer,
};

fn to_io_error<E: std::fmt::Display>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|err| {
        log::error!("{}", err);
        to_io_error(err)
    })?;

    let client = db::mongo::create_mongo_client(&config.mongodb_uri)
        .await
        .map_err(|err| {
            log::error!("MongoDB URI may be incorrect: {}", err);
            to_io_error(err)
        })?;

    match db::mongo::ping(&client, &config.mongodb_database).await {
        Ok(_) => log::info!("Successfully connected to MongoDB"),
        Err(e) => log::warn!(
            "Connected to MongoDB but ping failed, some functionality might be impaired: {}",
            e
        ),
    }
    if let Err(e) = db::mongo::ensure_indexes(&client, &config.mongodb_database).await {
        log::warn!("Failed to create indexes: {}", e);
    }

    let catalog = DestinationCatalog::load(
        &client,
        &config.mongodb_database,
        &config.destinations_path,
    )
    .await
    .map_err(|err| {
        log::error!("{}", err);
        to_io_error(err)
    })?;

    let scorer = web::Data::new(SuitabilityScorer::new());
    let catalog = web::Data::new(catalog);
    let client = web::Data::new(client);
    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    log::info!("Starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(client.clone())
            .app_data(config.clone())
            .app_data(catalog.clone())
            .app_data(scorer.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
