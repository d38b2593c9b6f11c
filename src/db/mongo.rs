use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, IndexModel,
};
use std::sync::Arc;
use std::time::Duration;

use crate::models::user::User;

pub const USERS_COLLECTION: &str = "Users";
pub const SAVED_TRIPS_COLLECTION: &str = "SavedTrips";

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;
    Ok(Arc::new(client))
}

/// Ping the server; failures are reported but not fatal.
pub async fn ping(client: &Client, database: &str) -> Result<(), mongodb::error::Error> {
    client
        .database(database)
        .run_command(doc! {"ping": 1})
        .await
        .map(|_| ())
}

pub async fn ensure_indexes(client: &Client, database: &str) -> Result<(), mongodb::error::Error> {
    let users: mongodb::Collection<User> = client.database(database).collection(USERS_COLLECTION);
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    users.create_index(index).await?;
    Ok(())
}
