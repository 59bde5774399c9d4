use std::time::Duration;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use cine_utils::CineResult;

pub type MongoClient = Client;
pub type MongoDatabase = Database;

/// Connect to MongoDB and verify the connection with an admin ping.
///
/// The server selection timeout bounds how long an operation waits for a
/// reachable server, so an unreachable store surfaces as `StoreUnavailable`
/// promptly instead of hanging the caller.
pub async fn create_mongo_client(
    database_url: &str,
    connection_timeout: Duration,
) -> CineResult<MongoClient> {
    let mut options = ClientOptions::parse(database_url).await?;
    options.server_selection_timeout = Some(connection_timeout);

    let client = Client::with_options(options)?;

    // Test connection
    client
        .database("admin")
        .run_command(mongodb::bson::doc! {"ping": 1}, None)
        .await?;

    tracing::info!("Connected to MongoDB database");
    Ok(client)
}

pub fn get_database(client: &MongoClient, database_name: &str) -> MongoDatabase {
    client.database(database_name)
}

pub async fn health_check(client: &MongoClient) -> CineResult<()> {
    client
        .database("admin")
        .run_command(mongodb::bson::doc! {"ping": 1}, None)
        .await?;
    Ok(())
}
