pub mod mongodb;
pub mod repositories;

pub use self::mongodb::{
    create_mongo_client, get_database, health_check, MongoClient, MongoDatabase,
};
pub use repositories::*;

use std::time::Duration;

use cine_utils::{CineResult, DatabaseConfig};

/// Connect to the configured MongoDB deployment and hand back the database
/// the movie info collection lives in.
pub async fn initialize_database(config: &DatabaseConfig) -> CineResult<MongoDatabase> {
    let client = create_mongo_client(
        &config.mongodb_url,
        Duration::from_secs(config.connection_timeout_seconds),
    )
    .await?;

    Ok(get_database(&client, &config.database_name))
}
