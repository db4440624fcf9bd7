//! MongoDB client management

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::{error, info};

use crate::config::{Config, DEFAULT_DATABASE};

/// Connect to MongoDB and resolve the catalog database
///
/// The server is pinged once. An unreachable server is only logged, since
/// the driver keeps retrying on later operations. A malformed connection
/// string is returned as an error.
pub async fn connect(config: &Config) -> Result<Database, mongodb::error::Error> {
    info!("Connecting to MongoDB...");

    let options = ClientOptions::parse(config.mongo_uri.as_str()).await?;
    let db_name = database_name(config.mongo_db.as_deref(), options.default_database.as_deref());
    let client = Client::with_options(options)?;
    let db = client.database(&db_name);

    if health_check(&db).await {
        info!("MongoDB connected (database: {})", db_name);
    } else {
        error!("MongoDB connection error, continuing with database {}", db_name);
    }

    Ok(db)
}

/// Pick the database name: explicit setting, then the URI's default, then `test`
pub fn database_name(configured: Option<&str>, uri_default: Option<&str>) -> String {
    configured
        .or(uri_default)
        .unwrap_or(DEFAULT_DATABASE)
        .to_string()
}

/// Health check for the database
pub async fn health_check(db: &Database) -> bool {
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => true,
        Err(e) => {
            error!("MongoDB health check failed: {}", e);
            false
        }
    }
}
