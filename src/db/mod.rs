pub mod contact_submissions;
pub mod status_checks;

use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Handle to the document store. Constructed once at startup and shared
/// across handlers; released explicitly via [`Mongo::shutdown`].
#[derive(Clone)]
pub struct Mongo {
    client: Client,
    db: Database,
}

impl Mongo {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);

        // Fail fast if the store is unreachable
        db.run_command(doc! { "ping": 1 }, None).await?;
        tracing::info!(database = %database, "Connected to MongoDB");

        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Waits for in-flight operations and closes the connection pool.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}
