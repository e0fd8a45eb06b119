use std::net::SocketAddr;

use mongodb::bson::{Document, doc};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use uuid::Uuid;

use contact_api::config::{Config, SmtpConfig};
use contact_api::db::Mongo;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub mongo: Mongo,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Make a GET request, return (body, status).
    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// Make a POST request with JSON body, return (body, status).
    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        (body, status)
    }

    /// Count documents in a collection of the test database.
    pub async fn count(&self, collection: &str) -> u64 {
        self.mongo
            .database()
            .collection::<Document>(collection)
            .count_documents(doc! {}, None)
            .await
            .expect("count_documents failed")
    }

    /// Fetch a single raw document matching the filter.
    pub async fn find_one(&self, collection: &str, filter: Document) -> Option<Document> {
        self.mongo
            .database()
            .collection::<Document>(collection)
            .find_one(filter, None)
            .await
            .expect("find_one failed")
    }
}

/// Spawn a test app without SMTP (notifications are skipped).
pub async fn spawn_app() -> TestApp {
    spawn_app_with_smtp(None).await
}

/// Spawn a test app with a fresh uniquely named database.
pub async fn spawn_app_with_smtp(smtp: Option<SmtpConfig>) -> TestApp {
    let _ = dotenvy::dotenv();

    let mongo_url =
        std::env::var("MONGO_URL").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());

    let db_name = format!("contact_api_test_{}", Uuid::new_v4().simple());

    let mongo = Mongo::connect(&mongo_url, &db_name)
        .await
        .expect("Failed to connect to MongoDB for tests");

    let config = Config {
        mongo_url,
        db_name: db_name.clone(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        cors_origins: vec!["*".to_string()],
        log_level: "warn".to_string(),
        smtp,
    };

    let (app, _state) = contact_api::build_app(mongo.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        mongo,
        client,
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    app.mongo
        .database()
        .drop(None)
        .await
        .unwrap_or_else(|e| panic!("Failed to drop test database {}: {e}", app.db_name));
}
