pub mod contact;
pub mod status;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/", get(root))
        .route("/api/status", post(status::create).get(status::list))
        .route("/api/contact", post(contact::create))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}
