pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod email;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Mongo;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};

pub fn build_app(mongo: Mongo, config: Config) -> (Router, SharedState) {
    // Build notification mailer (optional: without SMTP config the contact
    // endpoint still persists, it just skips the email)
    let mailer = config.smtp.as_ref().and_then(|smtp| match Mailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP notifications configured");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!("SMTP not available: {e}");
            None
        }
    });

    let cors = cors_layer(&config.cors_origins);

    let state: SharedState = Arc::new(AppState {
        mongo,
        config,
        mailer,
    });

    let app = routes::api_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        // Wildcard origins cannot carry credentials
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    }
}
