use axum::Json;
use axum::extract::State;

use crate::db;
use crate::error::AppError;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::SharedState;

/// Hard cap on GET /api/status; no pagination beyond this.
const STATUS_LIST_LIMIT: i64 = 1000;

pub async fn create(
    State(state): State<SharedState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(input.client_name);
    db::status_checks::insert(&state.mongo, &check).await?;
    Ok(Json(check))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = db::status_checks::list(&state.mongo, STATUS_LIST_LIMIT).await?;
    Ok(Json(checks))
}
