use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::db;
use crate::error::AppError;
use crate::models::{ContactSubmission, ContactSubmissionCreate, ContactSubmissionResponse};
use crate::state::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    Json(input): Json<ContactSubmissionCreate>,
) -> Result<(StatusCode, Json<ContactSubmissionResponse>), AppError> {
    input.validate()?;

    let submission = ContactSubmission::new(input.clone());
    db::contact_submissions::insert(&state.mongo, &submission).await?;

    // Synchronous notification; a failure here surfaces as a 500 even though
    // the submission is already persisted (no rollback)
    if let Some(mailer) = &state.mailer {
        mailer
            .send_contact_notification(&input)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %input.email,
                    id = %submission.id,
                    "Failed to send email notification: {e}"
                );
                AppError::Email(e)
            })?;
        tracing::info!(email = %input.email, "Email notification sent");
    } else {
        tracing::warn!(id = %submission.id, "SMTP not configured, skipping email notification");
    }

    tracing::info!(id = %submission.id, "Contact submission saved");

    Ok((
        StatusCode::CREATED,
        Json(ContactSubmissionResponse {
            id: submission.id,
            message: "Thank you for reaching out. I'll get back to you soon.".to_string(),
            submitted_at: submission.submitted_at,
        }),
    ))
}
