use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

/// A contact-form submission as stored in the `contact_submissions`
/// collection. `status` is informational only; nothing transitions it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: String,
}

impl ContactSubmission {
    pub fn new(input: ContactSubmissionCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            company: input.company,
            message: input.message,
            submitted_at: Utc::now(),
            status: "new".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmissionCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

impl ContactSubmissionCreate {
    /// Field-level validation, run before any side effect.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if self.message.is_empty() {
            return Err(AppError::Validation(
                "message must not be empty".to_string(),
            ));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ContactSubmissionResponse {
    pub id: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: name.to_string(),
            email: email.to_string(),
            company: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(input("Ada", "ada@example.com", "Hello").validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = input("", "ada@example.com", "Hello").validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn rejects_empty_message() {
        let err = input("Ada", "ada@example.com", "").validate().unwrap_err();
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "a@b", "a b@example.com", "@example.com"] {
            assert!(input("Ada", email, "Hello").validate().is_err(), "{email}");
        }
    }

    #[test]
    fn new_defaults_status_to_new() {
        let submission = ContactSubmission::new(input("Ada", "ada@example.com", "Hello"));
        assert_eq!(submission.status, "new");
        assert!(!submission.id.is_empty());
    }
}
