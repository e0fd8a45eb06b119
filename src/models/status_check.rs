use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single append-only status-check record. Id and timestamp are assigned
/// server-side, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
