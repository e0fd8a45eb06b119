pub mod contact;
pub mod status_check;

pub use contact::{ContactSubmission, ContactSubmissionCreate, ContactSubmissionResponse};
pub use status_check::{StatusCheck, StatusCheckCreate};
