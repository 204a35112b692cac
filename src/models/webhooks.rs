//! Webhook ingestion wire types.

use serde::{Deserialize, Serialize};

/// Message payload pushed into the service as if it were received mail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Webhook {
    pub from: String,
    pub subject: String,
    pub text: String,
    pub to: String,
}

/// `{id, status}` acknowledgement returned by webhook ingestion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseStatusWithId {
    pub id: String,
    pub status: String,
}
