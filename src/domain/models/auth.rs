use serde::{Deserialize, Serialize};

// Created on successful login validation. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub email: String,
    pub created_at: i64,
}

impl AuthSession {
    // Expiry hook: sessions currently never expire. Callers must gate on this
    // rather than on bare presence so a TTL can be added here later.
    pub fn is_valid(&self) -> bool {
        true
    }
}
