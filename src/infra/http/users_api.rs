use crate::domain::models::user::ApiUser;
use crate::domain::ports::UsersApi;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::warn;

pub struct HttpUsersApi {
    client: Client,
    url: String,
}

impl HttpUsersApi {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

// The endpoint has served both a bare array and an envelope object with the
// array under "data". Normalize here; the ambiguity must not leak past this
// boundary. Anything else reads as an empty collection.
pub fn parse_envelope(body: Value) -> Vec<ApiUser> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ApiUser>(item) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Skipping malformed user record: {}", e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn fetch_raw(&self) -> Result<Vec<ApiUser>, AppError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !res.status().is_success() {
            return Err(AppError::FetchFailed(res.status().as_u16()));
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(parse_envelope(body))
    }
}
