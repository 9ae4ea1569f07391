use crate::domain::models::auth::AuthSession;
use crate::domain::models::user::UserRecord;
use crate::domain::ports::KeyValueStore;
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

// One fixed key per logical namespace; the substrate is shared.
pub const SESSION_KEY: &str = "auth_session";
pub const USERS_KEY: &str = "lendsqr_users_v1";
pub const SELECTED_USER_KEY: &str = "lendsqr_selected_user";

// Missing keys and malformed bytes both read as "no cached value". A stale or
// corrupt cache entry must never take a screen down.
fn read_json<T: DeserializeOwned>(store: &Arc<dyn KeyValueStore>, key: &str) -> Option<T> {
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            warn!("Storage read failed for {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding malformed cache entry {}: {}", key, e);
            None
        }
    }
}

fn write_json<T: Serialize>(
    store: &Arc<dyn KeyValueStore>,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let bytes = serde_json::to_vec(value)?;
    store.put(key, &bytes)
}

/// Authenticated-session marker.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn set(&self, session: &AuthSession) -> Result<(), AppError> {
        write_json(&self.store, SESSION_KEY, session)
    }

    pub fn get(&self) -> Option<AuthSession> {
        read_json(&self.store, SESSION_KEY)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.delete(SESSION_KEY)
    }
}

/// The full mapped user collection as one serialized blob. Cache-through with
/// no expiry: a non-empty entry short-circuits the remote fetch entirely.
/// See DESIGN.md for why there is deliberately no invalidation path.
#[derive(Clone)]
pub struct UsersCache {
    store: Arc<dyn KeyValueStore>,
}

impl UsersCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save(&self, users: &[UserRecord]) -> Result<(), AppError> {
        write_json(&self.store, USERS_KEY, &users)
    }

    pub fn load(&self) -> Option<Vec<UserRecord>> {
        read_json(&self.store, USERS_KEY)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.delete(USERS_KEY)
    }
}

/// The most-recently-selected user, overwritten on every selection.
#[derive(Clone)]
pub struct SelectedUserCache {
    store: Arc<dyn KeyValueStore>,
}

impl SelectedUserCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn cache(&self, user: &UserRecord) -> Result<(), AppError> {
        write_json(&self.store, SELECTED_USER_KEY, user)
    }

    pub fn read(&self) -> Option<UserRecord> {
        read_json(&self.store, SELECTED_USER_KEY)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.delete(SELECTED_USER_KEY)
    }
}
