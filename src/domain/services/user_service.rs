use crate::domain::models::user::UserRecord;
use crate::domain::ports::UsersApi;
use crate::domain::services::stores::{SelectedUserCache, UsersCache};
use crate::domain::services::user_mapper::map_api_user;
use crate::error::AppError;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// How a load attempt resolved. Cancellation is an outcome, never an error:
/// a superseded request must not surface a message or touch the cache.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Vec<UserRecord>),
    Cancelled,
}

pub struct UserService {
    api: Arc<dyn UsersApi>,
    users_cache: UsersCache,
    selected_cache: SelectedUserCache,
}

impl UserService {
    pub fn new(
        api: Arc<dyn UsersApi>,
        users_cache: UsersCache,
        selected_cache: SelectedUserCache,
    ) -> Self {
        Self {
            api,
            users_cache,
            selected_cache,
        }
    }

    /// Cache-through load of the user collection. A non-empty cached
    /// collection is returned without any network call; otherwise the feed is
    /// fetched once, mapped, and written back before returning.
    pub async fn fetch_users(&self, cancel: CancellationToken) -> Result<FetchOutcome, AppError> {
        if let Some(cached) = self.users_cache.load() {
            if !cached.is_empty() {
                debug!("Serving {} users from cache", cached.len());
                return Ok(FetchOutcome::Loaded(cached));
            }
        }

        if cancel.is_cancelled() {
            return Ok(FetchOutcome::Cancelled);
        }
        let raw = tokio::select! {
            _ = cancel.cancelled() => return Ok(FetchOutcome::Cancelled),
            res = self.api.fetch_raw() => res?,
        };
        if cancel.is_cancelled() {
            return Ok(FetchOutcome::Cancelled);
        }

        let users: Vec<UserRecord> = raw.into_iter().map(map_api_user).collect();
        self.users_cache.save(&users)?;
        info!("Fetched and cached {} users", users.len());
        Ok(FetchOutcome::Loaded(users))
    }

    /// Remembers the row chosen for the detail view (last-write-wins).
    pub fn select_user(&self, user: &UserRecord) -> Result<(), AppError> {
        self.selected_cache.cache(user)
    }

    /// Detail lookup: the full collection wins; the single-entry cache is only
    /// trusted when its id matches the one requested.
    pub fn find_user(&self, collection: &[UserRecord], id: &str) -> Option<UserRecord> {
        if let Some(user) = collection.iter().find(|u| u.id == id) {
            return Some(user.clone());
        }
        self.selected_cache.read().filter(|u| u.id == id)
    }
}
