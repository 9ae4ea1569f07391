use crate::config::Config;
use crate::domain::ports::{KeyValueStore, UsersApi};
use crate::domain::services::stores::{SelectedUserCache, SessionStore, UsersCache};
use crate::domain::services::user_service::UserService;
use crate::error::AppError;
use crate::infra::http::users_api::HttpUsersApi;
use crate::infra::store::sled_store::SledStore;
use crate::state::AppState;
use std::sync::Arc;

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let store: Arc<dyn KeyValueStore> = Arc::new(SledStore::open(&config.store_path)?);
    let api: Arc<dyn UsersApi> = Arc::new(HttpUsersApi::new(config.users_url.clone()));

    let user_service = Arc::new(UserService::new(
        api,
        UsersCache::new(store.clone()),
        SelectedUserCache::new(store.clone()),
    ));

    Ok(AppState {
        config: config.clone(),
        sessions: SessionStore::new(store.clone()),
        store,
        user_service,
    })
}
