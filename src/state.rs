use crate::config::Config;
use crate::domain::ports::KeyValueStore;
use crate::domain::services::stores::SessionStore;
use crate::domain::services::user_service::UserService;
use std::sync::Arc;

/// Shared wiring handed to the presentation layer. Cloning is cheap; all
/// members are handles.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub sessions: SessionStore,
    pub user_service: Arc<UserService>,
}
