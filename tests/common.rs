#![allow(dead_code)]

use async_trait::async_trait;
use lending_dashboard::domain::models::user::{AccountNumber, ApiUser, UserStatus};
use lending_dashboard::domain::ports::{KeyValueStore, UsersApi};
use lending_dashboard::domain::services::stores::{SelectedUserCache, SessionStore, UsersCache};
use lending_dashboard::domain::services::user_service::UserService;
use lending_dashboard::error::AppError;
use lending_dashboard::infra::store::memory_store::MemoryStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct MockUsersApi {
    users: Vec<ApiUser>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    fail_status: Option<u16>,
}

impl MockUsersApi {
    pub fn new(users: Vec<ApiUser>) -> Self {
        Self {
            users,
            calls: AtomicUsize::new(0),
            delay: None,
            fail_status: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing(status: u16) -> Self {
        Self {
            users: Vec::new(),
            calls: AtomicUsize::new(0),
            delay: None,
            fail_status: Some(status),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UsersApi for MockUsersApi {
    async fn fetch_raw(&self) -> Result<Vec<ApiUser>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(status) = self.fail_status {
            return Err(AppError::FetchFailed(status));
        }
        Ok(self.users.clone())
    }
}

pub fn api_user(id: &str, full_name: &str, organization: &str, status: UserStatus) -> ApiUser {
    ApiUser {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: format!(
            "{}@{}.com",
            full_name.to_lowercase().replace(' ', "."),
            organization.to_lowercase()
        ),
        phone: "08012345678".to_string(),
        status,
        account_number: AccountNumber::Number(4_512_347_801),
        account_balance: 125_000.50,
        organization: organization.to_string(),
        date_joined: "2020-05-15T10:00:00Z".to_string(),
        profile: None,
    }
}

pub struct TestApp {
    pub store: Arc<dyn KeyValueStore>,
    pub sessions: SessionStore,
    pub users_cache: UsersCache,
    pub selected_cache: SelectedUserCache,
    pub service: Arc<UserService>,
    pub api: Arc<MockUsersApi>,
}

impl TestApp {
    pub fn new(api: MockUsersApi) -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let api = Arc::new(api);
        let users_cache = UsersCache::new(store.clone());
        let selected_cache = SelectedUserCache::new(store.clone());

        let service = Arc::new(UserService::new(
            api.clone(),
            users_cache.clone(),
            selected_cache.clone(),
        ));

        Self {
            sessions: SessionStore::new(store.clone()),
            users_cache,
            selected_cache,
            service,
            api,
            store,
        }
    }
}
