use crate::domain::models::user::ApiUser;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable key-value substrate behind the local caches. Backings are injected
/// (sled on disk in production, an in-memory map in tests) so nothing in the
/// domain touches ambient global storage.
///
/// Reads and writes are synchronous; there is no concurrent mutation in this
/// system, only distinct fixed keys per logical namespace.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;
    fn put(&self, key: &str, value: &[u8]) -> Result<(), AppError>;
    fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// The single remote read-only endpoint the dashboard feeds from.
#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn fetch_raw(&self) -> Result<Vec<ApiUser>, AppError>;
}
