use crate::domain::ports::KeyValueStore;
use crate::error::AppError;
use sled::Db;

/// Durable on-disk backing for the local caches. One tree, distinct fixed
/// keys per namespace.
pub struct SledStore {
    db: Db,
}

impl SledStore {
    pub fn open(path: &str) -> Result<Self, AppError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.db.get(key)?.map(|v| v.to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        self.db.insert(key, value)?;
        self.db.flush()?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), AppError> {
        self.db.remove(key)?;
        self.db.flush()?;
        Ok(())
    }
}
