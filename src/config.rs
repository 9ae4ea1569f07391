use std::env;

pub const DEFAULT_USERS_URL: &str = "https://mocki.io/v1/c4622f50-ce50-4404-b7ba-418d178e1a6b";

#[derive(Clone)]
pub struct Config {
    pub users_url: String,
    pub store_path: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            users_url: env::var("USERS_URL").unwrap_or_else(|_| DEFAULT_USERS_URL.to_string()),
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "./data/dashboard-store".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        }
    }
}
