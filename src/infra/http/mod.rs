pub mod users_api;
