pub mod detail_factory;
pub mod format;
pub mod login;
pub mod query;
pub mod seed;
pub mod session_gate;
pub mod stores;
pub mod user_mapper;
pub mod user_service;
