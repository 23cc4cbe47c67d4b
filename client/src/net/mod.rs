pub mod api;
pub mod auth;
pub mod token_store;
pub mod types;
