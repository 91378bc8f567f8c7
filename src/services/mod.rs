pub mod auth;
pub mod editor;
pub mod record_store;
pub mod session;
pub mod storage;
