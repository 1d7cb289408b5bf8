pub mod api;
pub mod config;
pub mod errors;
pub mod lang;
pub mod models;
pub mod permissions;
pub mod session;
pub mod ui;
