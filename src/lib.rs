pub mod app;
pub mod cart;
pub mod catalog;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod mailer;
pub mod middleware;
pub mod models;
pub mod order_log;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
