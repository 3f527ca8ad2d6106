pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;
