pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod poller;
pub mod presence;
pub mod render;
pub mod routes;
pub mod state;
pub mod store;
