pub mod config;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;
