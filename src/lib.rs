pub mod api;
pub mod auth;
pub mod config;
pub mod ingestion;
pub mod analysis;
pub mod graph;
