// Library root for the campus event catalog service

pub mod api;
pub mod config;
pub mod core;
pub mod engine;
pub mod loader;
pub mod state;
