// src/lib.rs

pub mod api;
pub mod app;
pub mod chat;
pub mod config;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod profile;
pub mod prompt;
pub mod status_indicator;
pub mod summary;
pub mod ui;
