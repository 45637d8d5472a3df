//! E-waste impact server
//!
//! Turns e-waste collection activity (pickups → devices → disposition)
//! into environmental-impact figures and reports.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod impact;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
