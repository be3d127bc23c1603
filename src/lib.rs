//! FrioTrack - Refrigeration Equipment Assignment Registry
//!
//! REST JSON API for tracking refrigeration equipment assigned to clients:
//! clients, equipment, users, assignments and field status records over an
//! in-memory entity store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
