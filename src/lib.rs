//! # Roster Service
//!
//! Student, course and enrollment records behind a REST API, plus marks
//! reports computed from CSV sheets.
//!
//! ## Architecture
//!
//! - **domain**: entities, repository traits and marks aggregation
//! - **application**: enrollment and marks-report services
//! - **infrastructure**: SeaORM persistence and the CSV marks loader
//! - **interfaces**: REST API (axum + Swagger) and text report rendering
//! - **shared**: error taxonomy, input validation, shutdown signal

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::create_api_router;
