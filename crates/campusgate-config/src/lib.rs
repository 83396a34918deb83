//! # Campusgate Config
//!
//! Configuration types for Campusgate.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`features`]: Feature flag sources
//! - [`i18n`]: Supported languages and the default language
//! - [`storage`]: Where user preferences (sidebar groups) are persisted
//! - [`server`]: Listen address
//!
//! Invalid or missing values fall back to defaults; loading configuration
//! never fails.
//!
//! # Example
//!
//! ```ignore
//! use campusgate_config::{CorsConfig, FeatureFlagsConfig, JwtConfig, LocalizationConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let features = FeatureFlagsConfig::from_env();
//! let languages = LocalizationConfig::from_env();
//! ```

pub mod cors;
pub mod features;
pub mod i18n;
pub mod jwt;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use features::FeatureFlagsConfig;
pub use i18n::LocalizationConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Split a comma separated list, trimming entries and dropping empty ones.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
