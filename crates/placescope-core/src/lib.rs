//! Shared domain types and configuration for placescope.
//!
//! Everything here is plain data: the canonical location and business-detail
//! records every provider adapter normalizes into, plus the environment
//! configuration consumed by the binary.

pub mod app_config;
pub mod business;
pub mod config;
pub mod location;
pub mod status;

pub use app_config::{AppConfig, DetailRole, Environment};
pub use business::{has_text, BusinessDetailRecord, SocialLinks, WebsiteAnalysisRecord};
pub use config::{load_app_config, load_app_config_from_env};
pub use location::{BusinessType, Coordinates, LocationResult, SearchParams, SourceTag};
pub use status::{KeyType, ServiceStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
