pub mod app_config;
pub mod brand;
pub mod config;
pub mod credential;

pub use app_config::{AppConfig, Environment};
pub use brand::{brand, BrandConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use credential::{access_token, init_access_token};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
