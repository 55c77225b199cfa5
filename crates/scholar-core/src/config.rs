use crate::app_config::{AppConfig, Environment};
use crate::credential::read_access_token;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup closure keeps the parsing testable
/// with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("SCHOLAR_ENV", "development"))?;
    let bind_addr = parse_addr("SCHOLAR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SCHOLAR_LOG_LEVEL", "info");
    let landing_path = lookup("SCHOLAR_LANDING_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let mapbox_access_token = read_access_token(&lookup);
    let geocoder_base_url = or_default("SCHOLAR_GEOCODER_BASE_URL", "https://api.mapbox.com/");
    let geocoder_request_timeout_secs = parse_u64("SCHOLAR_GEOCODER_TIMEOUT_SECS", "10")?;
    if geocoder_request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SCHOLAR_GEOCODER_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let geocoder_user_agent = or_default(
        "SCHOLAR_GEOCODER_USER_AGENT",
        "scholar/0.1 (place-autocomplete)",
    );

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        landing_path,
        mapbox_access_token,
        geocoder_base_url,
        geocoder_request_timeout_secs,
        geocoder_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SCHOLAR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
