//! Process-wide geocoder access credential.
//!
//! The token is written at most once, either explicitly through
//! [`init_access_token`] at startup or lazily from the environment on the
//! first call to [`access_token`]. Place inputs read it on mount; nothing
//! mutates it afterwards.

use std::env::VarError;
use std::sync::OnceLock;

const TOKEN_VARS: [&str; 2] = ["MAPBOX_ACCESS_TOKEN", "VITE_MAPBOX_ACCESS_TOKEN"];

static ACCESS_TOKEN: OnceLock<Option<String>> = OnceLock::new();

/// Sets the process-wide credential.
///
/// Returns `false` when the credential was already initialized; the earlier
/// value is kept.
pub fn init_access_token(token: Option<String>) -> bool {
    let token = token.filter(|t| !t.trim().is_empty());
    let accepted = ACCESS_TOKEN.set(token).is_ok();
    if !accepted {
        tracing::debug!("geocoder access token already initialized; ignoring new value");
    }
    accepted
}

/// Returns the process-wide credential, reading the environment on first use.
#[must_use]
pub fn access_token() -> Option<&'static str> {
    ACCESS_TOKEN
        .get_or_init(|| read_access_token(|key| std::env::var(key)))
        .as_deref()
}

/// Reads the first non-blank token variable through `lookup`.
pub(crate) fn read_access_token<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    TOKEN_VARS
        .iter()
        .filter_map(|var| lookup(var).ok())
        .map(|raw| raw.trim().to_string())
        .find(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_access_token_prefers_unprefixed_var() {
        let token = read_access_token(|key| match key {
            "MAPBOX_ACCESS_TOKEN" => Ok("pk.primary".to_string()),
            "VITE_MAPBOX_ACCESS_TOKEN" => Ok("pk.secondary".to_string()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(token.as_deref(), Some("pk.primary"));
    }

    #[test]
    fn read_access_token_skips_blank_values() {
        let token = read_access_token(|key| match key {
            "MAPBOX_ACCESS_TOKEN" => Ok(String::new()),
            "VITE_MAPBOX_ACCESS_TOKEN" => Ok(" pk.fallback ".to_string()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(token.as_deref(), Some("pk.fallback"));
    }

    #[test]
    fn read_access_token_absent() {
        assert!(read_access_token(|_| Err(VarError::NotPresent)).is_none());
    }
}
