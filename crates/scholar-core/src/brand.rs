//! Brand strings shown across the public pages.
//!
//! Every value comes from the environment with a static fallback, so a bare
//! deployment still renders a coherent site. Empty variables count as unset.

use std::env::VarError;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "Scholarship";
pub const DEFAULT_SUPPORT_EMAIL: &str = "hello@example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub logo_text: String,
    pub hero_title: String,
    pub copyright_holder: String,
    pub support_email: String,
    pub support_phone: String,
    pub address: String,
    pub meta_description: String,
}

impl BrandConfig {
    /// Resolve the brand from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Resolve the brand through an arbitrary env-var lookup.
    ///
    /// Each field checks `BRAND_*` first, then the `VITE_BRAND_*` spelling
    /// used by the frontend build, then falls back to the application name.
    /// The copyright holder and meta description fall back to the brand name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let get = |suffix: &str| -> Option<String> {
            [suffix.to_string(), format!("VITE_{suffix}")]
                .iter()
                .filter_map(|key| lookup(key.as_str()).ok())
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let app_name = get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let name = get("BRAND_NAME").unwrap_or_else(|| app_name.clone());
        let logo_text = get("BRAND_LOGO_TEXT").unwrap_or_else(|| app_name.clone());
        let hero_title = get("BRAND_HERO_TITLE").unwrap_or_else(|| app_name.clone());
        let copyright_holder = get("BRAND_COPYRIGHT_HOLDER").unwrap_or_else(|| name.clone());
        let meta_description = get("BRAND_META_DESCRIPTION").unwrap_or_else(|| {
            format!(
                "{name} provides financial support to high school and college students. \
                 Apply now for academic funding and mentorship opportunities."
            )
        });

        Self {
            logo_text,
            hero_title,
            copyright_holder,
            support_email: get("BRAND_SUPPORT_EMAIL")
                .unwrap_or_else(|| DEFAULT_SUPPORT_EMAIL.to_string()),
            support_phone: get("BRAND_SUPPORT_PHONE").unwrap_or_default(),
            address: get("BRAND_ADDRESS").unwrap_or_default(),
            meta_description,
            name,
        }
    }

    /// Footer copyright line for the given year.
    #[must_use]
    pub fn copyright_notice(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.copyright_holder)
    }
}

static BRAND: OnceLock<BrandConfig> = OnceLock::new();

/// Process-wide brand, read from the environment once.
pub fn brand() -> &'static BrandConfig {
    BRAND.get_or_init(BrandConfig::from_env)
}

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;
