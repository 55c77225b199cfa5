//! Geocoding response types.
//!
//! Field names follow the provider's forward-geocoding `FeatureCollection`.
//! A few are renamed on the Rust side:
//!
//! | JSON         | Rust              |
//! |--------------|-------------------|
//! | `place_name` | `display_name`    |
//! | `text`       | `primary_text`    |
//! | `address`    | `street_address`  |
//! | `place_type` | `category_tags`   |
//!
//! `address` is the house number only and is absent for anything that is
//! not an address feature. `context` lists the administrative hierarchy from
//! the most local entry outwards; each `id` is `"{category}.{provider id}"`,
//! e.g. `"region.8717"`.

use serde::{Deserialize, Serialize};

use crate::category::ProviderCategory;

/// Top-level response from `GET /geocoding/v5/mapbox.places/{query}.json`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<SelectionResult>,
    #[serde(default)]
    pub attribution: Option<String>,
}

/// A place chosen in the geocoder widget.
///
/// Produced by the provider; the binding only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub id: String,
    #[serde(rename = "place_name", default)]
    pub display_name: String,
    #[serde(rename = "text", default)]
    pub primary_text: String,
    #[serde(rename = "address", default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default)]
    pub context: Vec<ContextEntry>,
    pub geometry: Geometry,
    #[serde(rename = "place_type", default)]
    pub category_tags: Vec<String>,
}

/// One level of the administrative hierarchy around a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Geometry {
    #[must_use]
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

impl ContextEntry {
    /// Category part of the id (`"region"` for `"region.8717"`).
    #[must_use]
    pub fn category_id(&self) -> &str {
        self.id.split_once('.').map_or(self.id.as_str(), |(head, _)| head)
    }
}

impl SelectionResult {
    /// First context entry of the given category, if any.
    #[must_use]
    pub fn context_entry(&self, category: ProviderCategory) -> Option<&ContextEntry> {
        let marker = category.context_prefix();
        self.context.iter().find(|entry| entry.id.starts_with(&marker))
    }

    #[must_use]
    pub fn has_tag(&self, category: ProviderCategory) -> bool {
        self.category_tags
            .iter()
            .any(|tag| tag == category.as_str())
    }

    /// Full formatted name, or the short label when the provider sent none.
    #[must_use]
    pub fn full_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.primary_text
        } else {
            &self.display_name
        }
    }
}
