//! Widget settings for browser-side place inputs.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use scholar_places::{is_country_code, ComponentRestrictions, TypeFilter, WidgetConfig};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct PlacesOptionsQuery {
    /// Comma-separated abstract place types.
    types: Option<String>,
    /// Comma-separated ISO 3166-1 alpha-2 codes.
    country: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct PlacesOptionsData {
    enabled: bool,
    types: Option<String>,
    countries: String,
    placeholder: String,
    limit: u8,
    min_length: usize,
    fuzzy_match: bool,
    routing: bool,
}

pub(super) async fn get_places_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PlacesOptionsQuery>,
) -> Result<Json<ApiResponse<PlacesOptionsData>>, ApiError> {
    let types = match query.types.as_deref() {
        Some(raw) => TypeFilter::parse(split_list(raw)),
        None => TypeFilter::regions_and_localities(),
    };
    let restrictions = match query.country.as_deref() {
        Some(raw) => {
            let codes: Vec<&str> = split_list(raw).collect();
            if let Some(bad) = codes.iter().find(|c| !is_country_code(c)) {
                return Err(ApiError::new(
                    req_id.0,
                    "validation_error",
                    format!("invalid country code '{bad}'; expected two letters"),
                ));
            }
            ComponentRestrictions::countries(codes.iter().map(|c| c.to_ascii_lowercase()))
        }
        None => ComponentRestrictions::default(),
    };

    let options = WidgetConfig {
        types,
        restrictions,
        ..WidgetConfig::default()
    }
    .options("");

    Ok(Json(ApiResponse {
        data: PlacesOptionsData {
            enabled: state.geocoding_enabled,
            types: options.types,
            countries: options.countries,
            placeholder: options.placeholder,
            limit: options.limit,
            min_length: options.min_length,
            fuzzy_match: options.fuzzy_match,
            routing: options.routing,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
