use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Extension, Json,
};
use chrono::{Datelike, Utc};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

pub(super) async fn landing_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Html<String>, ApiError> {
    scholar_landing::render_landing(&state.brand, &state.landing, Utc::now().year())
        .map(Html)
        .map_err(|e| {
            tracing::error!(error = %e, "landing page rendering failed");
            ApiError::new(req_id.0, "internal_error", "landing page rendering failed")
        })
}

pub(super) async fn get_brand(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: state.brand.as_ref().clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_landing(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: state.landing.as_ref().clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}
