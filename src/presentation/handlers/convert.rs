use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::api_response::{ApiError, ApiResponse};
use crate::application::services::PipelineError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub douyin_url: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn convert_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> impl IntoResponse {
    let raw_link = match &payload {
        Ok(Json(request)) => request.douyin_url.as_deref(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Convert request body rejected");
            None
        }
    };

    match state.pipeline.run(raw_link).await {
        Ok(outcome) => (StatusCode::OK, Json(ApiResponse::success(outcome))).into_response(),
        Err(e) => {
            match &e {
                PipelineError::InvalidInput(_) => {
                    tracing::warn!(error = %e, "Convert request rejected")
                }
                PipelineError::Resolution(_) => {
                    tracing::warn!(error = %e, "Source link could not be resolved")
                }
                _ => tracing::error!(error = %e, "Conversion pipeline failed"),
            }
            ApiError::from(&e).into_response()
        }
    }
}
