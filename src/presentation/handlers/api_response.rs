use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{ConversionOutcome, PipelineError};
use crate::domain::InvalidInput;

pub const SUCCESS_MESSAGE: &str = "转换成功";
pub const MISCONFIGURED_MESSAGE: &str = "服务配置不完整，请联系管理员";
pub const MISSING_LINK_MESSAGE: &str = "请提供douyin_url参数";
pub const EMPTY_LINK_MESSAGE: &str = "抖音链接不能为空";
pub const RESOLUTION_FAILED_MESSAGE: &str = "无法解析抖音视频链接，请检查链接是否正确";
pub const CONVERSION_FAILED_MESSAGE: &str = "视频转音频失败，请稍后重试";
pub const TRANSCRIPTION_FAILED_MESSAGE: &str = "语音识别失败，请确保视频包含清晰的语音内容";
pub const INTERNAL_ERROR_MESSAGE: &str = "服务器内部错误";

/// Envelope returned by `/api/convert`; either the success or the error
/// fields are populated, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success(outcome: ConversionOutcome) -> Self {
        Self {
            success: true,
            text: Some(outcome.text),
            video_url: Some(outcome.video_url),
            error: None,
            message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            video_url: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

/// A failure already reduced to what the caller is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl From<&PipelineError> for ApiError {
    fn from(error: &PipelineError) -> Self {
        let (status, message) = match error {
            PipelineError::Misconfigured(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MISCONFIGURED_MESSAGE)
            }
            PipelineError::InvalidInput(InvalidInput::MissingLink) => {
                (StatusCode::BAD_REQUEST, MISSING_LINK_MESSAGE)
            }
            PipelineError::InvalidInput(InvalidInput::EmptyLink) => {
                (StatusCode::BAD_REQUEST, EMPTY_LINK_MESSAGE)
            }
            PipelineError::Resolution(_) => (StatusCode::BAD_REQUEST, RESOLUTION_FAILED_MESSAGE),
            PipelineError::Conversion(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, CONVERSION_FAILED_MESSAGE)
            }
            PipelineError::Transcription(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, TRANSCRIPTION_FAILED_MESSAGE)
            }
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::failure(self.message))).into_response()
    }
}
