use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// Static description of the service, served at `/`.
pub async fn service_info_handler() -> impl IntoResponse {
    Json(json!({
        "name": "抖音视频转文字API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/convert": {
                "description": "将抖音视频转换为文字",
                "parameters": {
                    "douyin_url": "string - 抖音视频链接"
                },
                "example": {
                    "douyin_url": "https://v.douyin.com/..."
                }
            },
            "GET /api/health": {
                "description": "检查API健康状态"
            }
        },
        "usage_example": {
            "curl": "curl -X POST https://your-api-host/api/convert -H \"Content-Type: application/json\" -d '{\"douyin_url\": \"你的抖音链接\"}'"
        }
    }))
}
