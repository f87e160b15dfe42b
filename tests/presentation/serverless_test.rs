use std::collections::HashMap;

use serde_json::{Value, json};

use douyin_scribe::application::services::ConversionPipeline;
use douyin_scribe::presentation::serverless::{
    AdapterError, GatewayEvent, GatewayEventAdapter, HostingAdapter, ServerlessInvoker,
};
use douyin_scribe::presentation::{AppState, create_router};

use crate::helpers::{MockConverter, MockResolver, MockTranscriber, pipeline_with};

fn event(method: &str, path: &str, body: Option<&str>) -> GatewayEvent {
    GatewayEvent {
        http_method: method.to_string(),
        path: path.to_string(),
        headers: HashMap::new(),
        body: body.map(str::to_string),
    }
}

fn invoker_with(pipeline: ConversionPipeline) -> ServerlessInvoker<GatewayEventAdapter> {
    ServerlessInvoker::new(create_router(AppState::new(pipeline)), GatewayEventAdapter)
}

fn happy_invoker() -> ServerlessInvoker<GatewayEventAdapter> {
    let resolver = MockResolver::succeeding("https://cdn/video.mp4");
    let converter = MockConverter::succeeding("https://cdn/audio.mp3");
    let transcriber = MockTranscriber::succeeding("hello world");
    invoker_with(pipeline_with(&resolver, &converter, &transcriber))
}

#[test]
fn given_raw_event_json_when_deserializing_then_optional_fields_default() {
    let event: GatewayEvent =
        serde_json::from_str(r#"{"httpMethod": "GET", "path": "/api/health"}"#).unwrap();

    assert_eq!(event.http_method, "GET");
    assert!(event.body.is_none());
    assert!(event.headers.is_empty());
}

#[test]
fn given_lowercase_method_when_translating_then_normalized() {
    let call = GatewayEventAdapter
        .translate(event("post", "/api/convert", Some("{}")))
        .unwrap();

    assert_eq!(call.method, axum::http::Method::POST);
    assert_eq!(call.body, "{}");
}

#[test]
fn given_invalid_method_when_translating_then_adapter_error() {
    let result = GatewayEventAdapter.translate(event("GE T", "/", None));

    assert!(matches!(result, Err(AdapterError::InvalidMethod(_))));
}

#[test]
fn given_relative_path_when_translating_then_adapter_error() {
    let result = GatewayEventAdapter.translate(event("GET", "api/health", None));

    assert!(matches!(result, Err(AdapterError::InvalidPath(_))));
}

#[tokio::test]
async fn given_health_event_when_invoking_then_envelope_wraps_health_payload() {
    let response = happy_invoker()
        .invoke(event("GET", "/api/health", None))
        .await;

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(body["status"], "healthy");
    assert!(
        response
            .headers
            .get("content-type")
            .is_some_and(|v| v.contains("application/json"))
    );
}

#[tokio::test]
async fn given_convert_event_when_invoking_then_envelope_carries_pipeline_result() {
    let response = happy_invoker()
        .invoke(event(
            "POST",
            "/api/convert",
            Some(r#"{"douyin_url": "https://v.douyin.com/abc"}"#),
        ))
        .await;

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "text": "hello world",
            "video_url": "https://cdn/video.mp4",
            "message": "转换成功"
        })
    );
}

#[tokio::test]
async fn given_failing_convert_event_when_invoking_then_envelope_status_mirrors_inner_status() {
    let invoker = invoker_with(ConversionPipeline::misconfigured(vec!["resolver.token"]));

    let response = invoker
        .invoke(event(
            "POST",
            "/api/convert",
            Some(r#"{"douyin_url": "https://v.douyin.com/abc"}"#),
        ))
        .await;

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(response.status_code, 500);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn given_untranslatable_event_when_invoking_then_bad_request_envelope() {
    let response = happy_invoker().invoke(event("GE T", "/", None)).await;

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(response.status_code, 400);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("invalid http method"));
}

#[tokio::test]
async fn given_event_with_request_id_when_invoking_then_header_is_echoed() {
    let mut health = event("GET", "/api/health", None);
    health
        .headers
        .insert("x-request-id".to_string(), "evt-7".to_string());

    let response = happy_invoker().invoke(health).await;

    assert_eq!(
        response.headers.get("x-request-id").map(String::as_str),
        Some("evt-7")
    );
}
