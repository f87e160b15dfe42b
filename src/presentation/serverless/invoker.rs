use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::{AdapterError, HostingAdapter, InboundCall, OutboundCall};
use crate::presentation::handlers::INTERNAL_ERROR_MESSAGE;

/// Runs hosting-environment events through the regular router.
pub struct ServerlessInvoker<A> {
    router: Router,
    adapter: A,
}

impl<A: HostingAdapter> ServerlessInvoker<A> {
    pub fn new(router: Router, adapter: A) -> Self {
        Self { router, adapter }
    }

    pub async fn invoke(&self, event: A::Event) -> A::Output {
        let outbound = match self.adapter.translate(event) {
            Ok(call) => self.dispatch(call).await,
            Err(e) => {
                tracing::warn!(error = %e, "Serverless event could not be translated");
                rejected(StatusCode::BAD_REQUEST, &e)
            }
        };
        self.adapter.serialize(outbound)
    }

    async fn dispatch(&self, call: InboundCall) -> OutboundCall {
        let mut builder = Request::builder()
            .method(call.method)
            .uri(&call.path)
            .header(CONTENT_TYPE, "application/json");

        for (name, value) in &call.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) if name != CONTENT_TYPE => {
                    builder = builder.header(name, value);
                }
                _ => tracing::debug!(header = %name, "Skipping event header"),
            }
        }

        let request = match builder.body(Body::from(call.body)) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Serverless event produced an invalid request");
                return rejected(
                    StatusCode::BAD_REQUEST,
                    &AdapterError::InvalidPath(call.path),
                );
            }
        };

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        match axum::body::to_bytes(response.into_body(), usize::MAX).await {
            Ok(bytes) => OutboundCall {
                status,
                headers,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to read router response body");
                OutboundCall {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    headers: Vec::new(),
                    body: json!({ "success": false, "error": INTERNAL_ERROR_MESSAGE }).to_string(),
                }
            }
        }
    }
}

fn rejected(status: StatusCode, error: &AdapterError) -> OutboundCall {
    OutboundCall {
        status,
        headers: Vec::new(),
        body: json!({ "success": false, "error": error.to_string() }).to_string(),
    }
}
