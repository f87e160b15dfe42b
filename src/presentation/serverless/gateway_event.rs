use std::collections::HashMap;

use axum::http::Method;
use serde::{Deserialize, Serialize};

use super::{AdapterError, HostingAdapter, InboundCall, OutboundCall};

/// Inbound event of an API-gateway style serverless host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayEvent {
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    pub path: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// The envelope status mirrors the router's status, so a failed conversion
/// is not reported as 200 to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayEventAdapter;

impl HostingAdapter for GatewayEventAdapter {
    type Event = GatewayEvent;
    type Output = GatewayResponse;

    fn translate(&self, event: GatewayEvent) -> Result<InboundCall, AdapterError> {
        let method = Method::from_bytes(event.http_method.trim().to_uppercase().as_bytes())
            .map_err(|_| AdapterError::InvalidMethod(event.http_method.clone()))?;

        if !event.path.starts_with('/') {
            return Err(AdapterError::InvalidPath(event.path));
        }

        Ok(InboundCall {
            method,
            path: event.path,
            headers: event.headers.into_iter().collect(),
            body: event.body.unwrap_or_default(),
        })
    }

    fn serialize(&self, response: OutboundCall) -> GatewayResponse {
        let mut headers: HashMap<String, String> = response.headers.into_iter().collect();
        headers
            .entry("content-type".to_string())
            .or_insert_with(|| "application/json".to_string());

        GatewayResponse {
            status_code: response.status.as_u16(),
            headers,
            body: response.body,
        }
    }
}
