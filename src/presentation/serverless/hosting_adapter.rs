use axum::http::{Method, StatusCode};

/// A request in neutral form, ready to be dispatched through the router.
#[derive(Debug, Clone)]
pub struct InboundCall {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The router's answer, before it is wrapped in the host's envelope.
#[derive(Debug, Clone)]
pub struct OutboundCall {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("invalid http method: {0}")]
    InvalidMethod(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Translates between a hosting environment's event shape and plain HTTP calls.
pub trait HostingAdapter: Send + Sync {
    type Event;
    type Output;

    fn translate(&self, event: Self::Event) -> Result<InboundCall, AdapterError>;

    fn serialize(&self, response: OutboundCall) -> Self::Output;
}
