use async_trait::async_trait;

use crate::domain::{ResolvedMedia, SourceLink};

#[async_trait]
pub trait MediaResolver: Send + Sync {
    async fn resolve(&self, link: &SourceLink) -> Result<ResolvedMedia, ResolverError>;
}

/// The resolver does not distinguish "not found" from "service error".
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("resolution failed: {0}")]
    ResolutionFailed(String),
}
