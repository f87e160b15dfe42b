use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ConvertedAudio, ResolvedMedia};

#[async_trait]
pub trait AudioConverter: Send + Sync {
    /// Submits a conversion job for the media and waits for its audio result.
    async fn convert_to_audio(
        &self,
        media: &ResolvedMedia,
    ) -> Result<ConvertedAudio, ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("conversion did not finish within {0:?}")]
    Timeout(Duration),
    #[error("malformed conversion result: {0}")]
    MalformedResult(String),
}
