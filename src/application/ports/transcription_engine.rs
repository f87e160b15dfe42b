use async_trait::async_trait;

use crate::domain::{ConvertedAudio, Transcript};

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &ConvertedAudio) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio download failed: {0}")]
    DownloadFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}
