use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use super::StagedAudio;
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{ConvertedAudio, Transcript};
use crate::infrastructure::observability::sanitize_for_log;

#[derive(Debug, Clone)]
pub struct WhisperOptions {
    pub model: String,
    pub language: String,
    pub download_timeout: Duration,
    pub request_timeout: Duration,
    /// Directory for staged audio; the OS temp dir when `None`.
    pub staging_dir: Option<PathBuf>,
}

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    options: WhisperOptions,
}

#[derive(Deserialize)]
struct WhisperResponse {
    text: Option<String>,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: &str, options: WhisperOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            options,
        }
    }

    async fn download(&self, audio_url: &str) -> Result<Vec<u8>, TranscriptionError> {
        let response = self
            .client
            .get(audio_url)
            .timeout(self.options.download_timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::DownloadFailed(format!("request: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(TranscriptionError::DownloadFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TranscriptionError::DownloadFailed(format!("body: {}", e)))?;

        tracing::debug!(bytes = bytes.len(), "Audio downloaded");

        Ok(bytes.to_vec())
    }

    async fn submit(&self, staged: &StagedAudio) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let audio_data = tokio::fs::read(staged.path())
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("read staged: {}", e)))?;

        let file_part = multipart::Part::bytes(audio_data)
            .file_name("audio.mp3")
            .mime_str("audio/mpeg")
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.options.model.clone())
            .text("language", self.options.language.clone())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(
            model = %self.options.model,
            language = %self.options.language,
            "Sending audio to OpenAI Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(self.options.request_timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(%status, body = %sanitize_for_log(&body), "Whisper API error");
            return Err(TranscriptionError::TranscriptionFailed(format!(
                "status {}",
                status
            )));
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            TranscriptionError::TranscriptionFailed(format!("parse response: {}", e))
        })?;

        let text = result
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TranscriptionError::TranscriptionFailed("empty transcript".to_string())
            })?;

        tracing::info!(chars = text.len(), "OpenAI Whisper transcription completed");

        Ok(Transcript::new(text))
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    #[tracing::instrument(skip(self, audio), fields(audio_url = %audio.audio_url))]
    async fn transcribe(&self, audio: &ConvertedAudio) -> Result<Transcript, TranscriptionError> {
        let bytes = self.download(&audio.audio_url).await?;

        let staged = StagedAudio::stage(self.options.staging_dir.as_deref(), &bytes)
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("stage: {}", e)))?;

        let result = self.submit(&staged).await;

        if let Err(e) = staged.remove() {
            tracing::warn!(error = %e, "Failed to delete staged audio");
        }

        result
    }
}
