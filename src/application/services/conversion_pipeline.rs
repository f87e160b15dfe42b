use std::sync::Arc;

use crate::application::ports::{
    AudioConverter, ConversionError, MediaResolver, ResolverError, TranscriptionEngine,
    TranscriptionError,
};
use crate::domain::{InvalidInput, SourceLink};

/// Result of a successful run: the transcript plus the media URL it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub text: String,
    pub video_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("missing credentials: {}", .0.join(", "))]
    Misconfigured(Vec<&'static str>),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("resolve: {0}")]
    Resolution(#[from] ResolverError),
    #[error("convert: {0}")]
    Conversion(#[from] ConversionError),
    #[error("transcribe: {0}")]
    Transcription(#[from] TranscriptionError),
}

struct PipelineStages {
    resolver: Arc<dyn MediaResolver>,
    converter: Arc<dyn AudioConverter>,
    transcriber: Arc<dyn TranscriptionEngine>,
}

/// Resolve, convert, then transcribe. Each stage runs only if the previous one
/// succeeded; a failed stage discards everything produced before it.
pub struct ConversionPipeline {
    stages: Result<PipelineStages, Vec<&'static str>>,
}

impl ConversionPipeline {
    pub fn new(
        resolver: Arc<dyn MediaResolver>,
        converter: Arc<dyn AudioConverter>,
        transcriber: Arc<dyn TranscriptionEngine>,
    ) -> Self {
        Self {
            stages: Ok(PipelineStages {
                resolver,
                converter,
                transcriber,
            }),
        }
    }

    /// A pipeline that rejects every request because credentials are absent.
    pub fn misconfigured(missing: Vec<&'static str>) -> Self {
        Self {
            stages: Err(missing),
        }
    }

    pub async fn run(&self, raw_link: Option<&str>) -> Result<ConversionOutcome, PipelineError> {
        let stages = self
            .stages
            .as_ref()
            .map_err(|missing| PipelineError::Misconfigured(missing.clone()))?;

        let link = SourceLink::parse(raw_link)?;

        tracing::info!(link = %link, "Resolving source link");
        let media = stages.resolver.resolve(&link).await?;

        tracing::info!(media_url = %media.media_url, "Converting media to audio");
        let audio = stages.converter.convert_to_audio(&media).await?;

        tracing::info!(audio_url = %audio.audio_url, "Transcribing audio");
        let transcript = stages.transcriber.transcribe(&audio).await?;

        tracing::info!(chars = transcript.text.len(), "Pipeline completed");

        Ok(ConversionOutcome {
            text: transcript.text,
            video_url: media.media_url,
        })
    }
}
