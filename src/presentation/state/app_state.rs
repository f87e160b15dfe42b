use std::sync::Arc;

use crate::application::ports::{ConversionError, ResolverError};
use crate::application::services::ConversionPipeline;
use crate::infrastructure::audio::{OpenAiWhisperEngine, WhisperOptions};
use crate::infrastructure::conversion::{ConversionOptions, FreeConvertClient};
use crate::infrastructure::resolver::XiazaitoolResolver;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ConversionPipeline>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("resolver client: {0}")]
    Resolver(#[from] ResolverError),
    #[error("conversion client: {0}")]
    Conversion(#[from] ConversionError),
}

impl AppState {
    pub fn new(pipeline: ConversionPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Wires the vendor clients from settings. Missing credentials do not fail
    /// startup; the pipeline then answers every conversion with a
    /// misconfiguration error.
    pub fn from_settings(settings: &Settings) -> Result<Self, StateError> {
        let missing = settings.missing_credentials();
        if !missing.is_empty() {
            tracing::error!(
                missing = ?missing,
                "Required credentials are missing, conversions will be rejected"
            );
            return Ok(Self::new(ConversionPipeline::misconfigured(missing)));
        }

        let resolver = XiazaitoolResolver::new(
            &settings.resolver.base_url,
            settings.resolver.token.clone().unwrap_or_default(),
            settings.resolver.timeout(),
        )?;

        let conversion = &settings.conversion;
        let converter = FreeConvertClient::new(
            &conversion.base_url,
            conversion.api_key.clone().unwrap_or_default(),
            ConversionOptions {
                input_format: conversion.input_format.clone(),
                output_format: conversion.output_format.clone(),
                request_timeout: conversion.request_timeout(),
                poll_interval: conversion.poll_interval(),
                max_wait: conversion.max_wait(),
            },
        )?;

        let transcription = &settings.transcription;
        let transcriber = OpenAiWhisperEngine::new(
            transcription.api_key.clone().unwrap_or_default(),
            &transcription.base_url,
            WhisperOptions {
                model: transcription.model.clone(),
                language: transcription.language.clone(),
                download_timeout: transcription.download_timeout(),
                request_timeout: transcription.request_timeout(),
                staging_dir: transcription.staging_dir.clone(),
            },
        );

        Ok(Self::new(ConversionPipeline::new(
            Arc::new(resolver),
            Arc::new(converter),
            Arc::new(transcriber),
        )))
    }
}
