use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use douyin_scribe::application::ports::{
    AudioConverter, ConversionError, MediaResolver, ResolverError, TranscriptionEngine,
    TranscriptionError,
};
use douyin_scribe::application::services::ConversionPipeline;
use douyin_scribe::domain::{ConvertedAudio, ResolvedMedia, SourceLink, Transcript};

pub struct MockResolver {
    media_url: Option<String>,
    panic_on_call: bool,
    calls: AtomicUsize,
    last_link: Mutex<Option<String>>,
}

impl MockResolver {
    pub fn succeeding(media_url: &str) -> Arc<Self> {
        Arc::new(Self {
            media_url: Some(media_url.to_string()),
            panic_on_call: false,
            calls: AtomicUsize::new(0),
            last_link: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            media_url: None,
            panic_on_call: false,
            calls: AtomicUsize::new(0),
            last_link: Mutex::new(None),
        })
    }

    pub fn panicking() -> Arc<Self> {
        Arc::new(Self {
            media_url: None,
            panic_on_call: true,
            calls: AtomicUsize::new(0),
            last_link: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_link(&self) -> Option<String> {
        self.last_link.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaResolver for MockResolver {
    async fn resolve(&self, link: &SourceLink) -> Result<ResolvedMedia, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_link.lock().unwrap() = Some(link.as_str().to_string());
        if self.panic_on_call {
            panic!("resolver exploded");
        }
        self.media_url
            .clone()
            .map(ResolvedMedia::new)
            .ok_or_else(|| ResolverError::ResolutionFailed("no videoUrls".to_string()))
    }
}

pub struct MockConverter {
    audio_url: Option<String>,
    calls: AtomicUsize,
}

impl MockConverter {
    pub fn succeeding(audio_url: &str) -> Arc<Self> {
        Arc::new(Self {
            audio_url: Some(audio_url.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            audio_url: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioConverter for MockConverter {
    async fn convert_to_audio(
        &self,
        _media: &ResolvedMedia,
    ) -> Result<ConvertedAudio, ConversionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.audio_url
            .clone()
            .map(ConvertedAudio::new)
            .ok_or_else(|| ConversionError::ConversionFailed("job failed".to_string()))
    }
}

pub struct MockTranscriber {
    text: Option<String>,
    calls: AtomicUsize,
}

impl MockTranscriber {
    pub fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            text: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriber {
    async fn transcribe(&self, _audio: &ConvertedAudio) -> Result<Transcript, TranscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .map(Transcript::new)
            .ok_or_else(|| TranscriptionError::TranscriptionFailed("empty transcript".to_string()))
    }
}

pub fn pipeline_with(
    resolver: &Arc<MockResolver>,
    converter: &Arc<MockConverter>,
    transcriber: &Arc<MockTranscriber>,
) -> ConversionPipeline {
    ConversionPipeline::new(resolver.clone(), converter.clone(), transcriber.clone())
}
