/// Downloadable result of a completed conversion job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedAudio {
    pub audio_url: String,
}

impl ConvertedAudio {
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
        }
    }
}
