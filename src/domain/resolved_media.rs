/// Direct, time-limited URL to the source video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub media_url: String,
}

impl ResolvedMedia {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }
}
