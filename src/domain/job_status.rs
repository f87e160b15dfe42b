use std::fmt;

/// Status reported by the conversion service for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionJobStatus {
    Queued,
    Pending,
    Processing,
    Completed,
    Failed,
    Unknown,
}

impl ConversionJobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionJobStatus::Queued => "queued",
            ConversionJobStatus::Pending => "pending",
            ConversionJobStatus::Processing => "processing",
            ConversionJobStatus::Completed => "completed",
            ConversionJobStatus::Failed => "failed",
            ConversionJobStatus::Unknown => "unknown",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ConversionJobStatus::Completed | ConversionJobStatus::Failed
        )
    }
}

impl From<&str> for ConversionJobStatus {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "queued" => ConversionJobStatus::Queued,
            "pending" => ConversionJobStatus::Pending,
            "processing" => ConversionJobStatus::Processing,
            "completed" => ConversionJobStatus::Completed,
            "failed" => ConversionJobStatus::Failed,
            _ => ConversionJobStatus::Unknown,
        }
    }
}

impl fmt::Display for ConversionJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
