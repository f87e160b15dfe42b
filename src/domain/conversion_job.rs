use std::fmt;

use super::ConversionJobStatus;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a remote conversion job as seen by one status poll.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub status: ConversionJobStatus,
    /// Result URL of the completed export task, when the service reported one.
    pub export_url: Option<String>,
}

impl ConversionJob {
    pub fn new(status: ConversionJobStatus, export_url: Option<String>) -> Self {
        Self {
            status,
            export_url,
        }
    }
}
