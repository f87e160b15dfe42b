mod conversion_job;
mod converted_audio;
mod job_status;
mod resolved_media;
mod source_link;
mod transcript;

pub use conversion_job::{ConversionJob, JobId};
pub use converted_audio::ConvertedAudio;
pub use job_status::ConversionJobStatus;
pub use resolved_media::ResolvedMedia;
pub use source_link::{InvalidInput, SourceLink};
pub use transcript::Transcript;
