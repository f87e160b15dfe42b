use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tokio::time::{Instant, sleep, timeout_at};

use super::job_payload::{JobCreated, JobRequest, JobSnapshot};
use crate::application::ports::{AudioConverter, ConversionError};
use crate::domain::{ConversionJob, ConversionJobStatus, ConvertedAudio, JobId, ResolvedMedia};
use crate::infrastructure::observability::sanitize_for_log;

const JOBS_PATH: &str = "/v1/process/jobs";
/// Deadline used when `max_wait` does not fit in an `Instant`.
const FAR_DEADLINE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Polling behaviour and formats for a conversion job.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub input_format: String,
    pub output_format: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub max_wait: Duration,
}

/// Client for the FreeConvert job API: submit once, then poll until terminal.
pub struct FreeConvertClient {
    client: reqwest::Client,
    jobs_url: String,
    api_key: String,
    options: ConversionOptions,
}

enum PollError {
    /// Worth another attempt after the poll interval.
    Transient(String),
    Rejected(reqwest::StatusCode),
}

impl FreeConvertClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        options: ConversionOptions,
    ) -> Result<Self, ConversionError> {
        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ConversionError::ConversionFailed(format!("client: {}", e)))?;
        Ok(Self {
            client,
            jobs_url: format!("{}{}", base_url.trim_end_matches('/'), JOBS_PATH),
            api_key,
            options,
        })
    }

    async fn submit(&self, media_url: &str) -> Result<JobId, ConversionError> {
        let body = JobRequest::import_convert_export(
            media_url,
            &self.options.input_format,
            &self.options.output_format,
        );

        let response = self
            .client
            .post(&self.jobs_url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ConversionError::ConversionFailed(format!("submit: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK && status != reqwest::StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %sanitize_for_log(&body), "Conversion job rejected");
            return Err(ConversionError::ConversionFailed(format!(
                "submit status {}",
                status
            )));
        }

        let created: JobCreated = response
            .json()
            .await
            .map_err(|e| ConversionError::ConversionFailed(format!("submit response: {}", e)))?;

        created
            .id
            .filter(|id| !id.trim().is_empty())
            .map(JobId::new)
            .ok_or_else(|| ConversionError::ConversionFailed("job id missing".to_string()))
    }

    async fn poll(&self, job_id: &JobId) -> Result<ConversionJob, PollError> {
        let response = self
            .client
            .get(format!("{}/{}", self.jobs_url, job_id))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PollError::Transient(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(PollError::Rejected(response.status()));
        }

        let snapshot: JobSnapshot = response
            .json()
            .await
            .map_err(|e| PollError::Transient(format!("body: {}", e)))?;

        Ok(snapshot.into_job())
    }

    async fn wait_for_audio(&self, job_id: &JobId) -> Result<ConvertedAudio, ConversionError> {
        let started = Instant::now();
        let deadline = started
            .checked_add(self.options.max_wait)
            .unwrap_or_else(|| started + FAR_DEADLINE);
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let Ok(polled) = timeout_at(deadline, self.poll(job_id)).await else {
                break;
            };

            match polled {
                Ok(job) if job.status.is_terminal() => return finish(job_id, job),
                Ok(job) => {
                    tracing::debug!(status = %job.status, attempt, "Conversion job still running");
                }
                Err(PollError::Rejected(status)) => {
                    return Err(ConversionError::ConversionFailed(format!(
                        "status poll returned {}",
                        status
                    )));
                }
                Err(PollError::Transient(reason)) => {
                    tracing::warn!(%reason, attempt, "Conversion status poll failed, will retry");
                }
            }

            let next_poll_at = Instant::now().checked_add(self.options.poll_interval);
            if next_poll_at.is_none_or(|at| at >= deadline) {
                break;
            }
            sleep(self.options.poll_interval).await;
        }

        tracing::warn!(
            job_id = %job_id,
            attempts = attempt,
            "Conversion job did not finish in time"
        );
        Err(ConversionError::Timeout(self.options.max_wait))
    }
}

/// Maps a terminal job onto the converted audio or a conversion error.
fn finish(job_id: &JobId, job: ConversionJob) -> Result<ConvertedAudio, ConversionError> {
    match job.status {
        ConversionJobStatus::Completed => job.export_url.map(ConvertedAudio::new).ok_or_else(|| {
            ConversionError::MalformedResult(format!(
                "job {} completed without an export url",
                job_id
            ))
        }),
        _ => Err(ConversionError::ConversionFailed(format!(
            "job {} failed",
            job_id
        ))),
    }
}

#[async_trait]
impl AudioConverter for FreeConvertClient {
    #[tracing::instrument(skip(self, media), fields(media_url = %media.media_url))]
    async fn convert_to_audio(
        &self,
        media: &ResolvedMedia,
    ) -> Result<ConvertedAudio, ConversionError> {
        let job_id = self.submit(&media.media_url).await?;
        tracing::info!(job_id = %job_id, "Conversion job submitted");

        let audio = self.wait_for_audio(&job_id).await?;
        tracing::info!(job_id = %job_id, audio_url = %audio.audio_url, "Conversion job completed");

        Ok(audio)
    }
}
