use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{MediaResolver, ResolverError};
use crate::domain::{ResolvedMedia, SourceLink};
use crate::infrastructure::observability::sanitize_for_log;

const PARSE_PATH: &str = "/api/parseVideoUrl";

/// Resolves share links through the xiazaitool `parseVideoUrl` API.
pub struct XiazaitoolResolver {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl XiazaitoolResolver {
    pub fn new(base_url: &str, token: String, timeout: Duration) -> Result<Self, ResolverError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolverError::ResolutionFailed(format!("client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PARSE_PATH),
            token,
        })
    }
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    url: &'a str,
    token: &'a str,
}

#[derive(Deserialize)]
struct ParseResponse {
    data: Option<ParseData>,
}

#[derive(Deserialize)]
struct ParseData {
    #[serde(rename = "videoUrls")]
    video_urls: Option<VideoUrls>,
}

/// The service returns either a single URL or a list of candidates.
#[derive(Deserialize)]
#[serde(untagged)]
enum VideoUrls {
    Single(String),
    Many(Vec<String>),
}

impl VideoUrls {
    fn into_first(self) -> Option<String> {
        let candidate = match self {
            VideoUrls::Single(url) => Some(url),
            VideoUrls::Many(urls) => urls.into_iter().find(|u| !u.trim().is_empty()),
        };
        candidate
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
    }
}

#[async_trait]
impl MediaResolver for XiazaitoolResolver {
    #[tracing::instrument(skip(self, link), fields(link = %link))]
    async fn resolve(&self, link: &SourceLink) -> Result<ResolvedMedia, ResolverError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ParseRequest {
                url: link.as_str(),
                token: &self.token,
            })
            .send()
            .await
            .map_err(|e| ResolverError::ResolutionFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %sanitize_for_log(&body), "Resolver rejected link");
            return Err(ResolverError::ResolutionFailed(format!("status {}", status)));
        }

        let parsed: ParseResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::ResolutionFailed(format!("parse response: {}", e)))?;

        let media_url = parsed
            .data
            .and_then(|d| d.video_urls)
            .and_then(VideoUrls::into_first)
            .ok_or_else(|| {
                ResolverError::ResolutionFailed("response has no videoUrls".to_string())
            })?;

        tracing::debug!(media_url = %media_url, "Link resolved");

        Ok(ResolvedMedia::new(media_url))
    }
}
