//! Client for the third-party avatar video generation API.
//!
//! Two calls are used: `POST /v2/video/generate` to start a render and
//! `GET /v1/video_status.get` to poll it. Every request carries the
//! `X-Api-Key` header. Calls are made once; failures surface as
//! [`VideoApiError`] and the caller decides what to record.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::VideoApiConfig;

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Debug, Error)]
pub enum VideoApiError {
    #[error("video api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("video api returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("video api response is missing {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    script: &'a str,
    avatar_id: &'a str,
    voice_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct GenerateData {
    video_id: Option<String>,
}

/// Remote render state as reported by the provider.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VideoStatus {
    pub status: String,
    pub video_url: Option<String>,
}

#[derive(Clone)]
pub struct VideoApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VideoApiClient {
    pub fn new(config: &VideoApiConfig) -> Result<Self, VideoApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Starts a render and returns the provider's video id.
    pub async fn create_video(
        &self,
        script: &str,
        avatar_id: &str,
        voice_id: &str,
    ) -> Result<String, VideoApiError> {
        let response = self
            .client
            .post(format!("{}/v2/video/generate", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest {
                script,
                avatar_id,
                voice_id,
            })
            .send()
            .await?;

        let envelope: Envelope<GenerateData> = read_json(response).await?;
        envelope
            .data
            .and_then(|data| data.video_id)
            .ok_or(VideoApiError::MissingField("data.video_id"))
    }

    pub async fn video_status(&self, video_id: &str) -> Result<VideoStatus, VideoApiError> {
        let response = self
            .client
            .get(format!("{}/v1/video_status.get", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("video_id", video_id)])
            .send()
            .await?;

        let envelope: Envelope<VideoStatus> = read_json(response).await?;
        envelope.data.ok_or(VideoApiError::MissingField("data"))
    }
}

async fn read_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, VideoApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(VideoApiError::Status { status, body });
    }
    Ok(response.json::<T>().await?)
}
