//! HTTP clients for the transcript and title services

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Settings;
use crate::youtube::source::TranscriptSource;
use crate::youtube::video_id::watch_url;
use crate::Result;

fn http_client(settings: &Settings) -> Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(settings.fetch.timeout_secs))
        .build()?)
}

fn endpoint(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Transcript service that answers with a list of caption segments.
pub struct SegmentTranscriptApi {
    http: Client,
    endpoint: String,
}

impl SegmentTranscriptApi {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            endpoint: endpoint(&settings.fetch.transcript_url),
        })
    }
}

#[async_trait]
impl TranscriptSource for SegmentTranscriptApi {
    fn name(&self) -> &'static str {
        "yt-transcript-api"
    }

    async fn fetch(&self, video_id: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("videoId", video_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("{} answered {}", self.name(), response.status());
            return Ok(None);
        }

        let payload: SegmentTranscriptResponse = response.json().await?;
        Ok(payload.transcript.map(|segments| {
            segments
                .into_iter()
                .map(|segment| segment.text)
                .collect::<Vec<_>>()
                .join(" ")
        }))
    }
}

/// Fallback transcript service that answers with the full text at once.
pub struct FlatTranscriptApi {
    http: Client,
    endpoint: String,
}

impl FlatTranscriptApi {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            endpoint: endpoint(&settings.fetch.fallback_transcript_url),
        })
    }
}

#[async_trait]
impl TranscriptSource for FlatTranscriptApi {
    fn name(&self) -> &'static str {
        "kome"
    }

    async fn fetch(&self, video_id: &str) -> Result<Option<String>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("video_id", video_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("{} answered {}", self.name(), response.status());
            return Ok(None);
        }

        let payload: FlatTranscriptResponse = response.json().await?;
        Ok(payload.transcript)
    }
}

/// Looks up video titles through an oEmbed endpoint.
pub struct TitleClient {
    http: Client,
    endpoint: String,
}

impl TitleClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            endpoint: endpoint(&settings.fetch.title_url),
        })
    }

    /// The video title, or an empty string when it cannot be looked up.
    pub async fn fetch(&self, video_id: &str) -> String {
        match self.try_fetch(video_id).await {
            Ok(title) => title,
            Err(e) => {
                tracing::debug!("Could not fetch title for {}: {}", video_id, e);
                String::new()
            }
        }
    }

    async fn try_fetch(&self, video_id: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", watch_url(video_id))])
            .send()
            .await?
            .error_for_status()?;

        let payload: TitleResponse = response.json().await?;
        Ok(payload.title.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct SegmentTranscriptResponse {
    #[serde(default)]
    transcript: Option<Vec<CaptionSegment>>,
}

#[derive(Debug, Deserialize)]
struct CaptionSegment {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct FlatTranscriptResponse {
    #[serde(default)]
    transcript: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TitleResponse {
    #[serde(default)]
    title: Option<String>,
}
