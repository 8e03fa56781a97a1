use async_trait::async_trait;

use crate::config::Settings;
use crate::youtube::api::{FlatTranscriptApi, SegmentTranscriptApi};
use crate::{Result, SmokenotesError};

/// A service that can return the caption text of a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the service has no transcript for this video.
    async fn fetch(&self, video_id: &str) -> Result<Option<String>>;
}

/// Build the transcript sources from runtime settings, primary first.
pub fn build_sources(settings: &Settings) -> Result<Vec<Box<dyn TranscriptSource>>> {
    let sources: Vec<Box<dyn TranscriptSource>> = vec![
        Box::new(SegmentTranscriptApi::from_settings(settings)?),
        Box::new(FlatTranscriptApi::from_settings(settings)?),
    ];
    Ok(sources)
}

/// Ask each source in turn and return the first non-empty transcript.
///
/// A failing source is logged and skipped. There are no retries.
pub async fn fetch_transcript(
    sources: &[Box<dyn TranscriptSource>],
    video_id: &str,
) -> Result<String> {
    for source in sources {
        tracing::debug!("Requesting transcript from {}", source.name());
        match source.fetch(video_id).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                tracing::info!("Fetched transcript from {}", source.name());
                return Ok(text);
            }
            Ok(_) => {
                tracing::debug!("{} has no transcript for {}", source.name(), video_id);
            }
            Err(e) => {
                tracing::warn!("{} transcript lookup failed: {}", source.name(), e);
            }
        }
    }

    Err(SmokenotesError::TranscriptUnavailable(video_id.to_string()))
}
