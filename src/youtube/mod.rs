//! YouTube module for smokenotes
//!
//! Resolves video ids and fetches transcripts and titles. Two transcript
//! services are tried in order before giving up.

mod api;
mod source;
mod video_id;

pub use api::{FlatTranscriptApi, SegmentTranscriptApi, TitleClient};
pub use source::{build_sources, fetch_transcript, TranscriptSource};
pub use video_id::{extract_video_id, watch_url};
