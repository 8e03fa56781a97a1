//! YouTube video id parsing

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)([^&\n?#]+)")
        .expect("video url pattern is valid")
});

static BARE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("video id pattern is valid"));

/// Pull the video id out of a watch, short, embed or legacy URL, or accept
/// a bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    [&*URL_PATTERN, &*BARE_ID_PATTERN]
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .map(|caps| caps[1].to_string())
}

/// Canonical watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_url_shapes() {
        let expected = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"), expected);
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"), expected);
        assert_eq!(extract_video_id("youtube.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(extract_video_id("https://youtube.com/v/dQw4w9WgXcQ#top"), expected);
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn rejects_other_input() {
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("short"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn builds_watch_url() {
        assert_eq!(watch_url("abc"), "https://www.youtube.com/watch?v=abc");
    }
}
