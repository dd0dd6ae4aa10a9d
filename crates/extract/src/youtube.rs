//! YouTube video-id parsing and transcript proxy URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the 11-character video id after `v=` or the last path segment.
/// Covers watch URLs, `youtu.be` short links, `/shorts/` and `/embed/` paths.
static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// Pull the video id out of a YouTube URL. Inputs that carry no recognizable
/// id (including a bare 11-character id) are passed through unchanged.
pub fn video_id(input: &str) -> String {
    VIDEO_ID
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Readable-text proxy URL for a video's watch page.
pub fn transcript_url(proxy_base: &str, video_id: &str) -> String {
    format!(
        "{}/http://youtube.com/watch?v={}",
        proxy_base.trim_end_matches('/'),
        video_id
    )
}
