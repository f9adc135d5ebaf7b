//! Embed URL normalization.
//!
//! Turns a user-pasted share link into its canonical iframe-embeddable form
//! plus a platform tag. Patterns are tried in declaration order (YouTube,
//! Vimeo, SoundCloud) and the first match wins. The regexes are deliberately
//! not anchored to the whole string: a URL that merely contains a matching
//! substring still matches, which mirrors how share links with extra query
//! parameters behave in practice.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Platforms with embed support.
pub const SUPPORTED_PLATFORMS: &[&str] = &["YouTube", "Vimeo", "SoundCloud"];

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // watch?v=ID, /embed/ID, /v/ID and youtu.be/ID forms; video ids are
    // exactly 11 characters.
    Regex::new(r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#)
        .expect("valid regex")
});

static VIMEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("valid regex"));

static SOUNDCLOUD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"soundcloud\.com/([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)").expect("valid regex")
});

/// A normalized embed: the iframe-safe URL plus its platform tag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EmbedInfo {
    /// Canonical iframe-embeddable URL.
    pub embed_url: String,
    /// Platform tag: `youtube`, `vimeo`, or `soundcloud`.
    pub embed_type: &'static str,
    /// The URL as supplied by the user.
    pub original_url: String,
}

/// Normalize a user-supplied URL into its embeddable form.
///
/// Returns [`CoreError::Validation`] naming the supported platforms when no
/// pattern matches.
pub fn normalize_embed_url(url: &str) -> Result<EmbedInfo, CoreError> {
    if let Some(caps) = YOUTUBE_RE.captures(url) {
        return Ok(EmbedInfo {
            embed_url: format!("https://www.youtube.com/embed/{}?rel=0", &caps[1]),
            embed_type: "youtube",
            original_url: url.to_string(),
        });
    }

    if let Some(caps) = VIMEO_RE.captures(url) {
        return Ok(EmbedInfo {
            embed_url: format!(
                "https://player.vimeo.com/video/{}?title=0&byline=0&portrait=0",
                &caps[1]
            ),
            embed_type: "vimeo",
            original_url: url.to_string(),
        });
    }

    if let Some(caps) = SOUNDCLOUD_RE.captures(url) {
        // The widget takes the canonical track URL (scheme re-attached to the
        // matched host/path) percent-encoded as its `url` parameter.
        let track_url = format!("https://{}", caps.get(0).map(|m| m.as_str()).unwrap_or(""));
        return Ok(EmbedInfo {
            embed_url: format!(
                "https://w.soundcloud.com/player/?url={}&color=%23ff5500&auto_play=false&hide_related=false&show_comments=true&show_user=true&show_reposts=false&show_teaser=true",
                urlencoding::encode(&track_url)
            ),
            embed_type: "soundcloud",
            original_url: url.to_string(),
        });
    }

    Err(CoreError::Validation(format!(
        "Unsupported embed URL. Supported platforms: {}",
        SUPPORTED_PLATFORMS.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_short_link() {
        let info = normalize_embed_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert_eq!(info.embed_type, "youtube");
        assert_eq!(
            info.embed_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"
        );
        assert_eq!(info.original_url, "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn youtube_watch_link() {
        let info =
            normalize_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(
            info.embed_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"
        );
    }

    #[test]
    fn youtube_embed_link() {
        let info = normalize_embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(
            info.embed_url,
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"
        );
    }

    #[test]
    fn vimeo_link() {
        let info = normalize_embed_url("https://vimeo.com/12345").unwrap();
        assert_eq!(info.embed_type, "vimeo");
        assert_eq!(
            info.embed_url,
            "https://player.vimeo.com/video/12345?title=0&byline=0&portrait=0"
        );
    }

    #[test]
    fn soundcloud_link() {
        let info = normalize_embed_url("https://soundcloud.com/some-artist/some-track").unwrap();
        assert_eq!(info.embed_type, "soundcloud");
        assert!(info
            .embed_url
            .starts_with("https://w.soundcloud.com/player/?url="));
        assert!(info
            .embed_url
            .contains("soundcloud.com%2Fsome-artist%2Fsome-track"));
    }

    #[test]
    fn unsupported_url_is_rejected() {
        let err = normalize_embed_url("https://example.com/video").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("YouTube"));
    }

    #[test]
    fn matching_substring_still_matches() {
        // Patterns are not anchored; a surrounding string with an embedded
        // share link still normalizes.
        let info = normalize_embed_url("check this: https://vimeo.com/999 !").unwrap();
        assert_eq!(
            info.embed_url,
            "https://player.vimeo.com/video/999?title=0&byline=0&portrait=0"
        );
    }

    #[test]
    fn first_matching_platform_wins() {
        // A URL mentioning both platforms resolves as YouTube because that
        // pattern is tried first.
        let info =
            normalize_embed_url("https://youtu.be/dQw4w9WgXcQ?from=vimeo.com/123").unwrap();
        assert_eq!(info.embed_type, "youtube");
    }
}
