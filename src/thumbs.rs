//! Thumbnail URL normalization.
//!
//! The source site's responsive-image pipeline appends a `-{width}x{height}`
//! token to image filenames (`shutterstock_2471661487-365x205.jpg`). The
//! token is not part of the canonical asset name, so it is stripped before
//! the URL is placed in the feed. MIME classification for the enclosure is
//! derived from the path extension.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Matches a `-{W}x{H}` token immediately before the file extension.
static SIZE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\d+x\d+(\.\w+)$").unwrap());

/// Remove a trailing `-{W}x{H}` token from the filename in the URL path.
///
/// Only the path component is rewritten; scheme, host, query string, and
/// fragment pass through untouched. URLs whose path carries no such token
/// are returned unchanged, as is anything that does not parse as a URL.
pub fn strip_size_suffix(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let cleaned = SIZE_SUFFIX.replace(parsed.path(), "$1").into_owned();
            parsed.set_path(&cleaned);
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}

/// Map the URL's path extension to a MIME label for the feed enclosure.
///
/// Case-insensitive. Unrecognized or missing extensions fall back to
/// `image/jpeg`, the overwhelmingly common case on the source site.
pub fn classify_mime(url: &str) -> &'static str {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_ascii_lowercase(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase(),
    };

    if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        "image/jpeg"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".gif") {
        "image/gif"
    } else if path.ends_with(".webp") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_size_suffix_from_filename() {
        assert_eq!(
            strip_size_suffix("https://dime.jp/img/shutterstock_2471661487-365x205.jpg"),
            "https://dime.jp/img/shutterstock_2471661487.jpg"
        );
    }

    #[test]
    fn test_preserves_query_and_fragment() {
        assert_eq!(
            strip_size_suffix("https://cdn.example.com/photo-300x200.jpg?v=2#hero"),
            "https://cdn.example.com/photo.jpg?v=2#hero"
        );
    }

    #[test]
    fn test_identity_without_suffix() {
        let url = "https://cdn.example.com/photo.jpg";
        assert_eq!(strip_size_suffix(url), url);
    }

    #[test]
    fn test_does_not_match_missing_height() {
        let url = "https://cdn.example.com/photo-2023x.jpg";
        assert_eq!(strip_size_suffix(url), url);
    }

    #[test]
    fn test_does_not_match_suffix_away_from_extension() {
        let url = "https://cdn.example.com/photo-300x200-extra.jpg";
        assert_eq!(strip_size_suffix(url), url);
    }

    #[test]
    fn test_does_not_touch_dimensions_in_query() {
        let url = "https://cdn.example.com/photo.jpg?size=300x200";
        assert_eq!(strip_size_suffix(url), url);
    }

    #[test]
    fn test_unparseable_input_passes_through() {
        assert_eq!(strip_size_suffix("not a url"), "not a url");
    }

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(classify_mime("https://x.example/a.jpg"), "image/jpeg");
        assert_eq!(classify_mime("https://x.example/a.jpeg"), "image/jpeg");
        assert_eq!(classify_mime("https://x.example/a.png"), "image/png");
        assert_eq!(classify_mime("https://x.example/a.gif"), "image/gif");
        assert_eq!(classify_mime("https://x.example/a.webp"), "image/webp");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify_mime("https://x.example/A.JPG"), "image/jpeg");
        assert_eq!(classify_mime("https://x.example/b.PnG"), "image/png");
    }

    #[test]
    fn test_classify_ignores_query_string() {
        assert_eq!(classify_mime("https://x.example/a.png?fmt=gif"), "image/png");
    }

    #[test]
    fn test_classify_defaults_to_jpeg() {
        assert_eq!(classify_mime("https://x.example/a.bmp"), "image/jpeg");
        assert_eq!(classify_mime("https://x.example/noext"), "image/jpeg");
        assert_eq!(classify_mime(""), "image/jpeg");
    }
}
