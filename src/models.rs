//! Data models for listing entries and assembled feed articles.
//!
//! This module defines the structures that flow through the pipeline:
//! - [`RawListEntry`]: what one listing container yields before any article fetch
//! - [`ArticleDetail`]: what the article page itself contributes
//! - [`Article`]: the validated record handed to the feed emitter
//!
//! Everything here lives for a single run; nothing is persisted between
//! invocations.

use crate::thumbs::classify_mime;
use chrono::{DateTime, Utc};

/// Placeholder title used when an article page has no `<h1>` or its fetch failed.
pub const NO_TITLE: &str = "(no title)";

/// One usable entry extracted from a listing container.
///
/// Existence of a `RawListEntry` implies both a link anchor and a date node
/// were found; containers missing either are discarded wholesale before any
/// network fetch is made for their article page.
#[derive(Debug)]
pub struct RawListEntry {
    /// The article URL from the item link anchor, trimmed.
    pub link: String,
    /// The raw date text from the item date node (`YYYY.MM.DD` on a good day).
    pub date_text: String,
    /// Thumbnail candidate from the listing markup, if any: first of the
    /// inline `src`, the lazy-load `data-src`, or the leading `srcset` URL.
    pub thumb_candidate: Option<String>,
}

/// What a fetched article page contributes to the record.
#[derive(Debug)]
pub struct ArticleDetail {
    /// Trimmed `<h1>` text, or [`NO_TITLE`].
    pub title: String,
    /// `og:image` meta content, when present and non-empty.
    pub social_image: Option<String>,
}

impl Default for ArticleDetail {
    /// The degraded shape used when the article fetch fails.
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            social_image: None,
        }
    }
}

/// A validated article record, ready for feed emission.
///
/// Invariant: `title` and `link` are non-empty and `published_at` is always
/// a concrete UTC instant. Records that cannot satisfy this are dropped by
/// the pipeline before emission, never padded with placeholders.
#[derive(Debug)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
    /// Canonical thumbnail URL, size suffix already stripped.
    pub thumbnail: Option<String>,
}

impl Article {
    /// MIME label for the thumbnail enclosure, derived from its extension.
    pub fn thumbnail_mime(&self) -> Option<&'static str> {
        self.thumbnail.as_deref().map(classify_mime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_degraded_detail_uses_placeholder_title() {
        let detail = ArticleDetail::default();
        assert_eq!(detail.title, "(no title)");
        assert!(detail.social_image.is_none());
    }

    #[test]
    fn test_thumbnail_mime_follows_extension() {
        let article = Article {
            title: "記事タイトル".to_string(),
            link: "https://dime.jp/genre/123/".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            thumbnail: Some("https://dime.jp/img/pic.png".to_string()),
        };
        assert_eq!(article.thumbnail_mime(), Some("image/png"));
    }

    #[test]
    fn test_thumbnail_mime_absent_without_thumbnail() {
        let article = Article {
            title: "記事タイトル".to_string(),
            link: "https://dime.jp/genre/123/".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            thumbnail: None,
        };
        assert_eq!(article.thumbnail_mime(), None);
    }
}
