//! Runtime configuration for a feed generation run.
//!
//! All the knobs that used to be scattered constants live here so the
//! pipeline can be exercised against a fake document source in tests.
//! [`FeedConfig::default`] carries the values of the production deployment.

use std::time::Duration;

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// The genre listing page that enumerates recent articles.
    pub listing_url: String,
    /// Channel title of the emitted feed.
    pub feed_title: String,
    /// Channel description of the emitted feed.
    pub feed_description: String,
    /// Directory the feed document is written to (created if absent).
    pub output_dir: String,
    /// Filename of the feed document inside `output_dir`.
    pub output_file: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout, applied to the listing fetch and every article fetch.
    pub timeout: Duration,
    /// How many listing containers are processed, counted in document order.
    pub item_cap: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://dime.jp/genre/".to_string(),
            feed_title: "DIME 非公式 RSS".to_string(),
            feed_description: "DIMEの最新記事を自動取得して生成したRSSフィードです。"
                .to_string(),
            output_dir: "rss".to_string(),
            output_file: "dime.xml".to_string(),
            user_agent: "Mozilla/5.0 (+https://github.com/fumopan/dime-rss)".to_string(),
            timeout: Duration::from_secs(15),
            item_cap: 10,
        }
    }
}

impl FeedConfig {
    /// Full path of the feed document.
    pub fn output_path(&self) -> String {
        format!("{}/{}", self.output_dir.trim_end_matches('/'), self.output_file)
    }
}
