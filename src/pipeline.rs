//! The extraction pipeline: listing page → per-article pass → validated records.
//!
//! A failed listing fetch is fatal; there is nothing to extract without it.
//! Everything after that degrades locally: an unusable listing container is
//! skipped, a failed article fetch falls back to a placeholder title, an
//! unparseable date substitutes the current instant. Articles come back in
//! original listing order, most recent first as published by the source.

use crate::config::FeedConfig;
use crate::error::FetchError;
use crate::extract;
use crate::fetch::DocumentSource;
use crate::models::{Article, ArticleDetail, RawListEntry};
use crate::thumbs::strip_size_suffix;
use crate::utils::parse_pub_date;
use futures::stream::{self, StreamExt};
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// Run the whole pipeline once and return the assembled article records.
///
/// The returned list may be empty; emptiness is not an error. Only a failed
/// listing fetch propagates.
#[instrument(level = "info", skip_all, fields(listing_url = %config.listing_url))]
pub async fn run<S: DocumentSource>(
    config: &FeedConfig,
    source: &S,
) -> Result<Vec<Article>, FetchError> {
    let listing_html = source.fetch(&config.listing_url).await?;

    let entries = {
        let document = Html::parse_document(&listing_html);
        extract::list_entries(&document, config.item_cap)
    };
    info!(
        count = entries.len(),
        cap = config.item_cap,
        "Extracted usable listing entries"
    );

    // One article fetch at a time, in listing order.
    let results: Vec<Option<Article>> = stream::iter(entries)
        .then(|entry| async move { assemble_article(entry, source).await })
        .collect()
        .await;

    let articles: Vec<Article> = results.into_iter().flatten().collect();
    info!(count = articles.len(), "Assembled article records");
    Ok(articles)
}

/// Fetch one entry's article page and assemble the final record.
///
/// Returns `None` only when the assembled record would violate the output
/// invariant (empty title or link after all fallbacks).
async fn assemble_article<S: DocumentSource>(
    entry: RawListEntry,
    source: &S,
) -> Option<Article> {
    let detail = match source.fetch(&entry.link).await {
        Ok(body) => {
            let document = Html::parse_document(&body);
            extract::article_detail(&document)
        }
        Err(e) => {
            warn!(url = %entry.link, error = %e, "Article fetch failed; using placeholder title");
            ArticleDetail::default()
        }
    };

    // Listing-page candidates win over the article's og:image.
    let thumbnail = entry
        .thumb_candidate
        .or(detail.social_image)
        .map(|raw| strip_size_suffix(&raw));

    let article = Article {
        title: detail.title,
        link: entry.link,
        published_at: parse_pub_date(&entry.date_text),
        thumbnail,
    };

    if article.title.is_empty() || article.link.is_empty() {
        warn!(
            title = %article.title,
            link = %article.link,
            "Skipping incomplete record"
        );
        return None;
    }

    debug!(title = %article.title, link = %article.link, "Assembled article");
    Some(article)
}
