//! RSS 2.0 feed generation.
//!
//! Builds the channel from the assembled article records and writes the
//! document to `{output_dir}/{output_file}`. Resolved thumbnails ride along
//! as `<enclosure>` references with length `0`, which most feed readers
//! render as item thumbnails.

use crate::config::FeedConfig;
use crate::models::Article;
use rss::validation::Validate;
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Build and validate the feed channel.
pub fn build_channel(articles: &[Article], config: &FeedConfig) -> Result<Channel, Box<dyn Error>> {
    let items: Vec<Item> = articles.iter().map(article_to_item).collect();

    let channel = ChannelBuilder::default()
        .title(&config.feed_title)
        .link(&config.listing_url)
        .description(&config.feed_description)
        .generator(format!("dime_rss {}", env!("CARGO_PKG_VERSION")))
        .items(items)
        .build();

    channel.validate()?;
    Ok(channel)
}

fn article_to_item(article: &Article) -> Item {
    let enclosure = match (article.thumbnail.as_deref(), article.thumbnail_mime()) {
        (Some(url), Some(mime)) => Some(
            EnclosureBuilder::default()
                .url(url)
                .length("0")
                .mime_type(mime)
                .build(),
        ),
        _ => None,
    };

    ItemBuilder::default()
        .title(article.title.clone())
        .link(article.link.clone())
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(article.link.clone())
                .build(),
        )
        .pub_date(article.published_at.to_rfc2822())
        .enclosure(enclosure)
        .build()
}

/// Write the feed document, creating the output directory if absent.
#[instrument(level = "info", skip_all, fields(path = %config.output_path()))]
pub async fn write_feed(articles: &[Article], config: &FeedConfig) -> Result<(), Box<dyn Error>> {
    let channel = build_channel(articles, config)?;

    if let Err(e) = fs::create_dir_all(&config.output_dir).await {
        error!(dir = %config.output_dir, error = %e, "Failed to create feed output directory");
        return Err(e.into());
    }

    let mut body = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    body.push_str(&channel.to_string());

    let path = config.output_path();
    fs::write(&path, body).await?;
    info!(%path, count = articles.len(), "Wrote RSS feed");
    Ok(())
}
