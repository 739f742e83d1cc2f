//! # dime_rss
//!
//! Generates an unofficial RSS 2.0 feed for the DIME genre listing, a site
//! that publishes none of its own.
//!
//! ## Pipeline
//!
//! 1. **Listing**: fetch the genre listing page and extract up to ten
//!    entries (link, date text, thumbnail candidate)
//! 2. **Articles**: visit each entry's article page for the canonical
//!    `<h1>` title and an `og:image` fallback thumbnail
//! 3. **Normalization**: strip responsive-image size suffixes from the
//!    thumbnail URL and coerce `YYYY.MM.DD` date text to a UTC timestamp
//! 4. **Output**: write the validated records as `rss/dime.xml` with the
//!    thumbnails attached as enclosures
//!
//! A failed listing fetch aborts the run with a nonzero exit; a failed
//! article fetch only degrades that one entry.
//!
//! ## Usage
//!
//! ```sh
//! dime_rss -o ./rss
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod thumbs;
mod utils;

use cli::Cli;
use config::FeedConfig;
use fetch::HttpSource;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("dime_rss starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.output_file, "Parsed CLI arguments");

    let config = FeedConfig {
        output_dir: args.output_dir,
        output_file: args.output_file,
        ..FeedConfig::default()
    };

    // Early check: ensure the feed output dir is writable
    if let Err(e) = ensure_writable_dir(&config.output_dir).await {
        error!(
            path = %config.output_dir,
            error = %e,
            "Feed output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let source = HttpSource::new(&config)?;

    // A listing failure is fatal; without it there is nothing to emit.
    let articles = match pipeline::run(&config, &source).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(url = %e.url(), error = %e, "Listing fetch failed; no feed written");
            return Err(e.into());
        }
    };

    if articles.is_empty() {
        println!("No articles retrieved");
    } else {
        println!("Retrieved {} article(s)", articles.len());
    }

    outputs::rss::write_feed(&articles, &config).await?;
    println!("Wrote feed to {}", config.output_path());

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
