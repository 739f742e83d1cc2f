//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for the feed generator.
///
/// Only the output location is configurable; the scrape target and its
/// selectors are fixed to the DIME genre listing.
///
/// # Examples
///
/// ```sh
/// # Default: writes rss/dime.xml
/// dime_rss
///
/// # Write somewhere else
/// dime_rss -o ./public/rss --output-file dime.xml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the RSS feed document
    #[arg(short, long, env = "DIME_RSS_OUTPUT_DIR", default_value = "rss")]
    pub output_dir: String,

    /// Filename of the RSS feed document
    #[arg(long, default_value = "dime.xml")]
    pub output_file: String,
}
