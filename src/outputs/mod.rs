//! Output generation for the syndication feed.
//!
//! The pipeline hands its validated article list to [`rss`], which builds
//! the RSS 2.0 document and writes it under the configured output directory:
//!
//! ```text
//! output_dir/
//! └── dime.xml
//! ```

pub mod rss;
