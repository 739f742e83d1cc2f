//! Utility functions for date coercion and file system checks.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Parse listing date text (`YYYY.MM.DD`) into a UTC timestamp at midnight.
///
/// The listing page prints dates without a time component, so midnight UTC
/// stands in. Malformed input substitutes the current instant rather than
/// failing; a missing timestamp is never allowed to drop a record.
pub fn parse_pub_date(date_text: &str) -> DateTime<Utc> {
    match NaiveDate::parse_from_str(date_text, "%Y.%m.%d") {
        Ok(date) => date.and_time(NaiveTime::MIN).and_utc(),
        Err(e) => {
            warn!(%date_text, error = %e, "Unparseable listing date; substituting current time");
            Utc::now()
        }
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file. Run before any network
/// call so a bad output path fails the run early.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
