//! Redirect aggregation
//!
//! Turns CSV rows into a [`RedirectMap`] grouped by normalized domain.
//!
//! Only rows with fewer than two columns are reported. Rows whose first column
//! is not a recognizable `http(s)://domain/path` URL are dropped silently and
//! only counted, so a CSV with a header line or comment rows converts cleanly.

use crate::domain::{ExecutionConfig, RedirectMap, SkippedRow};
use anyhow::Result;

pub mod matcher;
pub mod normalize;
pub mod reader;

pub use matcher::{match_row, parse_source_url};
pub use normalize::{normalize_domain, normalize_path};
pub use reader::{read_csv_file, CsvRow};

/// Result of a single aggregation pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub map: RedirectMap,
    /// Rows with fewer than two columns, in input order.
    pub skipped: Vec<SkippedRow>,
    /// Rows whose source URL did not match or that had an empty domain or destination.
    pub ignored: usize,
    /// Rows dropped because they point at the catch-all destination.
    pub excluded_catch_all: usize,
}

/// Aggregate already-tokenized rows.
///
/// `catch_all` is compared to each destination with exact, case-sensitive
/// string equality.
pub fn aggregate_rows<I>(rows: I, catch_all: Option<&str>) -> Aggregation
where
    I: IntoIterator<Item = CsvRow>,
{
    let mut result = Aggregation::default();

    for row in rows {
        if row.fields.len() < 2 {
            tracing::warn!("Line {} has fewer than 2 columns", row.line);
            result.skipped.push(SkippedRow { line: row.line, raw: row.raw() });
            continue;
        }

        let Some(entry) = match_row(&row.fields[0], &row.fields[1]) else {
            tracing::trace!("Line {} source URL did not match", row.line);
            result.ignored += 1;
            continue;
        };

        if entry.domain.is_empty() || entry.destination.is_empty() {
            result.ignored += 1;
            continue;
        }

        if catch_all.is_some_and(|url| url == entry.destination) {
            tracing::debug!("Line {} points at the catch-all destination", row.line);
            result.excluded_catch_all += 1;
            continue;
        }

        let domain = normalize_domain(&entry.domain);
        let path = normalize_path(&entry.path);
        if let Some(previous) = result.map.insert(domain.as_str(), path.as_str(), entry.destination)
        {
            tracing::debug!("Line {} overrides {}{} (was {})", row.line, domain, path, previous);
        }
    }

    tracing::debug!(
        "Aggregated {} redirects across {} domains ({} short rows, {} ignored, {} catch-all)",
        result.map.redirect_count(),
        result.map.len(),
        result.skipped.len(),
        result.ignored,
        result.excluded_catch_all
    );

    result
}

/// Read the configured CSV file and aggregate it.
pub fn aggregate_csv(config: &ExecutionConfig) -> Result<Aggregation> {
    let rows = read_csv_file(&config.csv_path)?;
    Ok(aggregate_rows(rows, config.catch_all_destination_url.as_deref()))
}
