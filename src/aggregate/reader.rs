//! CSV decoding and tokenization
//!
//! Redirect lists are usually exported from spreadsheets, so the reader has to
//! cope with:
//! - BOM-prefixed UTF-8 and UTF-16 files
//! - legacy single-byte exports (detected with chardetng)
//! - quoted fields and rows of uneven length

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;

/// One tokenized CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line number where the record starts.
    pub line: u64,
    pub fields: Vec<String>,
}

impl CsvRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn raw(&self) -> String {
        self.fields.join(",")
    }
}

/// Read and tokenize a CSV file.
pub fn read_csv_file(path: &Path) -> Result<Vec<CsvRow>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed reading CSV file: {}", path.display()))?;
    let (content, encoding) = decode_bytes(&bytes);
    tracing::debug!("Decoded {} as {}", path.display(), encoding);
    parse_csv_str(&content).with_context(|| format!("Failed parsing CSV file: {}", path.display()))
}

/// Decode raw bytes to text. Returns the decoded text and the encoding label used.
///
/// Strategy:
/// 1. BOM markers win
/// 2. Strict UTF-8
/// 3. chardetng guess, decoding with replacement characters
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (text.into_owned(), encoding.name());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), UTF_8.name());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    (text.into_owned(), encoding.name())
}

/// Tokenize comma-delimited text without a header row.
pub fn parse_csv_str(content: &str) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        rows.push(CsvRow::new(line, fields));
    }
    Ok(rows)
}
