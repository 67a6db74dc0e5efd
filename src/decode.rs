//! Lenient tabular decoder for Alpha Vantage CSV bodies.
//!
//! The upstream's CSV export is not strictly RFC 4180 compliant (stray
//! quotes, trailing commas, padded fields), so the reader is deliberately
//! configured lenient: flexible column counts and whitespace trimming.
//! This is a compatibility concession to the upstream export, not a
//! correctness target to tighten.
//!
//! One generic row decoder serves every time-series operation; the three
//! endpoints all return the same six-column row shape.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::models::Ohlc;
use crate::{Result, VantageError};

/// Columns required of every data row: time, open, high, low, close, volume.
const COLUMNS: usize = 6;

/// Decodes a tabular response body into OHLCV records.
///
/// The first row is always discarded as the column-name header. A body that
/// is empty or contains only the header decodes to an empty vector, not an
/// error. Rows are returned in the order the upstream sent them (ordinarily
/// newest first); nothing is sorted, deduplicated, or filtered.
///
/// # Errors
///
/// Fails fast on the first bad row, returning nothing partial:
/// - [`VantageError::Field`] when one of columns 1–5 is not a number,
///   naming the logical field and carrying the row text.
/// - [`VantageError::ShortRow`] when a data row has fewer than 6 columns.
/// - [`VantageError::Csv`] when the body cannot be tokenized at all.
pub fn decode_ohlc(body: &str) -> Result<Vec<Ohlc>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < COLUMNS {
            return Err(VantageError::ShortRow {
                row: row_text(&record),
                columns: record.len(),
            });
        }

        rows.push(Ohlc {
            time: record.get(0).unwrap_or_default().to_string(),
            open: parse_field(&record, 1, "open")?,
            high: parse_field(&record, 2, "high")?,
            low: parse_field(&record, 3, "low")?,
            close: parse_field(&record, 4, "close")?,
            volume: parse_field(&record, 5, "volume")?,
        });
    }

    debug!(rows = rows.len(), "decoded tabular body");
    Ok(rows)
}

/// Parses one numeric column, attributing failure to the logical field.
fn parse_field(record: &StringRecord, index: usize, field: &'static str) -> Result<f64> {
    let raw = record.get(index).ok_or_else(|| VantageError::ShortRow {
        row: row_text(record),
        columns: record.len(),
    })?;
    raw.parse().map_err(|_| VantageError::Field {
        field,
        row: row_text(record),
    })
}

/// Reconstructs a row for error messages.
fn row_text(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
