//! CSV export of the attempt history for spreadsheet tools.
//!
//! The file starts with a UTF-8 byte order mark, has a header row, quotes
//! every field and lists the newest attempt first.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use gatekeeper_journal::HistoryStore;
use gatekeeper_types::AttemptRecord;
use tracing::debug;

use crate::error::CliError;

pub const CSV_HEADER: [&str; 6] = ["id", "code", "entry_time", "status", "category", "reason"];

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Newest first by timestamp, ties broken by the higher id.
pub fn newest_first(mut records: Vec<AttemptRecord>) -> Vec<AttemptRecord> {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
    records
}

/// Write `records` in the order given. Returns the number of data rows.
pub fn write_csv<W: Write>(mut out: W, records: &[AttemptRecord]) -> Result<usize, CliError> {
    out.write_all(BOM).map_err(csv::Error::from)?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        let id = record.id.to_string();
        let entry_time = record.timestamp_text();
        writer.write_record([
            id.as_str(),
            record.code.as_str(),
            entry_time.as_str(),
            record.status.as_str(),
            record.category.as_str(),
            record.reason.as_str(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(records.len())
}

/// Export the whole history of `store`, newest first.
pub fn export_history<S: HistoryStore, W: Write>(store: &S, out: W) -> Result<usize, CliError> {
    let records = newest_first(store.records()?);
    let rows = write_csv(out, &records)?;
    debug!(rows, "exported history");
    Ok(rows)
}
