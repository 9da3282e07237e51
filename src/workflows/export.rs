use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::models::SeriesRecord;
use crate::error::{Result, ScrapeError};

pub const HEADER: [&str; 5] = ["Title", "Rating", "Genre", "Actors", "Runtime"];

/// Write the header and one row per record, in order, to `path`.
pub fn write_csv(path: &Path, records: &[SeriesRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| ScrapeError::io(path, e))?;
    write_records(file, records).map_err(|e| write_error(path, e))
}

pub fn write_records<W: Write>(out: W, records: &[SeriesRecord]) -> csv::Result<()> {
    // The header is written explicitly so an empty run still produces it.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

// I/O failures carry the path like the failure to create the file does.
fn write_error(path: &Path, err: csv::Error) -> ScrapeError {
    if err.is_io_error() {
        ScrapeError::io(path, err.into())
    } else {
        ScrapeError::Csv(err)
    }
}
