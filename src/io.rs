//! CSV helpers shared by every record type.
//!
//! All tables in this crate are headed CSV files whose columns match the
//! serde field names of the record type. Unknown columns are ignored on read.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Deserializes every row of a headed CSV stream.
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    log::debug!("read {} csv rows", rows.len());
    Ok(rows)
}

/// Deserializes every row of a headed CSV file.
pub fn read_records_from_path<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    read_records(File::open(path)?)
}

/// Serializes rows as headed CSV.
pub fn write_records<T, W>(writer: W, rows: &[T]) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serializes rows as headed CSV into a file, replacing it if it exists.
pub fn write_records_to_path<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let path = path.as_ref();
    log::debug!("writing {} rows to {}", rows.len(), path.display());
    write_records(File::create(path)?, rows)
}
