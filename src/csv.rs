//! Reading and writing [Table]s as CSV.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use tracing::debug;

use crate::error::DataError;
use crate::table::{Cell, Table};

/// Parses a single CSV record into a row of cells.
pub fn parse_record(record: &StringRecord) -> Vec<Cell> {
    record.iter().map(Cell::parse).collect()
}

/// Reads a table whose first record is the header.
pub fn read_table(reader: impl io::Read) -> Result<Table, DataError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let columns = reader
        .headers()?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    let mut table = Table::new(columns);
    for record in reader.records() {
        table.push_row(parse_record(&record?))?;
    }
    Ok(table)
}

pub fn read_table_from_file(path: impl AsRef<Path>) -> Result<Table, DataError> {
    let path = path.as_ref();
    let table = read_table(File::open(path)?)?;
    debug!(
        "read {} rows × {} columns from {path:?}",
        table.num_rows(),
        table.num_cols()
    );
    Ok(table)
}

pub struct CsvWriter<W: io::Write> {
    writer: Writer<W>,
}
impl CsvWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Ok(Self {
            writer: Writer::from_path(path)?,
        })
    }
}
impl<W: io::Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::from_writer(writer),
        }
    }

    pub fn append<R>(&mut self, record: R) -> Result<(), DataError>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let record = record.into_iter().collect::<Vec<_>>();
        self.writer
            .write_record(record.iter().map(|datum| datum.as_ref().as_bytes()))?;
        Ok(())
    }

    /// Writes the header followed by every row. Missing cells are written as `NaN`.
    pub fn append_table(&mut self, table: &Table) -> Result<(), DataError> {
        self.append(table.columns())?;
        for row in table.rows() {
            self.append(row.iter().map(ToString::to_string))?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), DataError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, DataError> {
        self.writer
            .into_inner()
            .map_err(|err| DataError::Io(err.into_error()))
    }
}
