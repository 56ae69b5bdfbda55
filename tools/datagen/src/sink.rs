//! Record sinks
//!
//! The generator is agnostic to its destination: anything that accepts
//! ordered rows of text fields works. `CsvSink` covers the file, stdout,
//! and in-memory cases through its underlying writer type.

use crate::error::DatagenError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Destination for generated rows, appended in emission order
pub trait RecordSink {
    /// Append one row of fields
    fn append(&mut self, fields: &[String]) -> Result<(), DatagenError>;

    /// Flush buffered rows; called once after the final append
    fn finish(&mut self) -> Result<(), DatagenError>;
}

/// CSV sink over any `io::Write` destination
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create a sink writing to a file path
    ///
    /// Fails up front when the path is not creatable/writable, which is
    /// what triggers the CLI's stdout fallback.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatagenError> {
        Ok(Self {
            writer: csv::Writer::from_path(path)?,
        })
    }
}

impl CsvSink<io::Stdout> {
    /// Create a sink writing to standard output
    pub fn stdout() -> Self {
        Self {
            writer: csv::Writer::from_writer(io::stdout()),
        }
    }
}

impl<W: Write> CsvSink<W> {
    /// Create a sink over an arbitrary writer (in-memory buffers in tests)
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Flush and recover the underlying writer
    pub fn into_inner(self) -> Result<W, DatagenError> {
        self.writer.into_inner().map_err(|e| {
            DatagenError::Io(io::Error::new(io::ErrorKind::Other, e.to_string()))
        })
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn append(&mut self, fields: &[String]) -> Result<(), DatagenError> {
        Ok(self.writer.write_record(fields)?)
    }

    fn finish(&mut self) -> Result<(), DatagenError> {
        Ok(self.writer.flush()?)
    }
}
