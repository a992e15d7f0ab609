//! Export trait definitions.
//!
//! The pipeline hands its result to a sink without knowing the file format,
//! so tests can swap the workbook writer for an in-memory sink.

use std::path::PathBuf;

use crate::domain::PhoneNumber;
use crate::error::Result;

/// Destination for a single-column table of phone numbers.
pub trait TableSink {
    /// Write `rows` under the header `column_name`, in the given order.
    ///
    /// Any previous artifact at the destination is replaced.
    ///
    /// # Returns
    ///
    /// The location of the written artifact.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the destination cannot be created or written.
    fn write_column(&self, column_name: &str, rows: &[PhoneNumber]) -> Result<PathBuf>;
}
