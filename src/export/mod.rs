//! Export layer module.
//!
//! This module provides a trait-based sink abstraction for the final table,
//! with an Excel workbook implementation.

pub mod traits;
pub mod xlsx;

pub use traits::TableSink;
pub use xlsx::XlsxSink;
