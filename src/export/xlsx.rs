//! Excel workbook sink.
//!
//! Writes one worksheet with a bold header row and one text cell per number.
//! Cells use the `@` number format so spreadsheet tools keep leading zeros.

use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::info;

use crate::config::OutputConfig;
use crate::domain::PhoneNumber;
use crate::error::{AppError, Result};
use crate::export::traits::TableSink;

const FONT_NAME: &str = "Arial";

/// `.xlsx` implementation of [`TableSink`].
#[derive(Debug, Clone)]
pub struct XlsxSink {
    /// Destination workbook path.
    path: PathBuf,
    /// Worksheet name.
    sheet_name: String,
    /// Width of the number column.
    column_width: f64,
}

impl XlsxSink {
    /// Create a new workbook sink.
    #[must_use]
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            path: config.path.clone(),
            sheet_name: config.sheet_name.clone(),
            column_width: config.column_width,
        }
    }

    /// Ensure the parent directory of the workbook exists.
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Failed to create directory {}: {e}", parent.display()))
            })?;
        }
        Ok(())
    }
}

impl TableSink for XlsxSink {
    fn write_column(&self, column_name: &str, rows: &[PhoneNumber]) -> Result<PathBuf> {
        info!(count = rows.len(), path = %self.path.display(), "Saving numbers to workbook");

        let header_format = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(12)
            .set_bold();
        let cell_format = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(11)
            .set_align(FormatAlign::Left)
            .set_num_format("@");

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;
        worksheet.set_column_width(0, self.column_width)?;
        worksheet.write_string_with_format(0, 0, column_name, &header_format)?;

        for (index, number) in rows.iter().enumerate() {
            let row = u32::try_from(index + 1)
                .map_err(|_| AppError::Io(format!("row {} exceeds worksheet limits", index + 1)))?;
            worksheet.write_string_with_format(row, 0, number.as_str(), &cell_format)?;
        }

        self.ensure_parent_dir()?;
        workbook.save(&self.path)?;

        info!(path = %self.path.display(), "Workbook saved");
        Ok(self.path.clone())
    }
}
