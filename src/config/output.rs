//! Output configuration.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

/// How the end-of-run report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text block.
    #[default]
    Text,
    /// Single JSON document.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Spreadsheet output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Destination workbook path. Overwritten on every run.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Header label of the single column.
    #[serde(default = "default_column_name")]
    pub column_name: String,

    /// Worksheet name.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Column width in character units.
    #[serde(default = "default_column_width")]
    pub column_width: f64,

    /// Report format.
    #[serde(default)]
    pub report_format: ReportFormat,
}

fn default_path() -> PathBuf {
    PathBuf::from("bangladesh_mobile_numbers.xlsx")
}

fn default_column_name() -> String {
    "Mobile_Number".to_string()
}

fn default_sheet_name() -> String {
    "Mobile Numbers".to_string()
}

const fn default_column_width() -> f64 {
    15.0
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            column_name: default_column_name(),
            sheet_name: default_sheet_name(),
            column_width: default_column_width(),
            report_format: ReportFormat::Text,
        }
    }
}

impl OutputConfig {
    /// Validate the output configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or the path is missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::Message("output.path cannot be empty".to_string()));
        }
        if self.column_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "output.column_name cannot be empty".to_string(),
            ));
        }
        if self.sheet_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "output.sheet_name cannot be empty".to_string(),
            ));
        }
        if self.column_width <= 0.0 {
            return Err(ConfigError::Message(
                "output.column_width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
