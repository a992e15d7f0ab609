use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ReportFormat};

#[derive(Debug, Default, Parser)]
#[command(name = "mobile-numgen")]
#[command(about = "Generate unique prefixed mobile numbers into a spreadsheet", version)]
pub struct Cli {
    #[arg(long, help = "Extra TOML configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Leading digits shared by every number [default: 019]")]
    pub prefix: Option<String>,
    #[arg(long, help = "Total digits per number, prefix included [default: 11]")]
    pub total_length: Option<u32>,
    #[arg(long, help = "Number of unique numbers to generate [default: 3000]")]
    pub count: Option<usize>,
    #[arg(long, help = "Random seed [default: 42]")]
    pub seed: Option<u64>,
    #[arg(short, long, help = "Output workbook path")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Header label of the number column [default: Mobile_Number]")]
    pub column_name: Option<String>,
    #[arg(long, value_enum, help = "Report format printed after the run")]
    pub report_format: Option<ReportFormat>,
    #[arg(long, help = "Log level filter (overridden by RUST_LOG)")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Copy every flag that was given onto `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(prefix) = &self.prefix {
            config.generator.prefix.clone_from(prefix);
        }
        if let Some(total_length) = self.total_length {
            config.generator.total_length = total_length;
        }
        if let Some(count) = self.count {
            config.generator.count = count;
        }
        if let Some(seed) = self.seed {
            config.generator.seed = seed;
        }
        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }
        if let Some(column_name) = &self.column_name {
            config.output.column_name.clone_from(column_name);
        }
        if let Some(report_format) = self.report_format {
            config.output.report_format = report_format;
        }
        if let Some(log_level) = &self.log_level {
            config.observability.log_level.clone_from(log_level);
        }
    }
}
