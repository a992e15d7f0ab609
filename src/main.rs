//! Mobile number generator entry point.
//!
//! Loads configuration, runs the generation pipeline, prints the report and
//! exits with a status code naming the failure category.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use mobile_numgen::cli::Cli;
use mobile_numgen::config::AppConfig;
use mobile_numgen::error::AppError;
use mobile_numgen::export::XlsxSink;
use mobile_numgen::{init_logging, run};

fn main() -> ExitCode {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => return fail(&AppError::from(e)),
    };

    init_logging(&config);

    let sink = XlsxSink::new(&config.output);
    let summary = match run(&config, &sink) {
        Ok(summary) => summary,
        Err(e) => return fail(&e),
    };

    match summary.report.render(config.output.report_format) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => return fail(&e),
    }

    println!(
        "Successfully generated {} unique numbers and saved to {}",
        summary.report.validation.total_count,
        summary.output.display()
    );

    ExitCode::SUCCESS
}

fn fail(err: &AppError) -> ExitCode {
    let code = err.exit_code();
    error!(exit_code = %code, category = %code.category(), error = %err, "Run aborted");
    eprintln!("error: {err}");
    code.into()
}
