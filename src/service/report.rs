//! End-of-run report.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ReportFormat;
use crate::domain::{PhoneNumber, ValidationReport};
use crate::error::Result;

const RULE_WIDTH: usize = 70;
const HEAD_ROWS: usize = 5;
const TAIL_ROWS: usize = 3;
/// Tail rows are only shown for datasets larger than this.
const TAIL_THRESHOLD: usize = 10;

/// Summary of a finished generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Shared prefix.
    pub prefix: String,
    /// Digits per number.
    pub total_length: usize,
    /// Shape of the numbers, e.g. `019XXXXXXXX`.
    pub pattern: String,
    /// Seed used for sampling.
    pub seed: u64,
    /// Generation wall time in milliseconds.
    pub elapsed_ms: f64,
    /// Numbers per second, absent when the run took no measurable time.
    pub throughput: Option<f64>,
    /// Validator output.
    pub validation: ValidationReport,
    /// First rows of the result.
    pub head: Vec<PhoneNumber>,
    /// Last rows of the result, each with its 1-based row number.
    pub tail: Vec<(usize, PhoneNumber)>,
}

impl GenerationReport {
    /// Build a report for `numbers`.
    #[must_use]
    pub fn new(
        prefix: &str,
        pattern: String,
        seed: u64,
        numbers: &[PhoneNumber],
        elapsed: Duration,
        validation: ValidationReport,
    ) -> Self {
        let secs = elapsed.as_secs_f64();
        #[allow(clippy::cast_precision_loss)]
        let throughput = (secs > 0.0).then(|| numbers.len() as f64 / secs);

        let head = numbers.iter().take(HEAD_ROWS).cloned().collect();
        let tail = if numbers.len() > TAIL_THRESHOLD {
            let start = numbers.len() - TAIL_ROWS;
            numbers[start..]
                .iter()
                .enumerate()
                .map(|(i, n)| (start + i + 1, n.clone()))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            generated_at: Utc::now(),
            prefix: prefix.to_string(),
            total_length: pattern.len(),
            pattern,
            seed,
            elapsed_ms: secs * 1000.0,
            throughput,
            validation,
            head,
            tail,
        }
    }

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// Returns `Report` if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render as a human-readable text block.
    #[must_use]
    pub fn render_text(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let v = &self.validation;
        let mut lines = vec![
            rule.clone(),
            "MOBILE NUMBERS - GENERATION REPORT".to_string(),
            rule.clone(),
            format!(
                "Generated on: {}",
                self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            String::new(),
            "DATASET SPECIFICATIONS:".to_string(),
            format!("├── Prefix: {}", self.prefix),
            format!("├── Total digits: {}", self.total_length),
            format!("├── Format: {}", self.pattern),
            format!("├── Seed: {}", self.seed),
            format!("└── Target count: {}", v.total_count),
            String::new(),
            "PERFORMANCE METRICS:".to_string(),
            format!("├── Generation time: {:.3} ms", self.elapsed_ms),
            match self.throughput {
                Some(rate) => format!("└── Speed: {rate:.0} numbers/second"),
                None => "└── Speed: n/a".to_string(),
            },
            String::new(),
            "VALIDATION RESULTS:".to_string(),
            format!("├── Total numbers: {}", v.total_count),
            format!("├── Unique numbers: {}", v.unique_count),
            format!("├── Correct prefix: {}", v.correct_prefix),
            format!("├── Correct length: {}", v.correct_length),
            format!("├── All numeric: {}", v.all_numeric),
            format!(
                "└── Validation status: {}",
                if v.is_passed() { "PASSED" } else { "FAILED" }
            ),
        ];

        if !v.violations.is_empty() {
            lines.push(String::new());
            lines.push("ISSUES FOUND:".to_string());
            lines.extend(v.violations.iter().map(|violation| format!("├── {violation}")));
        }
        lines.push(String::new());

        lines.push("SAMPLE DATA:".to_string());
        lines.extend(
            self.head
                .iter()
                .enumerate()
                .map(|(i, number)| format!("├── {:2}. {number}", i + 1)),
        );
        if !self.tail.is_empty() {
            lines.push("├── ...".to_string());
            lines.extend(
                self.tail
                    .iter()
                    .map(|(row, number)| format!("├── {row:4}. {number}")),
            );
        }
        lines.push(rule);

        lines.join("\n")
    }
}
