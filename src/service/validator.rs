//! Post-generation checks.
//!
//! Every check runs independently so that one report can carry several
//! violations. The validator only detects problems; it never repairs data.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::domain::{PhoneNumber, ValidationReport, Violation};

/// Check count, prefix, length, digit content and distinctness of `results`.
#[must_use]
pub fn validate(
    results: &[PhoneNumber],
    expected_count: usize,
    expected_prefix: &str,
    expected_length: usize,
) -> ValidationReport {
    info!(count = results.len(), "Validating generated dataset");

    let total_count = results.len();
    let unique_count = results.iter().collect::<HashSet<_>>().len();
    let duplicates_found = total_count - unique_count;
    let correct_prefix = results
        .iter()
        .filter(|n| n.as_str().starts_with(expected_prefix))
        .count();
    let correct_length = results.iter().filter(|n| n.len() == expected_length).count();
    let all_numeric = results
        .iter()
        .filter(|n| n.as_str().bytes().all(|b| b.is_ascii_digit()))
        .count();

    let mut violations = Vec::new();
    if total_count != expected_count {
        violations.push(Violation::CountMismatch {
            expected: expected_count,
            actual: total_count,
        });
    }
    if correct_prefix != total_count {
        violations.push(Violation::WrongPrefix {
            count: total_count - correct_prefix,
        });
    }
    if correct_length != total_count {
        violations.push(Violation::WrongLength {
            count: total_count - correct_length,
        });
    }
    if all_numeric != total_count {
        violations.push(Violation::NonNumeric {
            count: total_count - all_numeric,
        });
    }
    if duplicates_found > 0 {
        violations.push(Violation::Duplicates {
            count: duplicates_found,
        });
    }

    for violation in &violations {
        warn!(%violation, "Validation check failed");
    }

    ValidationReport {
        total_count,
        unique_count,
        duplicates_found,
        correct_prefix,
        correct_length,
        all_numeric,
        violations,
    }
}
