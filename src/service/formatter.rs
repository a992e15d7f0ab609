//! Phone number formatting.

use crate::domain::PhoneNumber;
use crate::error::{AppError, Result};

/// Render `prefix` followed by `suffix` zero-padded to `suffix_length` digits.
///
/// The output is always `prefix.len() + suffix_length` characters long.
///
/// # Errors
///
/// Returns `Overflow` if `suffix` needs more than `suffix_length` digits, which
/// means the universe and the suffix width disagree.
pub fn format_phone_number(suffix: u64, suffix_length: u32, prefix: &str) -> Result<PhoneNumber> {
    // Beyond 19 digits every u64 fits.
    if let Some(limit) = 10u64.checked_pow(suffix_length)
        && suffix >= limit
    {
        return Err(AppError::Overflow {
            value: suffix,
            width: suffix_length,
        });
    }

    Ok(PhoneNumber::new(format!(
        "{prefix}{suffix:0width$}",
        width = suffix_length as usize
    )))
}
