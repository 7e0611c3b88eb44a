//! Input Normalizer - Canonical 12-Digit Codes
//!
//! Coerces arbitrary digit-bearing input into a canonical 12-digit UPC-A
//! code under a checksum policy, plus the boolean validator and the
//! human-readable formatter built on the same rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checksum::{calculate_checksum, sanitize};

/// How an existing 12th (check) digit is treated during normalization.
///
/// `Auto` and `Recalculate` are behaviorally identical: both overwrite the
/// check digit with the computed one. Only `Validate` rejects a mismatch.
/// The distinction exists for callers, not for this logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumPolicy {
    Auto,
    Validate,
    Recalculate,
}

impl Default for ChecksumPolicy {
    fn default() -> Self {
        Self::Auto
    }
}

#[derive(Debug, Error)]
pub enum CodeError {
    #[error("Invalid checksum: expected {expected}, got {provided}")]
    InvalidChecksum { expected: char, provided: char },

    #[error("Invalid length: requires 11 or 12 digits, got {0}")]
    InvalidLength(usize),
}

/// Normalize raw input to a canonical 12-digit code.
///
/// Non-digits are stripped first. 1-10 digits are left-padded with zeros
/// to 11 and a check digit is appended; 11 digits get the check digit
/// appended; 12 digits are resolved per `policy`. Anything else fails
/// with [`CodeError::InvalidLength`].
pub fn normalize(raw: &str, policy: ChecksumPolicy) -> Result<String, CodeError> {
    let digits = sanitize(raw);

    match digits.len() {
        1..=10 => {
            let padded = format!("{:0>11}", digits);
            let check = calculate_checksum(&padded);
            Ok(format!("{}{}", padded, check))
        }
        11 => {
            let check = calculate_checksum(&digits);
            Ok(format!("{}{}", digits, check))
        }
        12 => {
            let payload = &digits[..11];
            let expected = char::from(b'0' + calculate_checksum(payload));
            let provided = digits.as_bytes()[11] as char;

            match policy {
                ChecksumPolicy::Validate => {
                    if provided != expected {
                        Err(CodeError::InvalidChecksum { expected, provided })
                    } else {
                        Ok(digits)
                    }
                }
                ChecksumPolicy::Auto | ChecksumPolicy::Recalculate => {
                    Ok(format!("{}{}", payload, expected))
                }
            }
        }
        len => Err(CodeError::InvalidLength(len)),
    }
}

/// Whether raw input is acceptable to the normalizer.
///
/// 1-11 digits always pass (padding and checksum computation handle them);
/// 12 digits pass only when the check digit matches.
pub fn validate(raw: &str) -> bool {
    let digits = sanitize(raw);

    match digits.len() {
        1..=11 => true,
        12 => {
            let expected = calculate_checksum(&digits[..11]);
            digits.as_bytes()[11] == b'0' + expected
        }
        _ => false,
    }
}

/// Format a code as `D-DDDDD-DDDDD-D` (1-5-5-1 grouping).
///
/// Input that is not already a clean 12-digit string is normalized with
/// the default policy first.
pub fn format_upc(code: &str) -> Result<String, CodeError> {
    let clean = code.len() == 12 && code.bytes().all(|b| b.is_ascii_digit());
    let full = if clean {
        code.to_string()
    } else {
        normalize(code, ChecksumPolicy::default())?
    };

    Ok(format!(
        "{}-{}-{}-{}",
        &full[..1],
        &full[1..6],
        &full[6..11],
        &full[11..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_digits_get_check_digit() {
        assert_eq!(normalize("01234567890", ChecksumPolicy::Auto).unwrap(), "012345678905");
    }

    #[test]
    fn test_short_input_padded_then_checksummed() {
        assert_eq!(normalize("12345", ChecksumPolicy::Auto).unwrap(), "000001234506");
    }

    #[test]
    fn test_validate_policy_accepts_matching_check_digit() {
        assert_eq!(
            normalize("012345678905", ChecksumPolicy::Validate).unwrap(),
            "012345678905"
        );
    }

    #[test]
    fn test_validate_policy_rejects_mismatch() {
        let err = normalize("012345678900", ChecksumPolicy::Validate).unwrap_err();
        match err {
            CodeError::InvalidChecksum { expected, provided } => {
                assert_eq!(expected, '5');
                assert_eq!(provided, '0');
            }
            other => panic!("expected InvalidChecksum, got {other:?}"),
        }
    }

    #[test]
    fn test_recalculate_overwrites_check_digit() {
        assert_eq!(
            normalize("012345678900", ChecksumPolicy::Recalculate).unwrap(),
            "012345678905"
        );
        // Auto behaves identically.
        assert_eq!(
            normalize("012345678900", ChecksumPolicy::Auto).unwrap(),
            "012345678905"
        );
    }

    #[test]
    fn test_empty_and_oversized_inputs_fail() {
        assert!(matches!(
            normalize("", ChecksumPolicy::Auto),
            Err(CodeError::InvalidLength(0))
        ));
        assert!(matches!(
            normalize("0123456789012", ChecksumPolicy::Auto),
            Err(CodeError::InvalidLength(13))
        ));
    }

    #[test]
    fn test_non_digits_stripped_before_length_check() {
        assert_eq!(
            normalize("0-12345-67890", ChecksumPolicy::Auto).unwrap(),
            "012345678905"
        );
    }

    #[test]
    fn test_checksum_error_message_names_both_digits() {
        let err = normalize("012345678900", ChecksumPolicy::Validate).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('0'), "message was: {msg}");
    }

    #[test]
    fn test_validate_fn() {
        assert!(validate("012345678905"));
        assert!(!validate("012345678900"));
        assert!(validate("01234567890"));
        assert!(validate("12345"));
        assert!(!validate(""));
        assert!(!validate("0123456789012"));
    }

    #[test]
    fn test_format_upc() {
        assert_eq!(format_upc("012345678905").unwrap(), "0-12345-67890-5");
    }

    #[test]
    fn test_format_upc_normalizes_unclean_input() {
        assert_eq!(format_upc("01234567890").unwrap(), "0-12345-67890-5");
        assert_eq!(format_upc("12345").unwrap(), "0-00001-23450-6");
    }
}
