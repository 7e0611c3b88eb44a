//! Symbol Encoder - 95-Module Bar Patterns
//!
//! Translates a canonical 12-digit code into the GS1 bar pattern:
//! start guard, six L-coded digits, center guard, six R-coded digits,
//! end guard. The digit tables are fixed constant data, never mutated.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize, ChecksumPolicy, CodeError};

/// Left-half digit patterns (odd parity). UPC-A always uses the all-L
/// left half; it never varies by number-system digit the way EAN-13 does.
const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];

/// Right-half digit patterns, the complement of the L-codes.
const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100",
    "1001110", "1010000", "1000100", "1001000", "1110100",
];

const START_GUARD: &str = "101";
const CENTER_GUARD: &str = "01010";
const END_GUARD: &str = "101";

/// Total modules in a UPC-A symbol: 3 + 42 + 5 + 42 + 3.
pub const PATTERN_MODULES: usize = 95;

/// An encoded symbol: the 95-module pattern (`'1'` ink, `'0'` blank)
/// and the canonical 12-digit code it represents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoded {
    pub pattern: String,
    pub full_code: String,
}

/// Encode raw input into a bar pattern, normalizing it first.
pub fn encode(raw: &str, policy: ChecksumPolicy) -> Result<Encoded, CodeError> {
    let full_code = normalize(raw, policy)?;

    let mut pattern = String::with_capacity(PATTERN_MODULES);
    pattern.push_str(START_GUARD);
    for b in full_code[..6].bytes() {
        pattern.push_str(L_CODES[(b - b'0') as usize]);
    }
    pattern.push_str(CENTER_GUARD);
    for b in full_code[6..].bytes() {
        pattern.push_str(R_CODES[(b - b'0') as usize]);
    }
    pattern.push_str(END_GUARD);

    Ok(Encoded { pattern, full_code })
}

/// Whether a module index falls inside a guard region
/// (start 0-2, center 45-49, end 92-94).
pub fn is_guard_module(index: usize) -> bool {
    matches!(index, 0..=2 | 45..=49 | 92..=94)
}
