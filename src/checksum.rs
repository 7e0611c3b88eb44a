//! Checksum Engine - Mod-10 Weighted Check Digit
//!
//! The UPC-A check digit over the first 11 digits. Pure and infallible:
//! any input string sanitizes to something computable.

/// Strip every non-digit character.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Compute the UPC-A check digit for an 11-digit payload.
///
/// Non-digits are stripped first. Fewer than 11 digits are left-padded
/// with zeros; more than 11 are truncated to the first 11. Weights are
/// 3 for even 0-based positions and 1 for odd ones (the number-system
/// digit carries weight 3).
pub fn calculate_checksum(eleven_digits: &str) -> u8 {
    let digits = pad_to_eleven(&sanitize(eleven_digits));

    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 { d * 3 } else { d }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

fn pad_to_eleven(digits: &str) -> String {
    if digits.len() >= 11 {
        digits[..11].to_string()
    } else {
        format!("{:0>11}", digits)
    }
}
