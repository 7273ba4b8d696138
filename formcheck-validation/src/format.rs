// Format predicates

use formcheck_text::{count_occurrences, digit_count, remove_whitespace};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII-only case folding keeps `K` (Kelvin sign) and friends out of the TLD.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@(?:[A-Z0-9-]+\.)+[A-Z]{2,4}$").unwrap());

/// Minimum digits for a phone number
pub const PHONE_MIN_DIGITS: usize = 10;

/// Digit counts accepted as a zip code (ZIP and ZIP+4)
pub const ZIP_DIGIT_COUNTS: [usize; 2] = [5, 9];

/// Card number length bounds, inclusive
pub const CARD_MIN_LENGTH: usize = 7;
pub const CARD_MAX_LENGTH: usize = 19;

/// Smallest numeric value accepted as a card number
pub const CARD_MIN_VALUE: u64 = 1_000_000;

/// Stateless string-format predicates.
///
/// Every function is pure: no logging, no allocation that outlives the
/// call, and no panics on malformed input.
///
/// ```
/// use formcheck_validation::FormatValidator;
///
/// assert!(FormatValidator::is_email("jane.doe+news@mail.example.org"));
/// assert!(FormatValidator::is_phone("(555) 010-9999"));
/// assert!(FormatValidator::is_zip("12345-6789"));
/// assert!(FormatValidator::is_credit_card("4111111111111111"));
/// assert!(FormatValidator::is_empty(" \t\r\n"));
/// ```
pub struct FormatValidator;

impl FormatValidator {
    /// Case-sensitive substring test. An empty `search` is always contained.
    pub fn contains(source: &str, search: &str) -> bool {
        search.is_empty() || count_occurrences(source, search) > 0
    }

    /// Matches `local@label.label.tld` where the local part allows letters,
    /// digits and `._%+-`, labels allow letters, digits and `-`, and the
    /// TLD is 2 to 4 letters. Case-insensitive.
    pub fn is_email(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }

    /// True when nothing but whitespace remains.
    pub fn is_empty(value: &str) -> bool {
        remove_whitespace(value).is_empty()
    }

    /// At least ten decimal digits anywhere in the value.
    pub fn is_phone(value: &str) -> bool {
        digit_count(value) >= PHONE_MIN_DIGITS
    }

    /// Exactly five or nine decimal digits anywhere in the value.
    pub fn is_zip(value: &str) -> bool {
        ZIP_DIGIT_COUNTS.contains(&digit_count(value))
    }

    /// Luhn check over a string made only of ASCII digits.
    ///
    /// Values shorter than 7 or longer than 19 characters, below
    /// 1,000,000, or containing anything other than digits are rejected
    /// without running the checksum.
    pub fn is_credit_card(value: &str) -> bool {
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        if !(CARD_MIN_LENGTH..=CARD_MAX_LENGTH).contains(&value.len()) {
            return false;
        }
        match value.parse::<u64>() {
            Ok(number) if number >= CARD_MIN_VALUE => luhn_sum(value) % 10 == 0,
            _ => false,
        }
    }
}

/// Luhn sum of an all-digit string, walking right to left.
fn luhn_sum(digits: &str) -> u32 {
    let mut sum = 0;
    let mut keep = true;

    for byte in digits.bytes().rev() {
        let digit = u32::from(byte - b'0');
        if keep {
            sum += digit;
        } else {
            let doubled = digit * 2;
            sum += if doubled > 8 { doubled - 9 } else { doubled };
        }
        keep = !keep;
    }

    sum
}
