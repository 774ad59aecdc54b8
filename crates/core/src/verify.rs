//! Format and checksum checks for identifiers that appear in payloads.
//!
//! Every function here is pure and total: malformed input yields `false`,
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Local business UEN: eight digits and a check letter (`53012345D`).
const UEN_BUSINESS_PATTERN: &str = r"^[0-9]{8}[A-Z]$";

/// Local company UEN: nine digits and a check letter (`199900650G`).
const UEN_COMPANY_PATTERN: &str = r"^[0-9]{9}[A-Z]$";

/// Other entity UEN: century prefix, year, entity type, serial, check letter
/// (`T09LL0001B`).
const UEN_ENTITY_PATTERN: &str = r"^[RST][0-9]{2}[A-Z]{2}[0-9]{4}[A-Z]$";

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Weights applied to the seven NRIC/FIN digits.
const NRIC_WEIGHTS: [u32; 7] = [2, 7, 6, 5, 4, 3, 2];

/// Check letters for S/T series, indexed by `10 - (sum % 11)`.
const NRIC_CHECK_ST: &[u8; 11] = b"ABCDEFGHIZJ";

/// Check letters for F/G series.
const NRIC_CHECK_FG: &[u8; 11] = b"KLMNPQRTUWX";

/// Check letters for M series.
const NRIC_CHECK_M: &[u8; 11] = b"KLJNPQRTUWX";

static UEN_BUSINESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UEN_BUSINESS_PATTERN).expect("valid regex"));
static UEN_COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UEN_COMPANY_PATTERN).expect("valid regex"));
static UEN_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UEN_ENTITY_PATTERN).expect("valid regex"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Check a UEN against the three registered UEN formats.
pub fn verify_uen(uen: &str) -> bool {
    match uen.len() {
        9 => UEN_BUSINESS_RE.is_match(uen),
        10 => UEN_COMPANY_RE.is_match(uen) || UEN_ENTITY_RE.is_match(uen),
        _ => false,
    }
}

/// Check an NRIC or FIN number, including its check letter.
pub fn verify_nric(nric: &str) -> bool {
    let bytes = nric.as_bytes();
    if bytes.len() != 9 {
        return false;
    }

    let prefix = bytes[0];
    let (offset, table) = match prefix {
        b'S' => (0, NRIC_CHECK_ST),
        b'T' => (4, NRIC_CHECK_ST),
        b'F' => (0, NRIC_CHECK_FG),
        b'G' => (4, NRIC_CHECK_FG),
        b'M' => (3, NRIC_CHECK_M),
        _ => return false,
    };

    let digits = &bytes[1..8];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .zip(NRIC_WEIGHTS)
        .map(|(d, w)| u32::from(d - b'0') * w)
        .sum::<u32>()
        + offset;

    let index = 10 - (sum % 11) as usize;
    bytes[8] == table[index]
}

/// Check that a string looks like an email address.
pub fn verify_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// HTML5-grade email check, used where the API rejects looser addresses
/// (trainer and course admin contacts).
pub fn verify_email_strict(email: &str) -> bool {
    use validator::ValidateEmail;

    email.validate_email()
}

/// `true` when the string is non-empty and made of ASCII digits only.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_NRICS: [&str; 11] = [
        "F3875860T",
        "G3327819K",
        "S5351748Z",
        "G5047559Q",
        "F1455308T",
        "S4686731I",
        "F0667074K",
        "G4961553T",
        "G8400092U",
        "T9031775F",
        "F2082173Q",
    ];

    #[test]
    fn nric_valid_numbers() {
        for nric in VALID_NRICS {
            assert!(verify_nric(nric), "{nric} should be valid");
        }
    }

    #[test]
    fn nric_rejects_malformed() {
        assert!(!verify_nric("ABCD"));
        assert!(!verify_nric("A1234567X"));
        assert!(!verify_nric("123ABC123"));
        assert!(!verify_nric(""));
    }

    #[test]
    fn nric_rejects_wrong_check_letter() {
        assert!(!verify_nric("T0101010X"));
        assert!(!verify_nric("F3875860A"));
    }

    #[test]
    fn nric_rejects_multibyte_input() {
        assert!(!verify_nric("S12345é6"));
    }

    #[test]
    fn uen_formats() {
        assert!(verify_uen("12345678A"));
        assert!(verify_uen("123456789A"));
        assert!(verify_uen("T99CC1234A"));
        assert!(verify_uen("199900650G"));
    }

    #[test]
    fn uen_rejects_bad_formats() {
        assert!(!verify_uen("A1234567A"));
        assert!(!verify_uen("1234567890"));
        assert!(!verify_uen("T99SGABCD1"));
        assert!(!verify_uen("12345678"));
        assert!(!verify_uen(""));
    }

    #[test]
    fn email_format() {
        assert!(verify_email("john@email.com"));
        assert!(verify_email("first.last+tag@sub.example.sg"));
        assert!(!verify_email("john@"));
        assert!(!verify_email("@email.com"));
        assert!(!verify_email("john email.com"));
    }

    #[test]
    fn strict_email_format() {
        assert!(verify_email_strict("admin@training.sg"));
        assert!(!verify_email_strict("admin@@training.sg"));
        assert!(!verify_email_strict("admin"));
    }

    #[test]
    fn numeric_strings() {
        assert!(is_numeric("65"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("+65"));
        assert!(!is_numeric("6a"));
    }
}
