use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ErrorKind;
use crate::idn::to_ascii;

/// Hostname length cap, delimiting dots included.
const MAX_DOMAIN_LENGTH: usize = 255;

/// Per-label length cap.
const MAX_LABEL_LENGTH: usize = 63;

/// Allowed characters in an ASCII-encoded label.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9-]+$").expect("LABEL_PATTERN: hardcoded regex is invalid")
});

/// Check a lowercased, trailing-dot-stripped domain for hostname validity.
///
/// The input is ASCII-encoded first so IDN labels are measured in their
/// encoded form. Labels are scanned left to right and the first violation
/// found is returned; `None` means the domain is a valid hostname shape.
pub fn validate(domain: &str) -> Option<ErrorKind> {
    let ascii = to_ascii(domain);

    if ascii.is_empty() {
        return Some(ErrorKind::DomainTooShort);
    }
    if ascii.len() > MAX_DOMAIN_LENGTH {
        return Some(ErrorKind::DomainTooLong);
    }

    for label in ascii.split('.') {
        if label.is_empty() {
            return Some(ErrorKind::LabelTooShort);
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Some(ErrorKind::LabelTooLong);
        }
        if label.starts_with('-') {
            return Some(ErrorKind::LabelStartsWithDash);
        }
        if label.ends_with('-') {
            return Some(ErrorKind::LabelEndsWithDash);
        }
        if !LABEL_PATTERN.is_match(label) {
            return Some(ErrorKind::LabelInvalidChars);
        }
    }

    None
}
