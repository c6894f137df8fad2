//! ASCII-compatible (IDNA) encoding helpers.

/// Marker prefix of ASCII-compatible-encoded labels.
pub(crate) const ACE_PREFIX: &str = "xn--";

/// Encode a domain to its ASCII-compatible form.
///
/// Inputs that IDNA refuses (stray symbols, broken punycode) are passed
/// through unchanged; the validator reports them as invalid characters
/// instead of this function failing the whole parse.
pub(crate) fn to_ascii(domain: &str) -> String {
    idna::domain_to_ascii(domain).unwrap_or_else(|_| domain.to_string())
}
