use serde::Serialize;
use thiserror::Error;

/// Validation error kinds for domain name input.
///
/// These are data, not failures: `parse` reports them on
/// [`ParseResult::error`](crate::ParseResult) instead of returning `Err`.
/// Checks run in a fixed order and the first violation wins, so the kinds
/// are mutually exclusive for any given input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[error("Domain name too short.")]
    DomainTooShort,

    #[error("Domain name too long. It should be no more than 255 chars.")]
    DomainTooLong,

    #[error("Domain name label should be at least 1 character long.")]
    LabelTooShort,

    #[error("Domain name label should be at most 63 chars long.")]
    LabelTooLong,

    #[error("Domain name label can not start with a dash.")]
    LabelStartsWithDash,

    #[error("Domain name label can not end with a dash.")]
    LabelEndsWithDash,

    #[error("Domain name label can only contain alphanumeric characters or dashes.")]
    LabelInvalidChars,
}

impl ErrorKind {
    /// Stable string code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::DomainTooShort => "DOMAIN_TOO_SHORT",
            ErrorKind::DomainTooLong => "DOMAIN_TOO_LONG",
            ErrorKind::LabelTooShort => "LABEL_TOO_SHORT",
            ErrorKind::LabelTooLong => "LABEL_TOO_LONG",
            ErrorKind::LabelStartsWithDash => "LABEL_STARTS_WITH_DASH",
            ErrorKind::LabelEndsWithDash => "LABEL_ENDS_WITH_DASH",
            ErrorKind::LabelInvalidChars => "LABEL_INVALID_CHARS",
        }
    }
}

/// Errors from loading an external rule list.
///
/// Rule *content* is never validated (the list comes from a trusted,
/// pre-vetted refresh process; garbage rules silently fail to match), so
/// these only cover reading and decoding the snapshot itself.
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Failed to read rule list '{path}': {source}")]
    RuleListRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rule list JSON: {0}")]
    RuleListJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
