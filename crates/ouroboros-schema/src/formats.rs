//! String formats recognised by the `format` keyword
//!
//! Email, UUID and URI are checked with pre-compiled regexes; `date` and
//! `date-time` are parsed with chrono so that impossible calendar dates such
//! as `2024-02-30` are rejected as well.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// Email regex pattern (RFC 5322 simplified)
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// URI regex pattern (scheme followed by a non-empty, space-free rest)
static URI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:[^\s]+$").unwrap()
});

/// UUID regex pattern (any version, hyphenated)
static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .unwrap()
});

// ============================================================================
// String Format
// ============================================================================

/// A `format` keyword value the compiler knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    /// Full date, `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    DateTime,
    Email,
    Uuid,
    Uri,
}

impl StringFormat {
    /// Look up a format by its keyword; unknown formats are ignored
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "date" => Some(Self::Date),
            "date-time" => Some(Self::DateTime),
            "email" => Some(Self::Email),
            "uuid" => Some(Self::Uuid),
            "uri" => Some(Self::Uri),
            _ => None,
        }
    }

    /// The keyword as written in a schema
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "date-time",
            Self::Email => "email",
            Self::Uuid => "uuid",
            Self::Uri => "uri",
        }
    }

    /// Check `value` against this format
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Self::Date => validate_date(value),
            Self::DateTime => validate_datetime(value),
            Self::Email => validate_email(value),
            Self::Uuid => validate_uuid(value),
            Self::Uri => validate_uri(value),
        }
    }
}

// ============================================================================
// Format Validators
// ============================================================================

/// Validate email format
///
/// # Example
/// ```
/// use ouroboros_schema::formats::validate_email;
///
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("invalid-email"));
/// ```
pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate URI format
pub fn validate_uri(value: &str) -> bool {
    URI_REGEX.is_match(value)
}

/// Validate hyphenated UUID format
pub fn validate_uuid(value: &str) -> bool {
    UUID_REGEX.is_match(value)
}

/// Validate an RFC 3339 date-time
///
/// # Example
/// ```
/// use ouroboros_schema::formats::validate_datetime;
///
/// assert!(validate_datetime("2024-01-19T12:00:00Z"));
/// assert!(validate_datetime("2024-01-19T12:00:00.123456789+08:00"));
/// assert!(!validate_datetime("2024-01-19 12:00"));
/// ```
pub fn validate_datetime(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
}

/// Validate a full date (YYYY-MM-DD)
pub fn validate_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
