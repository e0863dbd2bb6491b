use std::fmt;

use serde::Serialize;

use crate::error::AppError;

/// Closed taxonomy of extraction failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Connection,
    Timeout,
    /// The server answered, but not with a usable page.
    BadResponse,
    /// The fetched content is not in the expected shape.
    InvalidData,
    /// The markup no longer matches what the extractors expect.
    StructureMismatch,
    Unknown,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Connection => "connection",
            FailureKind::Timeout => "timeout",
            FailureKind::BadResponse => "bad_response",
            FailureKind::InvalidData => "invalid_data",
            FailureKind::StructureMismatch => "structure_mismatch",
            FailureKind::Unknown => "unknown",
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FailureKind::Connection => "Check internet connection and website availability",
            FailureKind::Timeout => "Website is taking too long to respond. Try again later.",
            FailureKind::BadResponse => "Check if the URL is valid and accessible",
            FailureKind::InvalidData => "Invalid data format. Verify the scraped content",
            FailureKind::StructureMismatch => "HTML structure may have changed. Update selectors.",
            FailureKind::Unknown => "Check logs and try again",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured description of a failed extraction, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub vendor: String,
    pub url: String,
    pub error_kind: FailureKind,
    pub message: String,
    pub recovery_suggestion: &'static str,
    /// Whether the caller may reasonably retry; the core never does.
    pub retryable: bool,
}

pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Turn any failure into a [`FailureReport`], keeping its message.
    pub fn classify(error: &AppError, url: &str, vendor: &str) -> FailureReport {
        let kind = error.category();
        FailureReport {
            vendor: vendor.to_string(),
            url: url.to_string(),
            error_kind: kind,
            message: error.to_string(),
            recovery_suggestion: kind.recovery_suggestion(),
            retryable: error.is_retryable(),
        }
    }
}
