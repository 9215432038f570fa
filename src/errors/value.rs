use std::fmt;
use tracing::warn;

use super::kinds::ErrorKind;

/// One normalized application failure: status, title, detail.
///
/// Immutable once built; the `with_*` methods consume and return a new
/// value. Title and detail are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    status: u16,
    title: String,
    detail: String,
}

impl ErrorEntry {
    /// Entry with the internal-error catalog defaults
    pub fn new() -> Self {
        Self::of(ErrorKind::InternalError)
    }

    /// Entry pre-filled from a catalog kind
    pub fn of(kind: ErrorKind) -> Self {
        Self {
            status: kind.status(),
            title: kind.title().to_string(),
            detail: kind.default_detail().to_string(),
        }
    }

    /// Replace the detail message. Empty overrides are ignored so the
    /// detail stays non-empty.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if !detail.is_empty() {
            self.detail = detail;
        }
        self
    }

    /// Replace the title. Empty overrides are ignored.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    /// Replace the HTTP status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl Default for ErrorEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

/// A recognized application error: a single entry or an ordered bundle.
///
/// Both variants are one type, so a boundary handler holding an
/// [`anyhow::Error`] can test for "recognized application error" with a
/// single downcast and treat them uniformly. Implements
/// [`std::error::Error`], so it travels `Result` and `?` like any other
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Single(ErrorEntry),
    #[error("{} errors", .0.len())]
    Multi(Vec<ErrorEntry>),
}

impl ApiError {
    /// Wrap one entry
    pub fn single(entry: ErrorEntry) -> Self {
        Self::Single(entry)
    }

    /// Bundle several entries; order is preserved in the formatted
    /// output. An empty bundle is allowed.
    pub fn multi(entries: Vec<ErrorEntry>) -> Self {
        Self::Multi(entries)
    }

    /// Single error pre-filled from a catalog kind
    pub fn of(kind: ErrorKind) -> Self {
        Self::Single(ErrorEntry::of(kind))
    }

    /// The entries as an ordered slice; a single error is a
    /// one-element sequence.
    pub fn entries(&self) -> &[ErrorEntry] {
        match self {
            Self::Single(entry) => std::slice::from_ref(entry),
            Self::Multi(entries) => entries,
        }
    }

    pub fn bad_gateway() -> Self {
        Self::of(ErrorKind::BadGateway)
    }

    pub fn bad_request() -> Self {
        Self::of(ErrorKind::BadRequest)
    }

    pub fn configuration_error() -> Self {
        Self::of(ErrorKind::ConfigurationError)
    }

    pub fn forbidden() -> Self {
        Self::of(ErrorKind::Forbidden)
    }

    pub fn gateway_timeout() -> Self {
        Self::of(ErrorKind::GatewayTimeout)
    }

    pub fn gone() -> Self {
        Self::of(ErrorKind::Gone)
    }

    pub fn internal_error() -> Self {
        Self::of(ErrorKind::InternalError)
    }

    pub fn method_not_allowed() -> Self {
        Self::of(ErrorKind::MethodNotAllowed)
    }

    pub fn not_found() -> Self {
        Self::of(ErrorKind::NotFound)
    }

    pub fn not_implemented() -> Self {
        Self::of(ErrorKind::NotImplemented)
    }

    pub fn rejected() -> Self {
        Self::of(ErrorKind::Rejected)
    }

    pub fn teapot() -> Self {
        Self::of(ErrorKind::Teapot)
    }

    pub fn unavailable() -> Self {
        Self::of(ErrorKind::Unavailable)
    }

    /// Reaching this constructor means a code path that should never
    /// execute was hit, so it logs before constructing.
    pub fn unreachable_code() -> Self {
        warn!("encountered unreachable code block");
        Self::of(ErrorKind::UnreachableCode)
    }
}

impl Default for ApiError {
    fn default() -> Self {
        Self::Single(ErrorEntry::new())
    }
}

impl From<ErrorEntry> for ApiError {
    fn from(entry: ErrorEntry) -> Self {
        Self::Single(entry)
    }
}

impl From<Vec<ErrorEntry>> for ApiError {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        Self::Multi(entries)
    }
}
