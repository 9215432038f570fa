//! Normalized application errors with JSON:API formatting.
//!
//! Handlers raise an [`ApiError`] (a single entry or an ordered bundle)
//! through the usual `Result` channel; the request boundary catches it
//! once and calls [`format_error`], which reconciles the bundle to one
//! HTTP status and serializes each entry as a JSON:API error object.
//! Failures that are not an [`ApiError`] pass through unchanged.

pub mod errors;
pub mod http;
pub mod jsonapi;

pub use errors::{
    format_api_error, format_error, is_api_error, ApiError, ErrorData, ErrorEntry, ErrorKind,
    ErrorResponse,
};

/// Handler-side result alias for raising [`ApiError`]
pub type Result<T> = std::result::Result<T, ApiError>;
