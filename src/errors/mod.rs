//! Normalized application errors and JSON:API formatting

pub mod kinds;
pub mod response;
pub mod value;

pub use kinds::ErrorKind;
pub use response::{format_api_error, format_error, is_api_error, ErrorData, ErrorResponse};
pub use value::{ApiError, ErrorEntry};
