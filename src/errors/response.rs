use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::http::code;
use crate::jsonapi::{self, ErrorObject};

use super::value::ApiError;

/// Formatted error payload: one reconciled status plus the serialized
/// entries in input order. The HTTP layer writes `status` and `data`
/// onto its own response type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Reconciled HTTP status code
    pub status: u16,
    /// Response body payload
    pub data: ErrorData,
}

/// Body payload carrying the JSON:API error list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorData {
    pub errors: Vec<ErrorObject>,
}

/// Whether a boundary failure is a recognized application error
pub fn is_api_error(error: &anyhow::Error) -> bool {
    error.is::<ApiError>()
}

/// Format a boundary failure as a JSON:API error response.
///
/// Anything that is not an [`ApiError`] is re-signaled unchanged so an
/// outer catch-all can handle it; `anyhow::Error::downcast` hands back
/// the exact original value on a miss.
pub fn format_error(error: anyhow::Error) -> Result<ErrorResponse, anyhow::Error> {
    let error = error.downcast::<ApiError>()?;
    Ok(format_api_error(&error))
}

/// Format a recognized application error.
///
/// Status reconciliation is a left-to-right fold: the accumulator starts
/// at the first entry's status; each entry with a different status
/// collapses it to 400 when both sides are 4XX, otherwise to 500. Later
/// entries compare against the current accumulator, not the first entry.
/// An empty bundle reconciles to 500 with no entries.
pub fn format_api_error(error: &ApiError) -> ErrorResponse {
    let entries = error.entries();

    let mut status = entries
        .first()
        .map(|entry| entry.status())
        .unwrap_or(code::INTERNAL_ERROR);

    let mut errors = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.status() != status {
            // Heterogeneous client errors collapse to Bad Request;
            // anything else mixed is an internal error
            status = if status / 100 == 4 && entry.status() / 100 == 4 {
                code::BAD_REQUEST
            } else {
                code::INTERNAL_ERROR
            };
        }

        let mut document = jsonapi::serialize_entry(entry);
        errors.push(document.errors.remove(0));
    }

    ErrorResponse {
        status,
        data: ErrorData { errors },
    }
}
