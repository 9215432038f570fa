use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::http::code;

/// Catalog of named error kinds
///
/// Each kind carries a fixed status/title pair and a default detail
/// message. Constructors on [`crate::errors::ApiError`] and
/// [`crate::errors::ErrorEntry`] pull their defaults from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Upstream resource returned an unexpected failure
    BadGateway,

    /// Request was malformed
    BadRequest,

    /// Application-side configuration problem
    ConfigurationError,

    /// Access not authorized
    Forbidden,

    /// Upstream resource timed out
    GatewayTimeout,

    /// Resource is no longer available
    Gone,

    /// Generic unexpected failure
    InternalError,

    /// HTTP method not allowed for this resource
    MethodNotAllowed,

    /// Resource not found
    NotFound,

    /// Understood but not implemented
    NotImplemented,

    /// Rejected before processing began
    Rejected,

    /// The resource is a teapot
    Teapot,

    /// Resource temporarily unavailable
    Unavailable,

    /// Code path that should never execute was reached
    UnreachableCode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status(&self) -> u16 {
        match self {
            Self::BadGateway => code::BAD_GATEWAY,
            Self::BadRequest => code::BAD_REQUEST,
            Self::ConfigurationError => code::INTERNAL_ERROR,
            Self::Forbidden => code::FORBIDDEN,
            Self::GatewayTimeout => code::GATEWAY_TIMEOUT,
            Self::Gone => code::GONE,
            Self::InternalError => code::INTERNAL_ERROR,
            Self::MethodNotAllowed => code::METHOD_NOT_ALLOWED,
            Self::NotFound => code::NOT_FOUND,
            // Not-implemented resources are reported as a client problem
            Self::NotImplemented => code::BAD_REQUEST,
            Self::Rejected => code::FORBIDDEN,
            Self::Teapot => code::TEAPOT,
            Self::Unavailable => code::UNAVAILABLE,
            Self::UnreachableCode => code::INTERNAL_ERROR,
        }
    }

    /// Short human-readable label
    pub fn title(&self) -> &'static str {
        match self {
            Self::BadGateway => "Bad Gateway",
            Self::BadRequest => "Bad Request",
            Self::ConfigurationError => "Internal Configuration Error",
            Self::Forbidden => "Forbidden",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::Gone => "Gone",
            Self::InternalError => "Internal Application Error",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotFound => "Not Found",
            Self::NotImplemented => "Not Implemented",
            Self::Rejected => "Request Rejected",
            Self::Teapot => "Teapot",
            Self::Unavailable => "Service Unavailable",
            Self::UnreachableCode => "Internal Application Error",
        }
    }

    /// Default detail message, used when the caller does not supply one
    pub fn default_detail(&self) -> &'static str {
        match self {
            Self::BadGateway => "An unexpected error occurred on an upstream resource",
            Self::BadRequest => "The request was not properly formatted",
            Self::ConfigurationError => {
                "The application responding to the request encountered a configuration error"
            }
            Self::Forbidden => "Access to this resource is not authorized",
            Self::GatewayTimeout => "The connection timed out waiting for an upstream resource",
            Self::Gone => "The requested resource is no longer available",
            Self::InternalError => {
                "An unexpected error occurred and the request was unable to complete"
            }
            Self::MethodNotAllowed => "The requested method is not allowed",
            Self::NotFound => "The requested resource was not found",
            Self::NotImplemented => {
                "The request was understood but the resource is not implemented"
            }
            Self::Rejected => "The request was rejected prior to processing",
            Self::Teapot => "This resource is a teapot incapable of processing the request",
            Self::Unavailable => "The requested resource is temporarily unavailable",
            Self::UnreachableCode => {
                "The application encountered an unreachable condition while processing the request"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ErrorKind::BadGateway.status(), 502);
        assert_eq!(ErrorKind::BadRequest.status(), 400);
        assert_eq!(ErrorKind::ConfigurationError.status(), 500);
        assert_eq!(ErrorKind::Forbidden.status(), 403);
        assert_eq!(ErrorKind::GatewayTimeout.status(), 504);
        assert_eq!(ErrorKind::Gone.status(), 410);
        assert_eq!(ErrorKind::InternalError.status(), 500);
        assert_eq!(ErrorKind::MethodNotAllowed.status(), 405);
        assert_eq!(ErrorKind::NotFound.status(), 404);
        assert_eq!(ErrorKind::NotImplemented.status(), 400);
        assert_eq!(ErrorKind::Rejected.status(), 403);
        assert_eq!(ErrorKind::Teapot.status(), 600);
        assert_eq!(ErrorKind::Unavailable.status(), 503);
        assert_eq!(ErrorKind::UnreachableCode.status(), 500);
    }

    #[test]
    fn test_titles_and_details_nonempty() {
        let kinds = [
            ErrorKind::BadGateway,
            ErrorKind::BadRequest,
            ErrorKind::ConfigurationError,
            ErrorKind::Forbidden,
            ErrorKind::GatewayTimeout,
            ErrorKind::Gone,
            ErrorKind::InternalError,
            ErrorKind::MethodNotAllowed,
            ErrorKind::NotFound,
            ErrorKind::NotImplemented,
            ErrorKind::Rejected,
            ErrorKind::Teapot,
            ErrorKind::Unavailable,
            ErrorKind::UnreachableCode,
        ];
        for kind in kinds {
            assert!(!kind.title().is_empty());
            assert!(!kind.default_detail().is_empty());
        }
    }

    #[test]
    fn test_unreachable_code_masquerades_as_internal() {
        assert_eq!(
            ErrorKind::UnreachableCode.title(),
            ErrorKind::InternalError.title()
        );
        assert_eq!(
            ErrorKind::UnreachableCode.status(),
            ErrorKind::InternalError.status()
        );
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&ErrorKind::MethodNotAllowed).unwrap();
        assert_eq!(json, "\"METHOD_NOT_ALLOWED\"");
    }
}
