//! HTTP status-code table shared by the error catalog and the formatter.

/// Named HTTP status codes.
///
/// Read-only table; every status used by the error catalog resolves
/// through these names rather than bare integers.
pub mod code {
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const CONFLICT: u16 = 409;
    pub const GONE: u16 = 410;
    pub const INTERNAL_ERROR: u16 = 500;
    pub const NOT_IMPLEMENTED: u16 = 501;
    pub const BAD_GATEWAY: u16 = 502;
    pub const UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;

    /// Teapot is 600 in this system's convention, not RFC 2324's 418.
    pub const TEAPOT: u16 = 600;
}
