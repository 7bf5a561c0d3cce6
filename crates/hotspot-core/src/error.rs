//! Shared error type across hotspot crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed query parameter.
    BadRequest,
    /// Time or memory reading around a traced call failed.
    MeasurementFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MeasurementFailed => "MEASUREMENT_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HotspotError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HotspotError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("measurement failed: {0}")]
    Measurement(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl HotspotError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HotspotError::BadRequest(_) => ClientCode::BadRequest,
            HotspotError::Measurement(_) => ClientCode::MeasurementFailed,
            HotspotError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HotspotError::Internal(_) => ClientCode::Internal,
        }
    }
}
