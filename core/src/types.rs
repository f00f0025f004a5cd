//! # SHARED TYPE DEFINITIONS
//!
//! **CRITICAL**: Transport status types shared by the registry, the envelope and the fault translator
//! **MANDATE**: ALL status values in an envelope MUST come from `HttpStatus`

use serde::{Deserialize, Serialize};
use std::fmt;

/// **HTTP STATUS**
///
/// **PURPOSE**: Closed set of transport statuses a service code can map to
/// **WIRE FORMAT**: Rendered by name, e.g. `"NOT_FOUND"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatus {
    Continue,
    Processing,
    Ok,
    Created,
    BadRequest,
    Unauthorized,
    NotFound,
    NotAcceptable,
    Conflict,
    UnsupportedMediaType,
    InternalServerError,
    ServiceUnavailable,
}

impl HttpStatus {
    /// **NUMERIC STATUS CODE**
    pub const fn as_u16(self) -> u16 {
        match self {
            HttpStatus::Continue => 100,
            HttpStatus::Processing => 102,
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::NotFound => 404,
            HttpStatus::NotAcceptable => 406,
            HttpStatus::Conflict => 409,
            HttpStatus::UnsupportedMediaType => 415,
            HttpStatus::InternalServerError => 500,
            HttpStatus::ServiceUnavailable => 503,
        }
    }

    /// **STANDARD REASON PHRASE**
    pub const fn reason_phrase(self) -> &'static str {
        match self {
            HttpStatus::Continue => "Continue",
            HttpStatus::Processing => "Processing",
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "Created",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::NotAcceptable => "Not Acceptable",
            HttpStatus::Conflict => "Conflict",
            HttpStatus::UnsupportedMediaType => "Unsupported Media Type",
            HttpStatus::InternalServerError => "Internal Server Error",
            HttpStatus::ServiceUnavailable => "Service Unavailable",
        }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// **TRANSPORT STATUS SECTION**
///
/// **PURPOSE**: Transport status duplicated into the envelope body under `http`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpInfo {
    /// **NUMERIC STATUS**
    pub code: u16,

    /// **SYMBOLIC STATUS**
    pub status: HttpStatus,
}

impl HttpInfo {
    /// **CONSTRUCTOR**
    pub const fn new(status: HttpStatus) -> Self {
        Self {
            code: status.as_u16(),
            status,
        }
    }
}

impl From<HttpStatus> for HttpInfo {
    fn from(status: HttpStatus) -> Self {
        Self::new(status)
    }
}
