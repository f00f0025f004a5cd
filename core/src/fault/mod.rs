//! # BOUNDARY FAULTS
//!
//! **FRAMEWORK-DETECTED FAILURES AND THEIR TRANSLATION INTO ENVELOPES**
//!
//! The host framework reports request-level failures (missing parameters,
//! unreadable bodies, routing misses, ...) as a `Fault`. The `FaultTranslator`
//! turns every fault into a well-formed envelope; nothing is rethrown.
//!
//! `Display` on a fault renders the framework's own diagnostic text. That text
//! only ever reaches the `debug_message` section.

use crate::routing::HttpMethod;
use crate::validation::FieldError;
use thiserror::Error;

pub mod translator;

pub use translator::{rule_for, FaultRule, FaultTranslator, FAULT_RULES};

/// **FAULT**
///
/// **PURPOSE**: Closed set of failures the framework hands to the translator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    #[error("Required request parameter '{name}' for method parameter type {expected_type} is not present")]
    MissingParameter { name: String, expected_type: String },

    #[error("JSON parse error: {most_specific_cause}")]
    MalformedBody { most_specific_cause: String },

    #[error("Content type '{content_type}' not supported")]
    UnsupportedMediaType {
        content_type: String,
        supported: Vec<String>,
    },

    #[error("Validation failed with {} error(s)", .field_errors.len())]
    Validation { field_errors: Vec<FieldError> },

    #[error("{message}")]
    EntityNotFound { message: String },

    #[error("{message}")]
    AccessDenied { message: String },

    #[error("No handler found for {method} {url}")]
    NoHandlerFound { method: HttpMethod, url: String },

    #[error("Failed to convert value '{value}' to required type '{required_type}'")]
    TypeMismatch {
        name: String,
        value: String,
        required_type: String,
    },

    #[error("Failed to parse multipart request: {most_specific_cause}")]
    Multipart { most_specific_cause: String },

    #[error("Maximum upload size exceeded: {most_specific_cause}")]
    UploadSizeExceeded { most_specific_cause: String },

    #[error("Could not write JSON: {message}")]
    NotWritable { message: String },
}

/// **FAULT KIND** - Discriminant of `Fault`, indexes `FAULT_RULES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    MissingParameter,
    MalformedBody,
    UnsupportedMediaType,
    Validation,
    EntityNotFound,
    AccessDenied,
    NoHandlerFound,
    TypeMismatch,
    Multipart,
    UploadSizeExceeded,
    NotWritable,
}

impl FaultKind {
    /// Every kind, in `FAULT_RULES` order.
    pub const ALL: [FaultKind; 11] = [
        FaultKind::MissingParameter,
        FaultKind::MalformedBody,
        FaultKind::UnsupportedMediaType,
        FaultKind::Validation,
        FaultKind::EntityNotFound,
        FaultKind::AccessDenied,
        FaultKind::NoHandlerFound,
        FaultKind::TypeMismatch,
        FaultKind::Multipart,
        FaultKind::UploadSizeExceeded,
        FaultKind::NotWritable,
    ];
}

impl Fault {
    /// **DISCRIMINANT**
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::MissingParameter { .. } => FaultKind::MissingParameter,
            Fault::MalformedBody { .. } => FaultKind::MalformedBody,
            Fault::UnsupportedMediaType { .. } => FaultKind::UnsupportedMediaType,
            Fault::Validation { .. } => FaultKind::Validation,
            Fault::EntityNotFound { .. } => FaultKind::EntityNotFound,
            Fault::AccessDenied { .. } => FaultKind::AccessDenied,
            Fault::NoHandlerFound { .. } => FaultKind::NoHandlerFound,
            Fault::TypeMismatch { .. } => FaultKind::TypeMismatch,
            Fault::Multipart { .. } => FaultKind::Multipart,
            Fault::UploadSizeExceeded { .. } => FaultKind::UploadSizeExceeded,
            Fault::NotWritable { .. } => FaultKind::NotWritable,
        }
    }

    /// Required request parameter `name` of type `expected_type` was absent.
    pub fn missing_parameter(name: impl Into<String>, expected_type: impl Into<String>) -> Self {
        Fault::MissingParameter {
            name: name.into(),
            expected_type: expected_type.into(),
        }
    }

    /// Body could not be read; `most_specific_cause` is the parser's text.
    pub fn malformed_body(most_specific_cause: impl Into<String>) -> Self {
        Fault::MalformedBody {
            most_specific_cause: most_specific_cause.into(),
        }
    }

    /// Request content type is outside `supported`.
    pub fn unsupported_media_type<S: Into<String>>(
        content_type: impl Into<String>,
        supported: impl IntoIterator<Item = S>,
    ) -> Self {
        Fault::UnsupportedMediaType {
            content_type: content_type.into(),
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }

    /// Bound payload failed field constraints.
    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        Fault::Validation { field_errors }
    }

    /// Lookup miss; `message` reaches the client as is.
    pub fn entity_not_found(message: impl Into<String>) -> Self {
        Fault::EntityNotFound {
            message: message.into(),
        }
    }

    /// Lookup miss on a named resource, e.g. `User not found with id : '7'`.
    pub fn resource_not_found(
        resource: &str,
        field: &str,
        value: impl std::fmt::Display,
    ) -> Self {
        Fault::entity_not_found(format!("{resource} not found with {field} : '{value}'"))
    }

    /// Caller lacks authorization. `message` only reaches the logs.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Fault::AccessDenied {
            message: message.into(),
        }
    }

    /// No route matched `method` and `url`.
    pub fn no_handler_found(method: HttpMethod, url: impl Into<String>) -> Self {
        Fault::NoHandlerFound {
            method,
            url: url.into(),
        }
    }

    /// Parameter `name` with `value` does not convert to `required_type`.
    pub fn type_mismatch(
        name: impl Into<String>,
        value: impl Into<String>,
        required_type: impl Into<String>,
    ) -> Self {
        Fault::TypeMismatch {
            name: name.into(),
            value: value.into(),
            required_type: required_type.into(),
        }
    }

    /// Multipart body could not be parsed.
    pub fn multipart(most_specific_cause: impl Into<String>) -> Self {
        Fault::Multipart {
            most_specific_cause: most_specific_cause.into(),
        }
    }

    /// Multipart upload over the configured limit.
    pub fn upload_size_exceeded(most_specific_cause: impl Into<String>) -> Self {
        Fault::UploadSizeExceeded {
            most_specific_cause: most_specific_cause.into(),
        }
    }

    /// Response body could not be written.
    pub fn not_writable(message: impl Into<String>) -> Self {
        Fault::NotWritable {
            message: message.into(),
        }
    }
}
