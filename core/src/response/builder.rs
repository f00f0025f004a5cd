//! # ENVELOPE BUILDER
//!
//! **CRITICAL**: Single entry point for assembling envelopes from a service code.
//! **MANDATE**: Only sections whose producing condition held appear in the envelope.
//!
//! ## RULES (priority order)
//!
//! 1. **API** - Always set from the service code
//! 2. **TIMESTAMP** - Always set to construction time
//! 3. **CAUSE** - Sets `debug_message`; message defaults to `"Unexpected error"`
//! 4. **FIELD ERRORS** - Aggregated into `exceptions` + `error_count`; message defaults to `"Validation error"`
//! 5. **PASS-THROUGH** - Payload, file results, message result, exception detail, path
//!
//! An explicit message always wins over both defaults.

use crate::errors::EnvelopeError;
use crate::registry::ServiceCode;
use crate::response::envelope::{Envelope, FileUploadResult, MessageStatusResult, SubError};
use crate::response::types::{EnvelopeResponse, HttpResponse};
use crate::types::HttpInfo;
use crate::validation::{aggregate, FieldError};
use serde::Serialize;
use serde_json::Value as JsonValue;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";
pub const VALIDATION_ERROR_MESSAGE: &str = "Validation error";

/// **BUILD OPTIONS**
///
/// **PURPOSE**: Optional sections of an envelope, set builder style
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    message: Option<String>,
    path: Option<String>,
    payload: Option<JsonValue>,
    file_results: Option<Vec<FileUploadResult>>,
    message_result: Option<MessageStatusResult>,
    cause: Option<String>,
    field_errors: Vec<FieldError>,
    exception_detail: Option<SubError>,
    http_info: bool,
}

impl BuildOptions {
    /// **CONSTRUCTOR** - No optional sections
    pub fn new() -> Self {
        Self::default()
    }

    /// **MESSAGE** - Wins over every default
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// **REQUEST PATH**
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// A `null` payload is treated as no payload.
    pub fn payload(mut self, payload: JsonValue) -> Self {
        self.payload = Some(payload).filter(|value| !value.is_null());
        self
    }

    /// **SERIALIZABLE PAYLOAD**
    ///
    /// **ERRORS**: `EnvelopeError::Serialization` when `payload` cannot be rendered as JSON
    pub fn try_payload<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self, EnvelopeError> {
        let value = serde_json::to_value(payload)?;
        Ok(self.payload(value))
    }

    /// **FILE UPLOAD RESULTS**
    pub fn file_results(mut self, file_results: Vec<FileUploadResult>) -> Self {
        self.file_results = Some(file_results);
        self
    }

    /// **MESSAGE DISPATCH RESULT**
    pub fn message_result(mut self, message_result: MessageStatusResult) -> Self {
        self.message_result = Some(message_result);
        self
    }

    /// **ATTACH CAUSE** - Only the rendered message of `cause` is kept
    pub fn cause<E: std::error::Error + ?Sized>(self, cause: &E) -> Self {
        self.cause_message(cause.to_string())
    }

    /// **ATTACH CAUSE TEXT** - For causes already rendered by the host framework
    pub fn cause_message(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// **FIELD ERRORS** - Aggregated at build time; an empty list adds nothing
    pub fn field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.field_errors = field_errors;
        self
    }

    /// **SINGLE-CAUSE DETAIL**
    pub fn exception_detail(mut self, detail: SubError) -> Self {
        self.exception_detail = Some(detail);
        self
    }

    /// **DUPLICATE TRANSPORT STATUS** - Adds the `http` section
    pub fn with_http_info(mut self) -> Self {
        self.http_info = true;
        self
    }
}

/// **BUILD ENVELOPE**
///
/// **ERRORS**: `EnvelopeError::UnknownViolationKind` when a field error carries an unknown rule id
pub fn build(code: ServiceCode, options: BuildOptions) -> Result<Envelope, EnvelopeError> {
    let BuildOptions {
        message,
        path,
        payload,
        file_results,
        message_result,
        cause,
        field_errors,
        exception_detail,
        http_info,
    } = options;

    let mut envelope = Envelope::new(code);
    let mut default_message = None;

    if let Some(cause) = cause {
        envelope.debug_message = Some(cause);
        default_message = Some(UNEXPECTED_ERROR_MESSAGE);
    }

    if !field_errors.is_empty() {
        let sub_errors = aggregate(&field_errors)?;
        envelope.error_count = Some(sub_errors.len());
        envelope.sub_errors = Some(sub_errors);
        default_message = Some(VALIDATION_ERROR_MESSAGE);
    }

    envelope.message = message.or_else(|| default_message.map(str::to_string));
    envelope.path = path;
    envelope.payload = payload;
    envelope.file_results = file_results;
    envelope.message_result = message_result;
    envelope.exception_detail = exception_detail;

    if http_info {
        envelope.http = Some(HttpInfo::new(code.http_status()));
    }

    Ok(envelope)
}

/// **BUILD FROM NUMERIC CODE**
///
/// **ERRORS**: `EnvelopeError::UnknownServiceCode` when `code` is not registered
pub fn build_for_code(code: u32, options: BuildOptions) -> Result<Envelope, EnvelopeError> {
    build(ServiceCode::from_code(code)?, options)
}

/// **BUILD TRANSPORT RESPONSE** - Status is the code's mapped status
pub fn respond(code: ServiceCode, options: BuildOptions) -> Result<HttpResponse, EnvelopeError> {
    let envelope = build(code, options)?;
    EnvelopeResponse::new(envelope).into_http_response()
}

/// **BUILD TRANSPORT RESPONSE FROM NUMERIC CODE**
///
/// **ERRORS**: `EnvelopeError::UnknownServiceCode` when `code` is not registered
pub fn respond_for_code(code: u32, options: BuildOptions) -> Result<HttpResponse, EnvelopeError> {
    respond(ServiceCode::from_code(code)?, options)
}

impl ServiceCode {
    /// **BUILD ENVELOPE FOR THIS CODE**
    pub fn build(self, options: BuildOptions) -> Result<Envelope, EnvelopeError> {
        build(self, options)
    }

    /// **BUILD TRANSPORT RESPONSE FOR THIS CODE**
    pub fn respond(self, options: BuildOptions) -> Result<HttpResponse, EnvelopeError> {
        respond(self, options)
    }
}
