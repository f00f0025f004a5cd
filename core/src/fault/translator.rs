//! # FAULT TRANSLATOR
//!
//! **CRITICAL**: Every fault becomes an envelope. Nothing escapes to the host framework.
//!
//! Code selection is table driven (`FAULT_RULES`). Message and detail
//! composition is one `match` over the fault.

use crate::config::ResponseConfig;
use crate::errors::EnvelopeError;
use crate::fault::{Fault, FaultKind};
use crate::registry::ServiceCode;
use crate::request::RequestContext;
use crate::response::{
    build, create_response, BuildOptions, Envelope, EnvelopeResponse, HttpResponse, SubError,
    UNEXPECTED_ERROR_MESSAGE, VALIDATION_ERROR_MESSAGE,
};
use crate::types::HttpInfo;
use crate::validation::ViolationKind;
use log::{debug, error, info};
use serde_json::json;

pub const PARAMETER_ENTITY: &str = "PARAMETER";
pub const ACCESS_DENIED_MESSAGE: &str = "Not authorized to access this call";
pub const UPLOAD_SIZE_EXCEEDED_MESSAGE: &str = "Multipart file size exceeded the length";
pub const NOT_WRITABLE_MESSAGE: &str = "Error writing JSON output";

/// **FAULT RULE** - Service code a fault kind is answered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultRule {
    pub kind: FaultKind,
    pub code: ServiceCode,
}

/// Ordered like `FaultKind`, so a kind's discriminant is its index.
pub static FAULT_RULES: [FaultRule; 11] = [
    FaultRule { kind: FaultKind::MissingParameter, code: ServiceCode::RequiredRequestUriParameterMissing },
    FaultRule { kind: FaultKind::MalformedBody, code: ServiceCode::MalformedJsonPayload },
    FaultRule { kind: FaultKind::UnsupportedMediaType, code: ServiceCode::MalformedHeader },
    FaultRule { kind: FaultKind::Validation, code: ServiceCode::ValidationException },
    FaultRule { kind: FaultKind::EntityNotFound, code: ServiceCode::EntityNotFound },
    FaultRule { kind: FaultKind::AccessDenied, code: ServiceCode::NoValidAuthorization },
    FaultRule { kind: FaultKind::NoHandlerFound, code: ServiceCode::NotFound },
    FaultRule { kind: FaultKind::TypeMismatch, code: ServiceCode::MalformedRequest },
    FaultRule { kind: FaultKind::Multipart, code: ServiceCode::MalformedRequest },
    FaultRule { kind: FaultKind::UploadSizeExceeded, code: ServiceCode::FileSizeExceeded },
    FaultRule { kind: FaultKind::NotWritable, code: ServiceCode::ServerError },
];

/// **RULE LOOKUP** - Constant time, indexed by discriminant
pub fn rule_for(kind: FaultKind) -> &'static FaultRule {
    &FAULT_RULES[kind as usize]
}

/// **FAULT TRANSLATOR**
///
/// **PURPOSE**: Boundary handler rendering framework faults as envelopes
/// **THREAD SAFETY**: Immutable after construction, shareable across requests
#[derive(Debug, Clone, Default)]
pub struct FaultTranslator {
    config: ResponseConfig,
}

impl FaultTranslator {
    /// **CONSTRUCTOR**
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// **TRANSLATE FAULT**
    ///
    /// **RETURNS**: Envelope with the rule's service code and its mapped status
    pub fn translate(&self, fault: &Fault, request: &RequestContext) -> EnvelopeResponse {
        let code = rule_for(fault.kind()).code;
        debug!("Translating {:?} fault as {}", fault.kind(), code);

        if let Fault::MalformedBody { .. } = fault {
            info!(
                "{} to {}",
                request.method,
                request.uri_path().unwrap_or_default()
            );
        }

        let mut options = compose(fault);
        if let Some(path) = request.uri_path() {
            options = options.path(path);
        }
        if self.config.include_http_info {
            options = options.with_http_info();
        }

        let mut envelope = match build(code, options) {
            Ok(envelope) => envelope,
            Err(err) => {
                error!("Failed to translate {:?} fault: {}", fault.kind(), err);
                self.configuration_failure(&err, request)
            }
        };

        if !self.config.expose_debug_messages {
            envelope.debug_message = None;
        }

        EnvelopeResponse::new(envelope)
    }

    /// **TRANSLATE TO TRANSPORT RESPONSE**
    ///
    /// Falls back to a bare JSON 500 when the envelope cannot be rendered.
    pub fn translate_to_http(&self, fault: &Fault, request: &RequestContext) -> HttpResponse {
        match self.translate(fault, request).into_http_response() {
            Ok(response) => response,
            Err(err) => {
                error!("Failed to render translated envelope: {}", err);
                let status = ServiceCode::ServerError.http_status();
                create_response(status.as_u16(), json!({ "message": NOT_WRITABLE_MESSAGE }))
            }
        }
    }

    fn configuration_failure(&self, err: &EnvelopeError, request: &RequestContext) -> Envelope {
        let code = ServiceCode::ServerError;
        let mut envelope = Envelope::new(code);
        envelope.message = Some(UNEXPECTED_ERROR_MESSAGE.to_string());
        envelope.debug_message = Some(err.to_string());
        envelope.path = request.uri_path();
        if self.config.include_http_info {
            envelope.http = Some(HttpInfo::new(code.http_status()));
        }
        envelope
    }
}

fn compose(fault: &Fault) -> BuildOptions {
    let options = BuildOptions::new();

    match fault {
        Fault::MissingParameter { name, expected_type } => options
            .message(format!("{name} parameter is missing"))
            .exception_detail(SubError {
                key: Some(name.clone()),
                violation: Some(ViolationKind::MissingKey),
                data_type: Some(expected_type.clone()),
                entity_type: Some(PARAMETER_ENTITY.to_string()),
                message: Some(fault.to_string()),
                ..SubError::default()
            }),
        Fault::MalformedBody { most_specific_cause } => options.message(most_specific_cause.clone()),
        Fault::UnsupportedMediaType { content_type, supported } => options
            .message(format!(
                "{content_type} media type is not supported. Supported media types are {}",
                supported.join(", ")
            ))
            .cause(fault),
        Fault::Validation { field_errors } => options
            .message(VALIDATION_ERROR_MESSAGE)
            .field_errors(field_errors.clone()),
        Fault::EntityNotFound { message } => options.message(message.clone()),
        Fault::AccessDenied { .. } => options.message(ACCESS_DENIED_MESSAGE),
        Fault::NoHandlerFound { method, url } => options
            .message(format!("Could not find the {method} method for URL {url}"))
            .cause(fault),
        Fault::TypeMismatch { name, value, required_type } => options
            .message(format!(
                "The parameter '{name}' of value '{value}' could not be converted to type '{required_type}'"
            ))
            .cause(fault),
        Fault::Multipart { most_specific_cause } => options.cause_message(most_specific_cause.clone()),
        Fault::UploadSizeExceeded { most_specific_cause } => options
            .message(UPLOAD_SIZE_EXCEEDED_MESSAGE)
            .cause_message(most_specific_cause.clone()),
        Fault::NotWritable { .. } => options.message(NOT_WRITABLE_MESSAGE).cause(fault),
    }
}
