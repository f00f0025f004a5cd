//! # RESPONSE ENVELOPE MODEL
//!
//! **CRITICAL**: The one outward-facing body shape shared by every endpoint.
//! **MANDATE**: Absent sections are OMITTED from the wire, never rendered as `null`.
//!
//! Wire field order: `http, timestamp, message, error_count, path, api,
//! debug_message, exceptions, object, file_response, message_response, exception`.

use crate::registry::ServiceCode;
use crate::types::{HttpInfo, HttpStatus};
use crate::validation::ViolationKind;
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Display format of `timestamp`: `dd-MM-yyyy HH:mm:ss`.
///
/// 24-hour clock on purpose: a 12-hour rendering without an AM/PM marker
/// cannot be parsed back to the same instant.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        timestamp: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// **API SECTION**
///
/// **PURPOSE**: Application code of the response, distinct from the transport status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// **NUMERIC APPLICATION CODE**
    pub response_code: u32,

    /// **SYMBOLIC APPLICATION CODE**
    pub response: ServiceCode,
}

impl ApiInfo {
    /// **CONSTRUCTOR**
    pub const fn new(code: ServiceCode) -> Self {
        Self {
            response_code: code.code(),
            response: code,
        }
    }
}

/// **SUB-ERROR**
///
/// **PURPOSE**: One structured failure record. Used for each entry of
/// `exceptions` and for the single-cause `exception` detail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubError {
    /// **LOCATION** - `object.field` path of the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// **KEY** - Field or parameter name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// **REJECTED VALUE** - Input the constraint refused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<JsonValue>,

    /// **VIOLATION KIND**
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationKind>,

    /// **EXPECTED DATA TYPE** - e.g. `int` for a missing parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,

    /// Entity the failure is attached to, e.g. `FIELD` or `PARAMETER`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// **MESSAGE** - Validator or framework text for this failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// **FILE UPLOAD RESULT**
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadResult {
    pub file_name: String,
    pub url: String,
    pub file_type: String,
    /// Size in bytes.
    pub file_size: u64,
    pub is_public_access_allowed: bool,
}

impl FileUploadResult {
    /// **CONSTRUCTOR** - Private object unless `public` is called
    pub fn new(
        file_name: impl Into<String>,
        url: impl Into<String>,
        file_type: impl Into<String>,
        file_size: u64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
            file_type: file_type.into(),
            file_size,
            is_public_access_allowed: false,
        }
    }

    /// **ALLOW PUBLIC ACCESS**
    pub fn public(mut self) -> Self {
        self.is_public_access_allowed = true;
        self
    }
}

/// **MESSAGE STATUS RESULT**
///
/// **PURPOSE**: Outcome of one notification dispatch (SMS, email, push)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatusResult {
    pub channel_type: String,
    pub is_sent: bool,
    pub is_delivered: bool,
    pub recipients: Vec<String>,
    pub time_to_delivery_seconds: u32,
}

impl MessageStatusResult {
    /// **CONSTRUCTOR** - Neither sent nor delivered yet
    pub fn new(channel_type: impl Into<String>, recipients: Vec<String>) -> Self {
        Self {
            channel_type: channel_type.into(),
            is_sent: false,
            is_delivered: false,
            recipients,
            time_to_delivery_seconds: 0,
        }
    }

    /// **MARK SENT**
    pub fn sent(mut self) -> Self {
        self.is_sent = true;
        self
    }

    /// **MARK DELIVERED** - Delivery implies the message was sent
    pub fn delivered(mut self, time_to_delivery_seconds: u32) -> Self {
        self.is_sent = true;
        self.is_delivered = true;
        self.time_to_delivery_seconds = time_to_delivery_seconds;
        self
    }
}

/// **RESPONSE ENVELOPE**
///
/// **PURPOSE**: Uniform body wrapping status, code, message and optional payload or error detail
/// **LIFECYCLE**: Built fresh per response, never mutated after handoff to the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// **TRANSPORT STATUS COPY**
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpInfo>,

    /// **CONSTRUCTION TIME** - Local clock, whole seconds
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// **VALIDATION ERROR COUNT** - Present only when aggregation ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,

    /// **REQUEST PATH**
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// **APPLICATION CODE**
    pub api: ApiInfo,

    /// **DEBUG MESSAGE** - Rendered message of a caught error, never user supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_message: Option<String>,

    /// **VALIDATION SUB-ERRORS** - Input order
    #[serde(rename = "exceptions", skip_serializing_if = "Option::is_none")]
    pub sub_errors: Option<Vec<SubError>>,

    /// **GENERIC PAYLOAD**
    #[serde(rename = "object", skip_serializing_if = "Option::is_none")]
    pub payload: Option<JsonValue>,

    #[serde(rename = "file_response", skip_serializing_if = "Option::is_none")]
    pub file_results: Option<Vec<FileUploadResult>>,

    #[serde(rename = "message_response", skip_serializing_if = "Option::is_none")]
    pub message_result: Option<MessageStatusResult>,

    /// **SINGLE-CAUSE DETAIL** - e.g. a missing required parameter
    #[serde(rename = "exception", skip_serializing_if = "Option::is_none")]
    pub exception_detail: Option<SubError>,
}

impl Envelope {
    /// **CONSTRUCTOR** - Only `api` and `timestamp` are populated
    pub fn new(code: ServiceCode) -> Self {
        Self {
            http: None,
            timestamp: Local::now().naive_local().trunc_subsecs(0),
            message: None,
            error_count: None,
            path: None,
            api: ApiInfo::new(code),
            debug_message: None,
            sub_errors: None,
            payload: None,
            file_results: None,
            message_result: None,
            exception_detail: None,
        }
    }

    /// **SERVICE CODE**
    pub fn code(&self) -> ServiceCode {
        self.api.response
    }

    /// **TRANSPORT STATUS** - Always the code's mapped status
    pub fn http_status(&self) -> HttpStatus {
        self.api.response.http_status()
    }
}
