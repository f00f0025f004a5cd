use crate::response::envelope::Envelope;
use crate::types::HttpStatus;
use std::collections::HashMap;

/// **TRANSPORT RESPONSE** - JSON body with its status and headers
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// Keys keep the envelope's field order.
    pub body: serde_json::Value,
}

/// An envelope paired with the transport status it will be written with.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeResponse {
    pub status: HttpStatus,
    pub envelope: Envelope,
}

impl EnvelopeResponse {
    /// The status is taken from the envelope's service code, never from its content.
    pub fn new(envelope: Envelope) -> Self {
        Self {
            status: envelope.http_status(),
            envelope,
        }
    }
}
