use crate::errors::EnvelopeError;
use crate::response::types::{EnvelopeResponse, HttpResponse};
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

pub fn create_response(status: u16, body: serde_json::Value) -> HttpResponse {
    let mut headers = HashMap::new();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

    HttpResponse {
        status_code: status,
        headers,
        body,
    }
}

/// **ERRORS**: `EnvelopeError::Serialization` when the body cannot be written
pub fn serialize_response_body(body: &serde_json::Value) -> Result<Vec<u8>, EnvelopeError> {
    Ok(serde_json::to_vec(body)?)
}

impl EnvelopeResponse {
    /// Render the envelope as a JSON transport response.
    pub fn into_http_response(self) -> Result<HttpResponse, EnvelopeError> {
        let body = serde_json::to_value(&self.envelope)?;
        Ok(create_response(self.status.as_u16(), body))
    }
}

#[cfg(feature = "hyper")]
impl HttpResponse {
    /// Convert into a hyper response carrying the serialized body.
    pub fn into_hyper(
        self,
    ) -> Result<hyper::Response<http_body_util::Full<hyper::body::Bytes>>, EnvelopeError> {
        let mut builder = hyper::Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let bytes = hyper::body::Bytes::from(serialize_response_body(&self.body)?);
        builder
            .body(http_body_util::Full::new(bytes))
            .map_err(|e| EnvelopeError::Transport {
                message: e.to_string(),
            })
    }
}
