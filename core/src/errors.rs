use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("REGISTRY ERROR: no matching service code for [{code}]")]
    UnknownServiceCode { code: u32 },

    #[error("REGISTRY ERROR: no service code named '{name}'")]
    UnknownServiceName { name: String },

    #[error("VALIDATION ERROR: no violation kind matches rule id '{rule_id}'")]
    UnknownViolationKind { rule_id: String },

    #[error("ROUTING ERROR: unknown HTTP method '{method}'")]
    UnknownHttpMethod { method: String },

    #[error("SERIALIZATION ERROR: {message}")]
    Serialization { message: String },

    #[error("TRANSPORT ERROR: {message}")]
    Transport { message: String },
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(err: serde_json::Error) -> Self {
        EnvelopeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl EnvelopeError {
    /// Configuration errors come from a caller passing something the tables
    /// do not know about. They must never be reported as a client fault.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EnvelopeError::UnknownServiceCode { .. }
                | EnvelopeError::UnknownServiceName { .. }
                | EnvelopeError::UnknownViolationKind { .. }
        )
    }
}
