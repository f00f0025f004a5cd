//! # VALIDATION MODULE
//!
//! **FIELD FAILURE INTAKE AND AGGREGATION**
//!
//! An external validation engine reports failures as `FieldError` values. This
//! module classifies each one into a `ViolationKind` and aggregates the batch
//! into the envelope's `exceptions` list.
//!
//! ## PIPELINE
//!
//! 1. **INTAKE** - `FieldError { object_name, field_name, rejected_value, rule_id, default_message }`
//! 2. **CLASSIFICATION** - Exact rule id match to `ViolationKind`
//! 3. **AGGREGATION** - One `SubError` per failure, order preserved
//!
//! ## USAGE
//!
//! ```rust
//! use service_response::validation::{aggregate, FieldError};
//!
//! let errors = vec![FieldError::new("user", "email", "Email")];
//! let sub_errors = aggregate(&errors)?;
//! assert_eq!(sub_errors.len(), 1);
//! # Ok::<(), service_response::errors::EnvelopeError>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub mod aggregator;
pub mod violation;

pub use aggregator::{aggregate, FIELD_ENTITY};
pub use violation::ViolationKind;

/// **FIELD ERROR**
///
/// **PURPOSE**: One failed field constraint as reported by the validation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// **OBJECT NAME** - Name of the validated object, e.g. `user`
    pub object_name: String,

    /// **FIELD NAME**
    pub field_name: String,

    /// **REJECTED VALUE** - Value the constraint rejected, if the engine exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<JsonValue>,

    /// **RULE ID** - Validator rule identifier, e.g. `Email`, `NotNull`
    pub rule_id: String,

    /// **DEFAULT MESSAGE**
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
}

impl FieldError {
    /// **CONSTRUCTOR**
    pub fn new(
        object_name: impl Into<String>,
        field_name: impl Into<String>,
        rule_id: impl Into<String>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            field_name: field_name.into(),
            rejected_value: None,
            rule_id: rule_id.into(),
            default_message: None,
        }
    }

    /// **WITH REJECTED VALUE**
    pub fn rejected(mut self, value: JsonValue) -> Self {
        self.rejected_value = Some(value);
        self
    }

    /// **WITH DEFAULT MESSAGE**
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(message.into());
        self
    }

    /// **LOCATION** - `<objectName>.<fieldName>`
    pub fn location(&self) -> String {
        format!("{}.{}", self.object_name, self.field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_joins_object_and_field() {
        let error = FieldError::new("user", "email", "Email");
        assert_eq!(error.location(), "user.email");
    }

    #[test]
    fn test_field_error_deserializes_without_optionals() {
        let error: FieldError = serde_json::from_value(json!({
            "object_name": "user",
            "field_name": "name",
            "rule_id": "NotNull"
        }))
        .unwrap();

        assert_eq!(error.rejected_value, None);
        assert_eq!(error.default_message, None);
    }
}
