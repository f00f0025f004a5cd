//! # VALIDATION AGGREGATOR
//!
//! **CRITICAL**: Turns per-field validation failures into envelope sub-errors.
//! **GUARANTEE**: Output length == input length, input order preserved, no dedup.

use super::{FieldError, ViolationKind};
use crate::errors::EnvelopeError;
use crate::response::envelope::SubError;

/// Entity type stamped on every sub-error produced from a field failure.
pub const FIELD_ENTITY: &str = "FIELD";

/// **AGGREGATE FIELD FAILURES**
///
/// **RETURNS**: One `SubError` per failure, in input order
///
/// **ERRORS**: `EnvelopeError::UnknownViolationKind` on the first unresolvable rule id
pub fn aggregate(field_errors: &[FieldError]) -> Result<Vec<SubError>, EnvelopeError> {
    field_errors.iter().map(to_sub_error).collect()
}

fn to_sub_error(field_error: &FieldError) -> Result<SubError, EnvelopeError> {
    let violation = ViolationKind::from_rule_id(&field_error.rule_id)?;

    Ok(SubError {
        location: Some(field_error.location()),
        key: Some(field_error.field_name.clone()),
        rejected_value: field_error
            .rejected_value
            .clone()
            .filter(|value| !value.is_null()),
        violation: Some(violation),
        data_type: None,
        entity_type: Some(FIELD_ENTITY.to_string()),
        message: field_error.default_message.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_email_failure() {
        let errors = vec![FieldError::new("user", "email", "Email")
            .rejected(json!("bad"))
            .message("must be a well-formed email")];

        let sub_errors = aggregate(&errors).unwrap();
        assert_eq!(sub_errors.len(), 1);

        let sub = &sub_errors[0];
        assert_eq!(sub.location.as_deref(), Some("user.email"));
        assert_eq!(sub.key.as_deref(), Some("email"));
        assert_eq!(sub.rejected_value, Some(json!("bad")));
        assert_eq!(sub.violation, Some(ViolationKind::EmailFormatInvalid));
        assert_eq!(sub.data_type, None);
        assert_eq!(sub.entity_type.as_deref(), Some("FIELD"));
        assert_eq!(sub.message.as_deref(), Some("must be a well-formed email"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let errors = vec![
            FieldError::new("order", "sku", "Pattern"),
            FieldError::new("order", "note", "Size"),
            FieldError::new("order", "sku", "Pattern"),
        ];

        let sub_errors = aggregate(&errors).unwrap();
        let keys: Vec<_> = sub_errors.iter().map(|s| s.key.clone().unwrap()).collect();
        assert_eq!(keys, vec!["sku", "note", "sku"]);
    }

    #[test]
    fn test_null_rejected_value_is_absent() {
        let errors = vec![FieldError::new("user", "name", "NotNull").rejected(json!(null))];
        let sub_errors = aggregate(&errors).unwrap();
        assert_eq!(sub_errors[0].rejected_value, None);
        assert_eq!(sub_errors[0].violation, Some(ViolationKind::NullValue));
    }

    #[test]
    fn test_unknown_rule_fails_whole_aggregation() {
        let errors = vec![
            FieldError::new("user", "email", "Email"),
            FieldError::new("user", "age", "Min"),
        ];

        match aggregate(&errors) {
            Err(EnvelopeError::UnknownViolationKind { rule_id }) => assert_eq!(rule_id, "Min"),
            other => panic!("Expected UnknownViolationKind, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).unwrap().is_empty());
    }
}
