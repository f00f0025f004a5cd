//! # SERVICE RESPONSE LIBRARY
//!
//! **UNIFORM RESPONSE ENVELOPES FOR HTTP SERVICES**
//!
//! **ARCHITECTURE**: Code registry, envelope builder, validation aggregation, fault translation
//! **GUARANTEE**: Every outcome, success or failure, leaves as one envelope shape
//! **COMPATIBILITY**: Framework agnostic; optional `hyper` conversion behind the `hyper` feature

pub mod api;
pub mod config;
pub mod errors;
pub mod fault;
pub mod registry;
pub mod request;
pub mod response;
pub mod routing;
pub mod types;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;

#[cfg(test)]
mod tests {
    use crate::api::*;
    use serde_json::json;

    // **SUCCESS PATH TESTS**
    #[test]
    fn test_success_envelope_carries_payload() {
        let envelope = ServiceCode::Fetched
            .build(BuildOptions::new().payload(json!({"id": 1})))
            .unwrap();

        assert_eq!(envelope.http_status(), HttpStatus::Ok);
        assert_eq!(envelope.payload, Some(json!({"id": 1})));
        assert!(envelope.debug_message.is_none());
    }

    #[test]
    fn test_code_lookup_by_number_and_name() {
        let by_number = ServiceCode::from_code(3430).unwrap();
        let by_name = ServiceCode::from_name("ENTITY_NOT_FOUND").unwrap();
        assert_eq!(by_number, by_name);
        assert_eq!(by_number.http_status(), HttpStatus::NotFound);
    }

    // **INTEGRATION TESTS**
    #[test]
    fn test_request_to_envelope_pipeline() {
        // **STEP 1**: Parse query string
        let params = parse_query_string("page=abc");

        // **STEP 2**: Coerce required parameter
        let fault = required_param::<u32>(&params, "page", "int").unwrap_err();

        // **STEP 3**: Translate fault
        let request = RequestContext::new(HttpMethod::GET, "/orders");
        let response = FaultTranslator::default().translate(&fault, &request);

        assert_eq!(response.status, HttpStatus::BadRequest);
        assert_eq!(response.envelope.code(), ServiceCode::MalformedRequest);
        assert_eq!(response.envelope.path.as_deref(), Some("/orders"));
    }

    #[test]
    fn test_body_parse_error_propagation() {
        // **TEST**: Unreadable body surfaces as a malformed payload envelope
        let fault = parse_json_body(b"{not json").unwrap_err();
        let request = RequestContext::new(HttpMethod::POST, "/orders");
        let response = FaultTranslator::default().translate(&fault, &request);

        assert_eq!(response.envelope.code(), ServiceCode::MalformedJsonPayload);
        assert!(response.envelope.message.is_some());
    }

    #[test]
    fn test_configuration_error_surfaces_from_build() {
        let options = BuildOptions::new().field_errors(vec![FieldError::new("user", "age", "Min")]);
        let err = build(ServiceCode::ValidationException, options).unwrap_err();
        assert!(err.is_configuration());
    }
}
