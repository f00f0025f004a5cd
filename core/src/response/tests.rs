use crate::registry::ServiceCode;
use crate::response::{
    build, respond, serialize_response_body, BuildOptions, Envelope, EnvelopeResponse,
    FileUploadResult, HttpResponse, MessageStatusResult, SubError, CONTENT_TYPE,
};
use crate::validation::{FieldError, ViolationKind};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(response: &HttpResponse) -> serde_json::Value {
        response.body.clone()
    }

    fn key_positions(rendered: &str, keys: &[&str]) -> Vec<usize> {
        keys.iter()
            .map(|key| rendered.find(&format!("\"{key}\":")).unwrap())
            .collect()
    }

    // **TRANSPORT TESTS**
    #[test]
    fn test_transport_body_keeps_wire_order() {
        let options = BuildOptions::new()
            .message("m")
            .path("/p")
            .cause_message("x")
            .field_errors(vec![FieldError::new("user", "email", "Email")])
            .payload(json!({"id": 1}))
            .with_http_info();
        let response = respond(ServiceCode::ServerError, options).unwrap();
        let bytes = serialize_response_body(&response.body).unwrap();
        let rendered = String::from_utf8(bytes).unwrap();

        let positions = key_positions(
            &rendered,
            &["http", "timestamp", "message", "error_count", "path", "api", "debug_message", "exceptions", "object"],
        );
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "wire order broken: {rendered}");
        assert!(rendered.starts_with("{\"http\":"));
    }

    #[test]
    fn test_envelope_response_carries_json_body() {
        let envelope = build(ServiceCode::EntityNotFound, BuildOptions::new().message("Order not found")).unwrap();
        let response = EnvelopeResponse::new(envelope).into_http_response().unwrap();

        assert_eq!(response.status_code, 404);
        assert_eq!(
            response.headers.get(CONTENT_TYPE),
            Some(&"application/json".to_string())
        );

        let body = body_of(&response);
        assert_eq!(body["api"]["response_code"], 3430);
        assert_eq!(body["api"]["response"], "ENTITY_NOT_FOUND");
        assert_eq!(body["message"], "Order not found");
        assert!(body.get("exceptions").is_none());
    }

    // **FIELD PRESENCE TESTS**
    #[test]
    fn test_no_field_errors_means_no_validation_sections() {
        let response = ServiceCode::Fetched
            .respond(BuildOptions::new().payload(json!([1, 2, 3])))
            .unwrap();
        let body = body_of(&response);
        let object = body.as_object().unwrap();

        assert!(!object.contains_key("error_count"));
        assert!(!object.contains_key("exceptions"));
        assert!(!object.contains_key("debug_message"));
        assert!(!object.contains_key("message"));
        assert!(!object.contains_key("http"));
        assert_eq!(body["object"], json!([1, 2, 3]));
    }

    #[test]
    fn test_absent_sections_are_not_null() {
        let envelope = build(ServiceCode::Updated, BuildOptions::new()).unwrap();
        let rendered = serde_json::to_string(&envelope).unwrap();
        assert!(!rendered.contains("null"));
    }

    #[test]
    fn test_validation_sections_present_together() {
        let options = BuildOptions::new().field_errors(vec![
            FieldError::new("user", "email", "Email")
                .rejected(json!("bad"))
                .message("must be a well-formed email"),
        ]);
        let response = ServiceCode::ValidationException.respond(options).unwrap();
        let body = body_of(&response);

        assert_eq!(response.status_code, 400);
        assert_eq!(body["error_count"], 1);
        assert_eq!(body["message"], "Validation error");
        assert_eq!(
            body["exceptions"],
            json!([{
                "location": "user.email",
                "key": "email",
                "rejected_value": "bad",
                "violation": "Email_Not_Formatted",
                "type": "FIELD",
                "message": "must be a well-formed email"
            }])
        );
    }

    // **ROUND-TRIP TESTS**
    #[test]
    fn test_full_envelope_round_trip() {
        let detail = SubError {
            key: Some("page".to_string()),
            violation: Some(ViolationKind::MissingKey),
            data_type: Some("int".to_string()),
            entity_type: Some("PARAMETER".to_string()),
            ..SubError::default()
        };

        let options = BuildOptions::new()
            .message("Everything at once")
            .path("/api/orders")
            .payload(json!({"id": 1, "tags": ["a", "b"]}))
            .file_results(vec![FileUploadResult::new("r.pdf", "https://cdn/r.pdf", "application/pdf", 2048)])
            .message_result(MessageStatusResult::new("SMS", vec!["+15550100".to_string()]).delivered(3))
            .cause_message("socket closed")
            .field_errors(vec![FieldError::new("order", "sku", "Pattern").rejected(json!("??"))])
            .exception_detail(detail)
            .with_http_info();

        let envelope = build(ServiceCode::MalformedRequest, options).unwrap();
        let rendered = serde_json::to_string(&envelope).unwrap();
        let parsed: Envelope = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, envelope);
    }

    #[test]
    fn test_minimal_envelope_round_trip_keeps_absent_fields_absent() {
        let envelope = build(ServiceCode::Deleted, BuildOptions::new()).unwrap();
        let parsed: Envelope = serde_json::from_value(serde_json::to_value(&envelope).unwrap()).unwrap();

        assert_eq!(parsed, envelope);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            serde_json::to_value(&envelope).unwrap()
        );
    }
}
