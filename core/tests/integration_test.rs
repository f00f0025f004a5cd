use serde_json::json;
use service_response::api::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn json_body(response: &HttpResponse) -> serde_json::Value {
    response.body.clone()
}

#[test]
fn test_entity_not_found_envelope() {
    let response = respond(
        ServiceCode::EntityNotFound,
        BuildOptions::new().message("Order not found"),
    )
    .unwrap();
    let body = json_body(&response);

    assert_eq!(response.status_code, 404);
    assert_eq!(body["api"]["response_code"], ServiceCode::EntityNotFound.code());
    assert_eq!(body["message"], "Order not found");
    assert!(body.get("exceptions").is_none());
}

#[test]
fn test_validation_aggregation_integration() {
    let field_errors = vec![FieldError::new("user", "email", "Email")
        .rejected(json!("bad"))
        .message("must be a well-formed email")];

    let sub_errors = aggregate(&field_errors).unwrap();
    assert_eq!(sub_errors.len(), 1);
    assert_eq!(sub_errors[0].location.as_deref(), Some("user.email"));
    assert_eq!(sub_errors[0].key.as_deref(), Some("email"));
    assert_eq!(sub_errors[0].violation, Some(ViolationKind::EmailFormatInvalid));
    assert_eq!(sub_errors[0].message.as_deref(), Some("must be a well-formed email"));

    let envelope = build(
        ServiceCode::ValidationException,
        BuildOptions::new().field_errors(field_errors),
    )
    .unwrap();
    assert_eq!(envelope.error_count, Some(1));
}

#[test]
fn test_missing_parameter_translation() {
    init_logger();
    let params = parse_query_string("size=20");
    let fault = required_param::<i32>(&params, "page", "int").unwrap_err();

    let request = RequestContext::new(HttpMethod::GET, "/orders");
    let response = FaultTranslator::default().translate_to_http(&fault, &request);
    let body = json_body(&response);

    assert_eq!(response.status_code, 400);
    assert_eq!(body["exception"]["key"], "page");
    assert_eq!(body["exception"]["violation"], "Missing_Key");
    assert_eq!(body["exception"]["type"], "PARAMETER");
    assert_eq!(body["path"], "/orders");
}

#[test]
fn test_cause_without_message() {
    let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let envelope = build(ServiceCode::ServerError, BuildOptions::new().cause(&cause)).unwrap();

    assert_eq!(envelope.message.as_deref(), Some("Unexpected error"));
    assert_eq!(envelope.debug_message.as_deref(), Some("disk full"));
}

#[test]
fn test_every_code_resolves_to_itself() {
    let mut seen = std::collections::HashSet::new();
    for &code in ServiceCode::ALL {
        assert_eq!(ServiceCode::from_code(code.code()).unwrap(), code);
        assert!(seen.insert(code.code()));
    }
}

#[test]
fn test_unknown_rule_id_is_catchable() {
    let result = aggregate(&[FieldError::new("user", "age", "Positive")]);
    assert!(matches!(
        result,
        Err(EnvelopeError::UnknownViolationKind { ref rule_id }) if rule_id == "Positive"
    ));
}

#[test]
fn test_translator_never_returns_non_envelope() {
    init_logger();
    let faults = vec![
        Fault::missing_parameter("page", "int"),
        Fault::malformed_body("unexpected end of input"),
        Fault::unsupported_media_type("text/csv", ["application/json"]),
        Fault::validation(vec![FieldError::new("user", "name", "Size")]),
        Fault::validation(vec![FieldError::new("user", "name", "Unknown")]),
        Fault::entity_not_found("Nothing here"),
        Fault::access_denied("denied"),
        Fault::no_handler_found(HttpMethod::PUT, "/missing"),
        Fault::type_mismatch("id", "x", "long"),
        Fault::multipart("boundary missing"),
        Fault::upload_size_exceeded("too big"),
        Fault::not_writable("closed"),
    ];

    let translator = FaultTranslator::new(ResponseConfig::new().with_context_path("/api"));
    for fault in &faults {
        let request = RequestContext::from_config(translator.config(), HttpMethod::POST, "/things");
        let response = translator.translate_to_http(fault, &request);
        let body = json_body(&response);

        assert!(response.status_code >= 400);
        assert_eq!(body["http"]["code"], response.status_code);
        assert_eq!(body["path"], "/api/things");
        assert!(body["api"]["response_code"].is_u64());
        assert!(body["timestamp"].is_string());
    }
}

#[test]
fn test_translated_body_keeps_wire_order() {
    init_logger();
    let request = RequestContext::new(HttpMethod::GET, "/orders");
    let response = FaultTranslator::default()
        .translate_to_http(&Fault::type_mismatch("page", "abc", "int"), &request);
    let keys: Vec<&str> = response.body.as_object().unwrap().keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        ["http", "timestamp", "message", "path", "api", "debug_message"]
    );
}
