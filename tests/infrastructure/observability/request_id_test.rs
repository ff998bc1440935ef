use axum::http::HeaderValue;
use voxcheck::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_well_formed_header_when_extracting_then_keeps_caller_value() {
    let header = HeaderValue::from_static("client-req_42.a:b");

    let request_id = RequestId::from_header(Some(&header));

    assert_eq!(request_id.as_str(), "client-req_42.a:b");
}

#[test]
fn given_missing_header_when_extracting_then_generates_uuid() {
    let request_id = RequestId::from_header(None);

    assert_eq!(request_id.as_str().len(), 36);
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_header_with_spaces_when_extracting_then_replaces_it() {
    let header = HeaderValue::from_static("bad id");

    let request_id = RequestId::from_header(Some(&header));

    assert_ne!(request_id.as_str(), "bad id");
}

#[test]
fn given_oversized_header_when_extracting_then_replaces_it() {
    let long = "a".repeat(200);
    let header = HeaderValue::from_str(&long).unwrap();

    let request_id = RequestId::from_header(Some(&header));

    assert_ne!(request_id.as_str(), long);
}

#[test]
fn given_two_generated_ids_when_compared_then_differ() {
    assert_ne!(RequestId::generate(), RequestId::generate());
}
