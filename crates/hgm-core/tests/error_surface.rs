use hgm_core::errors::{ErrorInfo, MotifError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("k", 5)
        .with_context("reason", "example")
}

#[test]
fn invalid_argument_surface() {
    let err = MotifError::InvalidArgument(sample_info("invalid-order", "bad order"));
    assert_eq!(err.info().code, "invalid-order");
    assert_eq!(err.info().context.get("k").map(String::as_str), Some("5"));
    assert!(err.is_invalid_argument());
}

#[test]
fn graph_error_surface() {
    let err = MotifError::Graph(sample_info("unknown-edge", "edge does not exist"));
    assert_eq!(err.info().code, "unknown-edge");
    assert!(!err.is_invalid_argument());
}

#[test]
fn data_error_surface() {
    let err = MotifError::Data(sample_info("parse-int", "not a number"));
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = MotifError::Serde(
        ErrorInfo::new("deserialize-json", "unexpected token")
            .with_context("line", 3)
            .with_hint("check the schema version"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("serde error: unexpected token (code: deserialize-json)"));
    assert!(rendered.contains("line=3"));
    assert!(rendered.contains("hint: check the schema version"));
}

#[test]
fn errors_roundtrip_through_json() {
    let err = MotifError::Data(sample_info("missing-file", "not found"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Data\""));
    let back: MotifError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
