// File: core/json.rs
// Content-type aware response body decoding.

use super::error::CoreError;
use serde_json::Value;

/// A decoded response body: parsed JSON, or the raw text as a JSON string.
pub type ResponseBody = Value;

/// True for `application/json` and any `+json` structured suffix.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}

/// Decodes a raw body according to its content type.
///
/// JSON bodies are parsed (an empty JSON body becomes `null`), anything
/// else is kept verbatim as a JSON string.
pub fn decode_body(content_type: Option<&str>, text: String) -> Result<ResponseBody, CoreError> {
    if !is_json_content_type(content_type) {
        return Ok(Value::String(text));
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    parse_json_from_text(&text, "response body")
}

/// Shared JSON parsing helper.
/// `context` only feeds the log line.
pub fn parse_json_from_text<T: for<'de> serde::Deserialize<'de>>(
    response_text: &str,
    context: &str,
) -> Result<T, CoreError> {
    serde_json::from_str(response_text).map_err(|e| {
        log::warn!("Failed to parse JSON for {}: {}", context, e);
        CoreError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct TestStruct {
        id: i32,
        name: String,
    }

    #[test]
    fn test_parse_json_success() {
        let json = r#"{"id": 1, "name": "Test"}"#;
        let result = parse_json_from_text::<TestStruct>(json, "test_success").unwrap();
        assert_eq!(result, TestStruct { id: 1, name: "Test".into() });
    }

    #[test]
    fn test_parse_json_error() {
        let json = r#"{id: 1, name: "Test"}"#;
        let result = parse_json_from_text::<TestStruct>(json, "test_error");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("Application/JSON")));
        assert!(is_json_content_type(Some("application/problem+json")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_response_body_feeds_api_error() {
        let body: ResponseBody =
            decode_body(Some("application/problem+json"), r#"{"message": "Course is full"}"#.into())
                .unwrap();
        let err = crate::core::error::ApiError::from_response(409, body.clone());
        assert_eq!(err.message, "Course is full");
        assert_eq!(err.details, Some(body));
    }

    #[test]
    fn test_decode_body() {
        let body = decode_body(Some("application/json"), r#"{"id": 42}"#.into()).unwrap();
        assert_eq!(body, json!({ "id": 42 }));

        let body = decode_body(Some("text/plain"), "Server Error".into()).unwrap();
        assert_eq!(body, Value::String("Server Error".into()));

        let body = decode_body(None, r#"{"id": 42}"#.into()).unwrap();
        assert_eq!(body, Value::String(r#"{"id": 42}"#.into()));

        let body = decode_body(Some("application/json"), String::new()).unwrap();
        assert_eq!(body, Value::Null);
    }
}
