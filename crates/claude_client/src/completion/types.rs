//! Wire types for the `/complete` endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Request body: `{"prompt": "..."}`
#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub prompt: &'a str,
}

/// Successful response body. Keys other than `result` are ignored.
///
/// Only a JSON object is accepted; arrays and scalars fail to decode.
/// A repeated `result` key keeps the last value.
#[derive(Debug, Default)]
pub struct CompletionResponse {
    /// `None` when the key is missing or holds anything but a string
    pub result: Option<String>,
}

impl<'de> Deserialize<'de> for CompletionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut body = Map::<String, Value>::deserialize(deserializer)?;
        let result = match body.remove("result") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        Ok(Self { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_request_has_single_key() {
        let value = serde_json::to_value(PromptRequest { prompt: "Hi \"there\"" }).unwrap();
        assert_eq!(value, json!({ "prompt": "Hi \"there\"" }));
    }

    #[test]
    fn test_response_ignores_unknown_keys() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"result":"hello","model":"x","usage":{"tokens":3}}"#)
                .unwrap();
        assert_eq!(response.result.as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_mistyped_result() {
        for body in [r#"{"result":42}"#, r#"{"result":null}"#, r#"{"result":["a"]}"#] {
            let response: CompletionResponse = serde_json::from_str(body).unwrap();
            assert!(response.result.is_none(), "{body}");
        }
    }

    #[test]
    fn test_response_missing_result() {
        let response: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn test_response_rejects_non_object() {
        for body in [r#"["hello"]"#, "[]", "[42]", r#""hello""#, "42"] {
            assert!(
                serde_json::from_str::<CompletionResponse>(body).is_err(),
                "{body}"
            );
        }
    }

    #[test]
    fn test_response_null_body_has_no_result() {
        let response: CompletionResponse = serde_json::from_str("null").unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn test_response_duplicate_result_keeps_last() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"result":"a","result":"b"}"#).unwrap();
        assert_eq!(response.result.as_deref(), Some("b"));
    }

    #[test]
    fn test_response_invalid_json() {
        assert!(serde_json::from_str::<CompletionResponse>("internal error").is_err());
    }
}
