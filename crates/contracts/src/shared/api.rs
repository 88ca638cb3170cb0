//! Response envelope of the REST backend.
//!
//! Success and failure are signalled in the body through `errFlag`
//! (`0` success, anything else failure) rather than through HTTP status.
//! List endpoints may also answer with a bare JSON array.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::common::lenient::de_i64;

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";
pub const GENERIC_SUCCESS: &str = "Saved successfully";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "errFlag", alias = "err_flag", deserialize_with = "de_i64", default)]
    pub err_flag: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            err_flag: 0,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            err_flag: 0,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            err_flag: 1,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.err_flag == 0
    }
}

/// The only failure classes the dashboard distinguishes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a usable HTTP response (offline, CORS, non-2xx).
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-zero `errFlag`.
    #[error("server error {code}: {message}")]
    Server { code: i64, message: String },
    /// Body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the toast: the server's message when it sent one, else a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

fn server_error(envelope: &ApiEnvelope<Value>) -> ApiError {
    ApiError::Server {
        code: envelope.err_flag,
        message: envelope.message.clone().unwrap_or_default(),
    }
}

fn parse_json(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decodes a list response: a bare array or `{errFlag, data}`.
pub fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ApiError> {
    let value = parse_json(text)?;
    let items = match value {
        Value::Array(_) => value,
        Value::Object(_) => {
            let envelope: ApiEnvelope<Value> =
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
            if !envelope.is_ok() {
                return Err(server_error(&envelope));
            }
            match envelope.data {
                Some(Value::Null) | None => return Ok(Vec::new()),
                Some(data) => data,
            }
        }
        other => {
            return Err(ApiError::Decode(format!(
                "expected array or object, got {}",
                other
            )))
        }
    };
    serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decodes a mutation response (add / update / change-status) into its message.
pub fn decode_ack(text: &str) -> Result<String, ApiError> {
    let envelope: ApiEnvelope<Value> = match parse_json(text)? {
        value @ Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?
        }
        other => return Err(ApiError::Decode(format!("expected object, got {}", other))),
    };
    if !envelope.is_ok() {
        return Err(server_error(&envelope));
    }
    Ok(envelope
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SUCCESS.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn bare_array_is_a_list() {
        let rows: Vec<Row> = decode_list(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn envelope_with_zero_flag_is_a_list() {
        let rows: Vec<Row> = decode_list(r#"{"errFlag":0,"data":[{"id":3}]}"#).unwrap();
        assert_eq!(rows, vec![Row { id: 3 }]);
    }

    #[test]
    fn null_data_is_empty() {
        let rows: Vec<Row> = decode_list(r#"{"errFlag":"0","data":null}"#).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn non_zero_flag_carries_server_message() {
        let err = decode_list::<Row>(r#"{"errFlag":1,"message":"Invalid token"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                code: 1,
                message: "Invalid token".into()
            }
        );
        assert_eq!(err.user_message(), "Invalid token");
    }

    #[test]
    fn server_error_without_message_falls_back() {
        let err = decode_ack(r#"{"errFlag":2}"#).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn ack_returns_message_or_default() {
        assert_eq!(
            decode_ack(r#"{"errFlag":0,"message":"Client added"}"#).unwrap(),
            "Client added"
        );
        assert_eq!(decode_ack(r#"{"errFlag":0}"#).unwrap(), GENERIC_SUCCESS);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode_list::<Row>("<html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(decode_ack("[]"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn network_errors_use_generic_text() {
        let err = ApiError::Network("HTTP 502".into());
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }
}
