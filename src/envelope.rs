//! The `{success, error, data}` wrapper around every JSON response.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Message used when the service reports failure without saying why.
const UNSPECIFIED_ERROR: &str = "unspecified API error";

/// Generic response envelope returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// Build a failed envelope carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }

    /// Turn the envelope into its payload, or [`Error::Api`] when `success` is false.
    ///
    /// A failed envelope never yields data, even if the service sent some.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(Error::Api(
                self.error.unwrap_or_else(|| UNSPECIFIED_ERROR.to_string()),
            ))
        }
    }
}

/// Decode a response body into the envelope's typed payload.
///
/// `success` is checked before `data` is interpreted, so a failed envelope
/// is always [`Error::Api`] whatever its `data` holds. A successful envelope whose `data` is `null` or missing is decoded as if
/// the payload were JSON `null`, so `()` and `Option<_>` targets work for
/// operations that return nothing.
///
/// # Errors
/// [`Error::Decode`] for malformed JSON or a payload of the wrong shape,
/// [`Error::Api`] when the service reported failure.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<serde_json::Value> = serde_json::from_slice(body)?;
    if !envelope.success {
        tracing::debug!(error = ?envelope.error, "service reported failure");
    }
    let data = envelope.into_result()?.unwrap_or(serde_json::Value::Null);
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
        tags: Vec<String>,
    }

    #[test]
    fn successful_payload_survives_encode_and_decode() {
        let sample = Sample {
            name: "T1".to_string(),
            count: 3,
            tags: vec!["a".to_string(), "b".to_string()],
        };
        let body = serde_json::to_vec(&Envelope::ok(&sample)).unwrap();
        let decoded: Sample = decode(&body).unwrap();
        assert_eq!(decoded, sample);
    }

    #[test]
    fn failure_surfaces_server_message() {
        for message in ["X", "Incorrect apikey", "Access denied."] {
            let body = serde_json::to_vec(&json!({
                "success": false,
                "error": message,
                "data": null
            }))
            .unwrap();
            let err = decode::<Sample>(&body).unwrap_err();
            assert!(matches!(err, Error::Api(_)));
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn failure_ignores_stray_data() {
        let body = br#"{"success":false,"error":"nope","data":{"name":"x","count":1,"tags":[]}}"#;
        let err = decode::<Sample>(body).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn failure_with_mismatched_data_is_still_an_api_error() {
        let err = decode::<Sample>(br#"{"success":false,"error":"Access denied","data":""}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(err.to_string(), "Access denied");

        let err = decode::<Vec<Sample>>(
            br#"{"success":false,"error":"Access denied","data":{"code":403}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
        assert_eq!(err.to_string(), "Access denied");
    }

    /// Payload type with no `Default` impl.
    #[derive(Debug, PartialEq, Deserialize)]
    enum Plan {
        Free,
        Pro,
    }

    #[test]
    fn decodes_payload_without_default() {
        let plan: Plan = decode(br#"{"success":true,"error":null,"data":"Pro"}"#).unwrap();
        assert_eq!(plan, Plan::Pro);
        let plans: Vec<Plan> = decode(br#"{"success":true,"data":["Free","Pro"]}"#).unwrap();
        assert_eq!(plans, vec![Plan::Free, Plan::Pro]);
    }

    #[test]
    fn failure_without_message() {
        let err = decode::<()>(br#"{"success":false}"#).unwrap_err();
        assert_eq!(err.to_string(), UNSPECIFIED_ERROR);
    }

    #[test]
    fn void_operations_accept_null_or_missing_data() {
        decode::<()>(br#"{"success":true,"error":null,"data":null}"#).unwrap();
        decode::<()>(br#"{"success":true}"#).unwrap();
        let none: Option<Sample> = decode(br#"{"success":true,"data":null}"#).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn missing_payload_for_typed_operation_is_a_decode_error() {
        let err = decode::<Sample>(br#"{"success":true,"data":null}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode::<Sample>(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode::<Sample>(br#"{"success":true,"data":{"name":1}}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
