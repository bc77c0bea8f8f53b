//! The backend's uniform response wrapper.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ApiError;

/// Envelope code that marks success.
pub const SUCCESS_CODE: i64 = 200;

/// `{ "code": 200, "message": "...", "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl Envelope<Value> {
    /// Check the code and decode `data` into the caller's type.
    ///
    /// A missing `data` decodes as JSON `null`, so `()` and `Option<_>`
    /// targets accept empty successes.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.code != SUCCESS_CODE {
            return Err(ApiError::Api {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        serde_json::from_value(self.data.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(format!("unexpected data shape: {e}")))
    }
}

/// Decode a raw response body as an envelope and unwrap its data.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<Value> = serde_json::from_str(body)
        .map_err(|e| ApiError::Decode(format!("response is not an envelope: {e}")))?;
    envelope.into_data()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_data() {
        let n: i64 = decode(r#"{"code":200,"message":"ok","data":7}"#).unwrap();
        assert_eq!(n, 7);
    }

    #[test]
    fn empty_success_decodes_as_unit() {
        let () = decode(r#"{"code":200,"message":"ok"}"#).unwrap();
        let () = decode(r#"{"code":200,"data":null}"#).unwrap();
    }

    #[test]
    fn failure_code_becomes_api_error() {
        let err = decode::<bool>(r#"{"code":403,"message":"denied"}"#).unwrap_err();
        match err {
            ApiError::Api { code, message } => {
                assert_eq!(code, 403);
                assert_eq!(message, "denied");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        assert!(matches!(decode::<bool>("[]"), Err(ApiError::Decode(_))));
        assert!(matches!(
            decode::<bool>(r#"{"code":200,"data":"yes"}"#),
            Err(ApiError::Decode(_))
        ));
    }
}
