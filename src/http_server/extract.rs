//! Request extractors
//!
//! Bodies are decoded straight from bytes so a client that omits the
//! `Content-Type` header is still served. Only a JSON object is accepted;
//! any other body is a 400. Path ids that fail to decode are a 400 with
//! the usual error body.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::record::RecordId;

use super::errors::ApiError;

/// JSON object request body, rejected with [`ApiError::InvalidBody`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::InvalidBody(err.body_text()))?;

        decode_object(&bytes).map(JsonBody)
    }
}

// serde's struct derive also accepts a sequence, so objects are checked first.
fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| ApiError::InvalidBody(err.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::InvalidBody("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|err| ApiError::InvalidBody(err.to_string()))
}

/// The `:id` path segment as a [`RecordId`], rejected with [`ApiError::InvalidId`]
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub RecordId);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|err| ApiError::InvalidId(err.body_text()))?;

        Ok(IdPath(raw.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordInput;

    #[test]
    fn test_object_decodes() {
        let input: RecordInput = decode_object(br#"{"name":"a","email":"b"}"#).unwrap();
        assert_eq!(input, RecordInput::new("a", "b"));
    }

    #[test]
    fn test_arrays_are_rejected() {
        for body in [&b"[]"[..], br#"["a","b"]"#] {
            let result: Result<RecordInput, _> = decode_object(body);
            assert!(matches!(result, Err(ApiError::InvalidBody(_))));
        }
    }
}
