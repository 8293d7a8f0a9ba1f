//! Shared handler helpers for the FriendGraph REST API.
//!
//! Bodies are decoded from raw bytes rather than through axum's `Json`
//! extractor so that every decode failure, including a missing
//! `Content-Type`, is answered with 400. Only the first JSON value of a body
//! is read; anything after it is ignored.

use friendgraph_core::UserId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode the first JSON value of a request body into `T` or return HTTP 400.
///
/// # Errors
///
/// Returns `ApiError::InvalidBody` carrying the decoder message, or `EOF`
/// for a body with no JSON value at all.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
    {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(ApiError::InvalidBody(e.to_string())),
        None => Err(ApiError::InvalidBody("EOF".to_string())),
    }
}

/// Parse a `{id}` path segment as a signed base-10 64-bit user ID or return
/// HTTP 400.
///
/// # Errors
///
/// Returns `ApiError::InvalidId` naming the rejected segment.
pub fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>()
        .map_err(|e| ApiError::InvalidId(format!("invalid user id '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MakeFriendsRequest, UpdateAgeRequest};

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").ok(), Some(42));
        assert_eq!(parse_user_id("-1").ok(), Some(-1));
        assert!(matches!(parse_user_id("abc"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_user_id(""), Err(ApiError::InvalidId(_))));
        assert!(matches!(
            parse_user_id("9223372036854775808"),
            Err(ApiError::InvalidId(_))
        ));
    }

    #[test]
    fn test_parse_user_id_message_names_segment() {
        let err = parse_user_id("x1").unwrap_err();
        assert!(err.to_string().contains("'x1'"));
    }

    #[test]
    fn test_decode_json() {
        let request: MakeFriendsRequest =
            decode_json(br#"{"source_id": 1, "target_id": 2}"#).expect("should decode");
        assert_eq!((request.source_id, request.target_id), (1, 2));

        assert!(matches!(
            decode_json::<MakeFriendsRequest>(b""),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            decode_json::<MakeFriendsRequest>(b"  \n"),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            decode_json::<MakeFriendsRequest>(br#"{"source_id": "one", "target_id": 2}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_decode_json_missing_fields_are_zero() {
        let request: MakeFriendsRequest = decode_json(br#"{"source_id": 1}"#).expect("should decode");
        assert_eq!((request.source_id, request.target_id), (1, 0));

        let request: UpdateAgeRequest = decode_json(b"{}").expect("should decode");
        assert_eq!(request.new_age, 0);
    }

    #[test]
    fn test_decode_json_reads_first_value_only() {
        let request: UpdateAgeRequest =
            decode_json(br#"{"new_age": 7} {"new_age": 8}"#).expect("should decode");
        assert_eq!(request.new_age, 7);

        let request: UpdateAgeRequest =
            decode_json(b"{\"new_age\": 9}\ntrailing").expect("should decode");
        assert_eq!(request.new_age, 9);
    }

    #[test]
    fn test_decode_json_rejects_id_above_i64_max() {
        assert!(matches!(
            decode_json::<MakeFriendsRequest>(br#"{"source_id": 9223372036854775808}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
