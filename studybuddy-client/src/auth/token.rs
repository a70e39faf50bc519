//! Unverified inspection of a JWT payload.
//!
//! Nothing here checks signatures. The server is the authority on whether a
//! token is genuine; the client only reads `exp` to avoid rendering a page
//! that is bound to fail.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Error, Result};

/// Accepts base64url with or without padding. Standard-alphabet input is
/// mapped onto the URL-safe alphabet before decoding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Claims the client cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    /// Expiry in seconds since the Unix epoch. `None` when the token has no `exp`.
    pub exp: Option<f64>,
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Decode the middle segment of `token`.
    ///
    /// Fails when the token has no payload segment, the segment is not base64,
    /// the JSON is not an object, or `exp` is present but not a number.
    pub fn decode(token: &str) -> Result<Self> {
        let segment = token
            .split('.')
            .nth(1)
            .ok_or_else(|| Error::MalformedToken("missing payload segment".to_string()))?;

        let normalized = segment.replace('+', "-").replace('/', "_");
        let bytes = PAYLOAD_ENGINE
            .decode(normalized.as_bytes())
            .map_err(|e| Error::MalformedToken(format!("payload is not base64: {}", e)))?;

        let payload: Value = serde_json::from_slice(&bytes)
            .map_err(|e| Error::MalformedToken(format!("payload is not JSON: {}", e)))?;

        let Value::Object(claims) = payload else {
            return Err(Error::MalformedToken("payload is not an object".to_string()));
        };

        let exp = match claims.get("exp") {
            None => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                return Err(Error::MalformedToken(format!("exp is not a number: {}", other)));
            }
        };

        let sub = claims
            .get("sub")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { exp, sub })
    }

    /// Whether the token has expired at `now`.
    ///
    /// The comparison is done in milliseconds, so a token is already expired at
    /// the exact second named by `exp`. Tokens without `exp` never expire here.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp {
            Some(exp) => now.timestamp_millis() as f64 >= exp * 1000.0,
            None => false,
        }
    }
}

/// Build an unsigned token carrying `payload`, for tests.
#[cfg(test)]
pub(crate) fn unsigned_token(payload: &Value) -> String {
    let header = PAYLOAD_ENGINE.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = PAYLOAD_ENGINE.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header.trim_end_matches('='), body.trim_end_matches('='))
}
