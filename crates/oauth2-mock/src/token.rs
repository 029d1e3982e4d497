//! HS512 JWT issuance.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RequestError;

/// Body of a successful `/token` response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub expires_in: u64,
    pub access_token: String,
}

/// Sign the given claim pairs as an HS512 JWT.
///
/// An `exp` claim of now + `ttl_secs` (Unix seconds, UTC) is always set,
/// overwriting any `exp` supplied in the input.
pub fn issue_token(
    claims: impl IntoIterator<Item = (String, String)>,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, RequestError> {
    let mut payload = Map::new();
    for (key, value) in claims {
        payload.insert(key, Value::String(value));
    }
    let exp = Utc::now().timestamp() + ttl_secs as i64;
    payload.insert("exp".to_string(), Value::from(exp));

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS512),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}
