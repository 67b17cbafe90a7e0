use anyhow::{anyhow, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

use crate::domain::model::params::{query_value, Params};

type HmacSha256 = Hmac<Sha256>;

/// Hex encoded HMAC-SHA256 of `payload`.
pub fn sign(secret: &str, payload: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| anyhow!("Invalid HMAC key: {}", e))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Url-encoded query string of a parameter set.
pub fn encode_query(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, &query_value(value));
    }
    serializer.finish()
}

/// Query string with `timestamp` and the trailing `signature` appended.
pub fn signed_query(params: &Params, secret: &str, timestamp_ms: i64) -> Result<String> {
    let mut query = encode_query(params);
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&format!("timestamp={}", timestamp_ms));

    let signature = sign(secret, &query)?;
    query.push_str(&format!("&signature={}", signature));
    Ok(query)
}
