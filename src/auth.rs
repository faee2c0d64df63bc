use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::BarError;

type HmacSha256 = Hmac<Sha256>;

/// Current time in milliseconds, used as the `timestamp` request parameter.
pub fn timestamp_ms() -> Result<u64, BarError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| BarError::Auth(e.to_string()))?;
    Ok(now.as_millis() as u64)
}

/// Signs a query string for Binance's authenticated REST endpoints.
///
/// Binance expects the signature as lowercase hex of
/// HMAC-SHA256(secret, query string), appended as the `signature` parameter.
/// The API key itself travels in the `X-MBX-APIKEY` header.
pub fn sign_query(api_secret: &str, query: &str) -> Result<String, BarError> {
    let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .map_err(|e| BarError::Auth(e.to_string()))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
