//! HMAC-SHA256 Event Signing
//!
//! Deliveries carry an `x-webhook-signature: sha256=<hex>` header computed
//! over the raw request body. Both halves live here: the platform signs,
//! the bot verifies.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Prefix carried in the signature header value.
const SIGNATURE_PREFIX: &str = "sha256=";

/// Compute the hex-encoded HMAC-SHA256 of a payload.
pub fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Compute the full header value (`sha256=<hex>`) for a payload.
pub fn signature_header(secret: &str, payload: &[u8]) -> String {
    format!("{SIGNATURE_PREFIX}{}", sign(secret, payload))
}

/// Verify a signature header value against a payload.
///
/// Accepts the prefixed header form (`sha256=<hex>`); a missing prefix or
/// mismatched digest fails verification.
pub fn verify(secret: &str, payload: &[u8], header_value: &str) -> bool {
    let Some(received) = header_value.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    constant_time_eq(sign(secret, payload).as_bytes(), received.as_bytes())
}

/// Constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Generate a random 32-byte hex signing secret.
pub fn generate_secret() -> String {
    use rand::Rng;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}
