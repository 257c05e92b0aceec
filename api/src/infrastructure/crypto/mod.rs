use base64::Engine as _;
use hmac::{Hmac, Mac};
use password_hash::rand_core::{OsRng, RngCore};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const CSRF_PURPOSE: &[u8] = b"warbler-csrf\0";

fn csrf_mac(secret: &str, binding: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(CSRF_PURPOSE);
    mac.update(binding.as_bytes());
    mac
}

/// Form token bound to the secret and to whatever identifies the visitor
/// (the session cookie value, or the random anonymous id).
pub fn csrf_token(secret: &str, binding: &str) -> String {
    encode_cookie_value(&csrf_mac(secret, binding).finalize().into_bytes())
}

pub fn verify_csrf_token(secret: &str, binding: &str, presented: &str) -> bool {
    let Ok(tag) = decode_cookie_value(presented) else {
        return false;
    };
    csrf_mac(secret, binding).verify_slice(&tag).is_ok()
}

/// 32 random bytes, base64url encoded; identifies an anonymous visitor.
pub fn random_id() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    encode_cookie_value(&raw)
}

pub fn encode_cookie_value(raw: &[u8]) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

pub fn decode_cookie_value(value: &str) -> anyhow::Result<Vec<u8>> {
    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| anyhow::anyhow!("b64 decode cookie: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csrf_token_is_bound_to_secret_and_session() {
        let t = csrf_token("secret", "session-a");
        assert!(verify_csrf_token("secret", "session-a", &t));
        assert!(!verify_csrf_token("secret", "session-b", &t));
        assert!(!verify_csrf_token("other", "session-a", &t));
        assert!(!verify_csrf_token("secret", "session-a", ""));
        assert!(!verify_csrf_token("secret", "session-a", "%%%"));
    }

    #[test]
    fn random_ids_differ() {
        let a = random_id();
        let b = random_id();
        assert_ne!(a, b);
        assert_eq!(decode_cookie_value(&a).unwrap().len(), 32);
    }

    #[test]
    fn cookie_values_survive_encoding() {
        let raw = br#"[["danger","Access unauthorized."]]"#;
        let enc = encode_cookie_value(raw);
        assert!(!enc.contains(';') && !enc.contains('"'));
        assert_eq!(decode_cookie_value(&enc).unwrap(), raw.to_vec());
    }
}
