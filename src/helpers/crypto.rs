//! Field masking cryptography.
//!
//! Sensitive card fields arrive from the backend as AES-256-GCM ciphertext
//! with a detached authentication tag, each part Base64-encoded alongside a
//! Base64 key. Unmasking parses the plaintext as a JSON object; on any
//! failure the console shows blank fields rather than crashing, so the
//! public entry point degrades to an empty object.

use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// GCM nonce length in bytes
const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes
const TAG_LEN: usize = 16;

/// A masked field as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskedField {
    /// Base64 ciphertext (without the tag)
    pub ciphertext: String,
    /// Base64 12-byte nonce
    pub iv: String,
    /// Base64 16-byte authentication tag
    pub tag: String,
}

/// Unmask a protected field, degrading to an empty object on any failure
pub fn unmask(ciphertext_b64: &str, iv_b64: &str, tag_b64: &str, key_b64: &str) -> Map<String, Value> {
    match try_unmask(ciphertext_b64, iv_b64, tag_b64, key_b64) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::warn!(error = %e, "unmask failed, returning empty object");
            Map::new()
        }
    }
}

/// Unmask a protected field, reporting the precise failure
pub fn try_unmask(
    ciphertext_b64: &str,
    iv_b64: &str,
    tag_b64: &str,
    key_b64: &str,
) -> Result<Map<String, Value>> {
    let ciphertext = decode_b64(ciphertext_b64, "ciphertext")?;
    let iv = decode_b64(iv_b64, "iv")?;
    let tag = decode_b64(tag_b64, "tag")?;
    let key = decode_b64(key_b64, "key")?;

    if iv.len() != NONCE_LEN {
        return Err(Error::Crypto {
            message: format!("IV must be {NONCE_LEN} bytes, got {}", iv.len()),
        });
    }

    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| Error::Crypto {
        message: format!("key must be 32 bytes, got {}", key.len()),
    })?;
    let nonce = Nonce::<Aes256Gcm>::from_slice(&iv);

    // aes-gcm expects ciphertext || tag
    let mut combined = ciphertext;
    combined.extend_from_slice(&tag);

    let plaintext = cipher.decrypt(nonce, combined.as_ref()).map_err(|_| Error::Crypto {
        message: "decryption failed (authentication error)".to_string(),
    })?;

    let text = String::from_utf8(plaintext).map_err(|e| Error::Crypto {
        message: format!("plaintext is not UTF-8: {e}"),
    })?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(Error::Crypto {
            message: "plaintext is not a JSON object".to_string(),
        }),
    }
}

/// Mask a plaintext payload with a fresh random nonce
///
/// The counterpart of [`try_unmask`]; the backend normally does this, but
/// having it here keeps the format in one place.
pub fn mask(plaintext: &str, key_b64: &str) -> Result<MaskedField> {
    let key = decode_b64(key_b64, "key")?;
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| Error::Crypto {
        message: format!("key must be 32 bytes, got {}", key.len()),
    })?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let combined = cipher.encrypt(&nonce, plaintext.as_bytes()).map_err(|e| Error::Crypto {
        message: format!("encryption failed: {e}"),
    })?;

    // Split the trailing tag back out so the wire format matches the backend.
    let split = combined.len() - TAG_LEN;
    Ok(MaskedField {
        ciphertext: BASE64.encode(&combined[..split]),
        iv: BASE64.encode(nonce.as_slice()),
        tag: BASE64.encode(&combined[split..]),
    })
}

fn decode_b64(input: &str, what: &str) -> Result<Vec<u8>> {
    BASE64.decode(input).map_err(|e| Error::Crypto {
        message: format!("{what} is not valid Base64: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_key() -> String {
        BASE64.encode([7u8; 32])
    }

    fn masked_object() -> (MaskedField, String) {
        let key = test_key();
        let payload = json!({"pan": "4111111111111111", "cvv": "123"}).to_string();
        let field = mask(&payload, &key).expect("mask failed");
        (field, key)
    }

    #[test]
    fn test_round_trip() {
        let (field, key) = masked_object();
        let fields = try_unmask(&field.ciphertext, &field.iv, &field.tag, &key).expect("unmask failed");
        assert_eq!(fields.get("pan"), Some(&json!("4111111111111111")));
        assert_eq!(fields.get("cvv"), Some(&json!("123")));
    }

    #[test]
    fn test_invalid_base64_fails() {
        let (field, key) = masked_object();
        assert!(try_unmask("not base64!!!", &field.iv, &field.tag, &key).is_err());
        assert!(try_unmask(&field.ciphertext, "%%%", &field.tag, &key).is_err());
    }

    #[test]
    fn test_short_iv_fails() {
        let (field, key) = masked_object();
        let short_iv = BASE64.encode([0u8; 4]);
        assert!(try_unmask(&field.ciphertext, &short_iv, &field.tag, &key).is_err());
    }

    #[test]
    fn test_wrong_key_size_fails() {
        let (field, _) = masked_object();
        let short_key = BASE64.encode([0u8; 16]);
        assert!(try_unmask(&field.ciphertext, &field.iv, &field.tag, &short_key).is_err());
    }

    #[test]
    fn test_tampered_tag_fails() {
        let (field, key) = masked_object();
        let mut tag = BASE64.decode(&field.tag).expect("tag decode");
        tag[0] ^= 0xff;
        let tampered = BASE64.encode(tag);
        assert!(try_unmask(&field.ciphertext, &field.iv, &tampered, &key).is_err());
    }

    #[test]
    fn test_non_json_plaintext_fails() {
        let key = test_key();
        let field = mask("not json at all", &key).expect("mask failed");
        assert!(try_unmask(&field.ciphertext, &field.iv, &field.tag, &key).is_err());
    }

    #[test]
    fn test_json_scalar_plaintext_fails() {
        let key = test_key();
        let field = mask("42", &key).expect("mask failed");
        assert!(try_unmask(&field.ciphertext, &field.iv, &field.tag, &key).is_err());
    }

    #[test]
    fn test_unmask_degrades_to_empty_object() {
        let (field, key) = masked_object();
        assert!(unmask("@@@", &field.iv, &field.tag, &key).is_empty());
        assert!(!unmask(&field.ciphertext, &field.iv, &field.tag, &key).is_empty());
    }
}
