//! crates/ss_io/src/hasher.rs
//!
//! SHA-256 over raw bytes and over canonical JSON, plus the `RES:` id builder.
//! Hex digests are lowercase.

#![forbid(unsafe_code)]

use serde::Serialize;
use sha2::{Digest, Sha256};
use ss_core::ids::ResultId;

use crate::canonical_json::to_canonical_json_bytes;
use crate::IoError;

fn to_lower_hex(bytes: &[u8]) -> String {
    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(LUT[(b >> 4) as usize] as char);
        out.push(LUT[(b & 0x0F) as usize] as char);
    }
    out
}

/// SHA-256 over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    to_lower_hex(&hasher.finalize())
}

/// SHA-256 over the canonical JSON bytes of any serializable value.
pub fn sha256_canonical<T: Serialize>(value: &T) -> Result<String, IoError> {
    let v = serde_json::to_value(value)?;
    Ok(sha256_hex(&to_canonical_json_bytes(&v)))
}

/// `RES:` + sha256 over the canonical `{ "params": .., "results": .. }` pair.
pub fn result_id_for<P: Serialize, R: Serialize>(params: &P, results: &R) -> Result<ResultId, IoError> {
    #[derive(Serialize)]
    struct Pair<'a, P, R> {
        params: &'a P,
        results: &'a R,
    }
    let hex = sha256_canonical(&Pair { params, results })?;
    ResultId::from_digest_hex(&hex).map_err(|e| IoError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_digest() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn canonical_digest_ignores_key_order() {
        let a = json!({"x": 1, "y": [1, 2]});
        let b = json!({"y": [1, 2], "x": 1});
        assert_eq!(sha256_canonical(&a).unwrap(), sha256_canonical(&b).unwrap());
        assert_ne!(sha256_canonical(&a).unwrap(), sha256_canonical(&json!({"x": 2})).unwrap());
    }

    #[test]
    fn result_id_is_prefixed_and_stable() {
        let p = json!({"statesCount": 15});
        let r = json!({"efficiencyValue": 45});
        let id = result_id_for(&p, &r).unwrap();
        assert!(id.as_str().starts_with("RES:"));
        assert_eq!(id.as_str().len(), 4 + 64);
        assert_eq!(id, result_id_for(&p, &r).unwrap());
    }
}
