// This project was developed with assistance from GitHub Copilot
// JWK Set publication

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use rsa::traits::PublicKeyParts;

use crate::key_management::{KeyMaterial, KeyStore};
use crate::types::{ALGORITHM, JsonWebKey, JwkSet, KEY_TYPE, KEY_USE};

/// Public JWK for a key: n and e as big-endian, minimal-length, base64url.
pub fn to_jwk(key: &KeyMaterial) -> JsonWebKey {
    let public_key = key.public_key();
    JsonWebKey {
        kty: KEY_TYPE.to_string(),
        key_use: KEY_USE.to_string(),
        alg: ALGORITHM.to_string(),
        kid: key.kid().to_string(),
        n: URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be()),
        e: URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be()),
    }
}

/// Build the JWK Set as seen at `now`: keys whose expiry is strictly after
/// `now`, active first. Recomputed on every call.
pub fn publish(store: &KeyStore, now: DateTime<Utc>) -> JwkSet {
    let keys: Vec<JsonWebKey> = store
        .keys()
        .into_iter()
        .filter(|key| key.is_published_at(now))
        .map(to_jwk)
        .collect();

    tracing::debug!(published = keys.len(), %now, "built JWK set");
    JwkSet { keys }
}
