// This project was developed with assistance from GitHub Copilot
// Key management functionality for the JWKS server

use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};

use crate::error::{Error, Result};

const KEY_BITS: usize = 2048;

/// Expiry offset of the key that stays published.
pub const ACTIVE_KEY_OFFSET_MINUTES: i64 = 30;
/// Expiry offset of the key that is already unpublished at startup.
pub const EXPIRED_KEY_OFFSET_MINUTES: i64 = -30;

/// Compute the key ID: base64url (no padding) of the SHA-1 digest of the
/// DER-encoded SubjectPublicKeyInfo.
pub fn key_id(public_key: &RsaPublicKey) -> Result<String> {
    let der = public_key.to_public_key_der()?;
    let digest = Sha1::digest(der.as_bytes());
    Ok(URL_SAFE_NO_PAD.encode(digest))
}

/// One RSA key pair plus its key ID and expiry. Immutable once generated.
pub struct KeyMaterial {
    kid: String,
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    encoding_key: EncodingKey,
    expires_at: DateTime<Utc>,
}

impl KeyMaterial {
    /// Generate a new RSA-2048 key pair expiring `offset_minutes` from now.
    pub fn generate(offset_minutes: i64) -> Result<Self> {
        Self::generate_at(offset_minutes, Utc::now())
    }

    /// Generate a new RSA-2048 key pair expiring `offset_minutes` after `now`.
    /// A negative offset yields a key that is already expired.
    pub fn generate_at(offset_minutes: i64, now: DateTime<Utc>) -> Result<Self> {
        let mut rng = OsRng;
        let private_key = RsaPrivateKey::new(&mut rng, KEY_BITS)?;
        let public_key = RsaPublicKey::from(&private_key);

        let kid = key_id(&public_key)?;

        // jsonwebtoken wants PEM; export once so signing never re-serializes.
        let pem = private_key.to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)?;
        let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| Error::KeyEncoding(e.to_string()))?;

        let expires_at = now + Duration::minutes(offset_minutes);

        Ok(KeyMaterial {
            kid,
            private_key,
            public_key,
            encoding_key,
            expires_at,
        })
    }

    pub fn kid(&self) -> &str {
        &self.kid
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// A key is published while its expiry is strictly in the future.
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Verification key for tokens signed by this key pair.
    pub fn decoding_key(&self) -> Result<DecodingKey> {
        let n = URL_SAFE_NO_PAD.encode(self.public_key.n().to_bytes_be());
        let e = URL_SAFE_NO_PAD.encode(self.public_key.e().to_bytes_be());
        DecodingKey::from_rsa_components(&n, &e).map_err(|err| Error::KeyEncoding(err.to_string()))
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("kid", &self.kid)
            .field("bits", &(self.private_key.size() * 8))
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// The two keys served for the process lifetime. Read-only after construction,
/// so it can be shared across request handlers without locking.
#[derive(Debug)]
pub struct KeyStore {
    active: KeyMaterial,
    expired: KeyMaterial,
}

impl KeyStore {
    pub fn new() -> Result<Self> {
        Self::new_at(Utc::now())
    }

    pub fn new_at(now: DateTime<Utc>) -> Result<Self> {
        let active = KeyMaterial::generate_at(ACTIVE_KEY_OFFSET_MINUTES, now)?;
        let expired = KeyMaterial::generate_at(EXPIRED_KEY_OFFSET_MINUTES, now)?;

        tracing::info!(kid = %active.kid(), expires_at = %active.expires_at(), "generated active key");
        tracing::info!(kid = %expired.kid(), expires_at = %expired.expires_at(), "generated expired key");

        Ok(KeyStore { active, expired })
    }

    pub fn active(&self) -> &KeyMaterial {
        &self.active
    }

    pub fn expired(&self) -> &KeyMaterial {
        &self.expired
    }

    pub fn select(&self, use_expired: bool) -> &KeyMaterial {
        if use_expired {
            &self.expired
        } else {
            &self.active
        }
    }

    /// Both keys, always active first.
    pub fn keys(&self) -> [&KeyMaterial; 2] {
        [&self.active, &self.expired]
    }
}
