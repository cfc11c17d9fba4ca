// This project was developed with assistance from GitHub Copilot
// JWT issuance

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, Header, encode};

use crate::error::Result;
use crate::key_management::KeyStore;
use crate::types::{AUDIENCE, Claims, ISSUER, SUBJECT};

/// Lifetime of a regular token.
pub const TOKEN_TTL_MINUTES: i64 = 15;
/// How far in the past an "expired" token's `exp` is placed.
pub const EXPIRED_TOKEN_AGE_MINUTES: i64 = 5;

/// Claims for a token issued at `now`. The `exp` of an expired token is
/// independent of the signing key's own expiry.
pub fn build_claims(use_expired: bool, now: DateTime<Utc>) -> Claims {
    let exp = if use_expired {
        now - Duration::minutes(EXPIRED_TOKEN_AGE_MINUTES)
    } else {
        now + Duration::minutes(TOKEN_TTL_MINUTES)
    };

    Claims {
        sub: SUBJECT.to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
        iss: ISSUER.to_string(),
        aud: AUDIENCE.to_string(),
    }
}

/// Sign a compact RS256 JWS with either the active or the expired key.
///
/// With `use_expired` the token is signed by a key that is no longer in the
/// published JWK Set; clients are expected to reject it.
pub fn issue(store: &KeyStore, use_expired: bool, now: DateTime<Utc>) -> Result<String> {
    let key = store.select(use_expired);
    let claims = build_claims(use_expired, now);

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(key.kid().to_string());

    let token = encode(&header, &claims, key.encoding_key())?;

    tracing::debug!(kid = %key.kid(), exp = claims.exp, use_expired, "issued token");
    Ok(token)
}
