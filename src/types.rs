// This project was developed with assistance from GitHub Copilot
// Data structures for the JWKS server

use serde::{Deserialize, Serialize};

pub const KEY_TYPE: &str = "RSA";
pub const KEY_USE: &str = "sig";
pub const ALGORITHM: &str = "RS256";

pub const SUBJECT: &str = "fake-user-id";
pub const ISSUER: &str = "jwks-demo";
pub const AUDIENCE: &str = "jwks-demo-client";

/// JSON Web Key structure for JWKS response (RFC 7517)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String, // Key type (RSA)
    #[serde(rename = "use")]
    pub key_use: String, // Key usage (sig for signature)
    pub alg: String, // Algorithm (RS256)
    pub kid: String, // Key ID
    pub n: String,   // Modulus (base64url)
    pub e: String,   // Exponent (base64url)
}

/// JWKS response format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<JsonWebKey>,
}

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject
    pub iat: i64,    // Issued at
    pub exp: i64,    // Expires at
    pub iss: String, // Issuer
    pub aud: String, // Audience
}

/// Auth endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Query parameters for auth endpoint
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    pub expired: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwk_serializes_use_field() {
        let jwk = JsonWebKey {
            kty: KEY_TYPE.to_string(),
            key_use: KEY_USE.to_string(),
            alg: ALGORITHM.to_string(),
            kid: "abc".to_string(),
            n: "nnn".to_string(),
            e: "AQAB".to_string(),
        };
        let json = serde_json::to_value(&jwk).unwrap();
        assert_eq!(json["use"], "sig");
        assert!(json.get("key_use").is_none());
    }

    #[test]
    fn test_empty_jwk_set_serializes_to_empty_array() {
        let set = JwkSet { keys: vec![] };
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"keys":[]}"#);
    }
}
