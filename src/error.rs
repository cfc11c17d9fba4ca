// This project was developed with assistance from GitHub Copilot
// Error type shared by key generation, token signing and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Everything that can go wrong in the key/token core.
///
/// All variants are fatal: a broken random source or RSA primitive is not
/// transient, so nothing here is ever retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("RSA key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("key encoding failed: {0}")]
    KeyEncoding(String),

    #[error("JWT signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<rsa::pkcs8::Error> for Error {
    fn from(e: rsa::pkcs8::Error) -> Self {
        Error::KeyEncoding(e.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for Error {
    fn from(e: rsa::pkcs8::spki::Error) -> Self {
        Error::KeyEncoding(e.to_string())
    }
}

/// OAuth-style error body returned on 5xx.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub error_description: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = ErrorBody {
            error: "server_error",
            error_description: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
