// This project was developed with assistance from GitHub Copilot
// JWKS and auth endpoint handlers

use axum::{
    extract::{Query, State},
    response::Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::error::Result;
use crate::key_management::KeyStore;
use crate::types::{AuthQuery, AuthResponse, JwkSet};
use crate::{jwks, token};

/// Application state: the key store, generated once at startup
pub type AppState = Arc<KeyStore>;

/// JWKS endpoint handler - serves public keys in JWKS format
/// Only returns keys that have not expired
pub async fn jwks_handler(State(store): State<AppState>) -> Json<JwkSet> {
    Json(jwks::publish(&store, Utc::now()))
}

/// Auth endpoint handler - issues JWTs for authentication
/// Any `expired` query parameter (even empty) signs with the expired key
pub async fn auth_handler(
    State(store): State<AppState>,
    Query(params): Query<AuthQuery>,
) -> Result<Json<AuthResponse>> {
    let token = token::issue(&store, params.expired.is_some(), Utc::now())?;
    Ok(Json(AuthResponse { token }))
}
