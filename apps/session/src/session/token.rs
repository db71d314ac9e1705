//! Placeholder bearer token.
//!
//! The token is base64url JSON with no signature. It identifies a session to
//! the UI and nothing more: anyone can mint one, and `exp` is informational.
//! A real deployment needs a server-issued, signed, expiring credential.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SessionError};
use crate::models::Role;

pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(sub: &str, email: &str, role: Role, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: sub.to_string(),
            email: email.to_string(),
            role,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        }
    }

    /// Reports whether the claimed expiry has passed. Nothing in the session enforces it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

pub fn encode(claims: &TokenClaims) -> Result<String> {
    let json = serde_json::to_vec(claims)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode(token: &str) -> Result<TokenClaims> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token.trim())
        .map_err(|e| SessionError::Token(format!("not base64url: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::Token(format!("bad claims: {e}")))
}
