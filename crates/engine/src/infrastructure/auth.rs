//! Session auth: legacy password verification and cookie-carried JWTs.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "sarp_session";

const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 1 week

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: i64,
    pub name: String,
    pub admin_level: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct AuthService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed session token (HS256, 1 week expiry).
    pub fn issue(
        &self,
        id: i64,
        name: &str,
        admin_level: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = SessionClaims {
            id,
            name: name.to_string(),
            admin_level,
            exp: Utc::now().timestamp() + SESSION_TTL_SECS,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a session token; any failure (bad signature, expired,
    /// malformed) yields None.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .ok()
            .map(|data| data.claims)
    }
}

/// Check a password against a legacy gamemode hash.
///
/// The stored `BetterPassword` column holds uppercase hex SHA-512. Salt
/// order varies between gamemode revisions, so both password+salt and
/// salt+password are tried.
pub fn verify_legacy_password(password: &str, salt: &str, hash: &str) -> bool {
    if password.is_empty() || hash.is_empty() {
        return false;
    }
    let expected = hash.to_uppercase();
    sha512_hex_upper(&format!("{password}{salt}")) == expected
        || sha512_hex_upper(&format!("{salt}{password}")) == expected
}

fn sha512_hex_upper(input: &str) -> String {
    hex::encode_upper(Sha512::digest(input.as_bytes()))
}
