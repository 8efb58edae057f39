//! Identity resolution from auth-provider-issued bearer tokens.
//!
//! Sign-up, passwords and token issuance belong to the auth provider;
//! this service only verifies HS256 access tokens it signed.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload issued by the auth provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Auth provider user id
    pub sub: Uuid,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Token verification trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenVerifier: Send + Sync {
    /// Verify signature and expiry, returning the claims
    fn verify(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 verifier keyed with the provider's JWT secret.
pub struct SupabaseJwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SupabaseJwtVerifier {
    pub fn new(secret: &[u8], audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.jwt_audience.as_deref())
    }
}

impl TokenVerifier for SupabaseJwtVerifier {
    fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(token_data.claims)
    }
}
