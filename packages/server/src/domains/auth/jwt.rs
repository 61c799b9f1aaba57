use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::AdminUserId;

/// How long an issued admin token stays valid
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,     // Subject (admin id as string)
    pub admin_id: Uuid,  // Admin user UUID
    pub email: String,   // Login email (for logging)
    pub is_admin: bool,  // Admin flag
    pub exp: i64,        // Expiration timestamp
    pub iat: i64,        // Issued at timestamp
    pub iss: String,     // Issuer
    pub jti: String,     // JWT ID (unique token identifier)
}

/// A freshly issued token and when it stops being accepted
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// JWT Service - creates and verifies admin session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new token for an admin user
    ///
    /// Token expires after `TOKEN_TTL_HOURS`
    pub fn create_token(
        &self,
        admin_id: AdminUserId,
        email: String,
        is_admin: bool,
    ) -> Result<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: admin_id.to_string(),
            admin_id: admin_id.into_uuid(),
            email,
            is_admin,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify and decode a token
    ///
    /// Returns claims if token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let admin_id = AdminUserId::new();

        let issued = service
            .create_token(admin_id, "ops@example.com".to_string(), true)
            .unwrap();

        let claims = service.verify_token(&issued.token).unwrap();
        assert_eq!(claims.admin_id, admin_id.into_uuid());
        assert_eq!(claims.email, "ops@example.com");
        assert!(claims.is_admin);
        assert_eq!(claims.iss, "test_issuer");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        assert!(service.verify_token("invalid_token").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "test_issuer".to_string());
        let service2 = JwtService::new("secret2", "test_issuer".to_string());

        let issued = service1
            .create_token(AdminUserId::new(), "ops@example.com".to_string(), true)
            .unwrap();

        // Token created with secret1 should not verify with secret2
        assert!(service2.verify_token(&issued.token).is_err());
    }

    #[test]
    fn test_wrong_issuer() {
        let service1 = JwtService::new("secret", "issuer_a".to_string());
        let service2 = JwtService::new("secret", "issuer_b".to_string());

        let issued = service1
            .create_token(AdminUserId::new(), "ops@example.com".to_string(), true)
            .unwrap();

        assert!(service2.verify_token(&issued.token).is_err());
    }

    #[test]
    fn test_token_expiry_window() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let issued = service
            .create_token(AdminUserId::new(), "ops@example.com".to_string(), true)
            .unwrap();

        let claims = service.verify_token(&issued.token).unwrap();

        let now = Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > (TOKEN_TTL_HOURS - 1) * 3600);
        assert!(expires_in <= TOKEN_TTL_HOURS * 3600);
    }
}
