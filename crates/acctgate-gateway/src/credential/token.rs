//! Bearer token issuance and verification (HS256 JWT).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use acctgate_core::error::{AcctError, Result};
use acctgate_core::AccountId;

use crate::config::AuthSection;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: u64,
    exp: u64,
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(cfg: &AuthSection) -> Self {
        let secret = cfg.token_secret.as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::from_secs(cfg.token_ttl_secs),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, id: AccountId) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AcctError::Internal("system clock is before UNIX_EPOCH".into()))?;
        self.issue_at(id, now.as_secs())
    }

    fn issue_at(&self, id: AccountId, iat: u64) -> Result<String> {
        let claims = Claims {
            sub: id.to_string(),
            iat,
            exp: iat + self.ttl.as_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AcctError::Internal(format!("token sign failed: {e}")))
    }

    /// Account id carried by a valid, unexpired token.
    pub fn verify(&self, token: &str) -> Result<AccountId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AcctError::AuthFailed
        })?;
        data.claims.sub.parse().map_err(|_| AcctError::AuthFailed)
    }
}
