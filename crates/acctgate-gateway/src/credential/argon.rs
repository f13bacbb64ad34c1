//! Argon2id password hashing (PHC strings with per-hash random salt).

use argon2::password_hash::{
    rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher as _,
    PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use acctgate_core::error::{AcctError, Result};
use acctgate_core::PasswordHasher;

use crate::config::PasswordSection;

pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new(cfg: &PasswordSection) -> Result<Self> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| AcctError::Internal(format!("argon2 params rejected: {e}")))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AcctError::Internal(format!("password hash failed: {e}")))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
        // Cost parameters come from the PHC string, not from `self`.
        let parsed = PasswordHash::new(password_hash)
            .map_err(|e| AcctError::Internal(format!("stored hash unreadable: {e}")))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AcctError::Internal(format!("password verify failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap() -> Argon2Hasher {
        Argon2Hasher::new(&PasswordSection {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        })
        .expect("params")
    }

    #[test]
    fn hash_verifies_and_salts() {
        let h = cheap();
        let a = h.hash("12345678").expect("hash");
        let b = h.hash("12345678").expect("hash");
        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(h.verify("12345678", &a).expect("verify"));
        assert!(!h.verify("12345679", &a).expect("verify"));
    }

    #[test]
    fn hash_from_other_params_still_verifies() {
        let stored = cheap().hash("abcdefgh").expect("hash");
        let other = Argon2Hasher::new(&PasswordSection {
            memory_kib: 128,
            iterations: 2,
            parallelism: 1,
        })
        .expect("params");
        assert!(other.verify("abcdefgh", &stored).expect("verify"));
    }

    #[test]
    fn garbage_hash_is_internal() {
        let err = cheap().verify("x", "not-a-phc-string").expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }
}
