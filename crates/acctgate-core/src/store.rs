//! Collaborator seams: the record store and the password hasher.

use async_trait::async_trait;

use crate::account::{Account, AccountId, NewAccount};
use crate::error::Result;

/// Keyed account storage.
///
/// Implementations report transient failures as `AcctError::Unavailable`.
/// A store that enforces email uniqueness itself reports a violation as
/// `AcctError::DuplicateEmail`; `update` of an unknown id is `AcctError::NotFound`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;
    /// Assigns a fresh id.
    async fn insert(&self, account: NewAccount) -> Result<Account>;
    async fn update(&self, account: Account) -> Result<Account>;
}

/// Password hashing primitives of the credential service.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;
    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}
