//! Account policy engine.
//!
//! Decides who may create, read, or modify which account, and applies the
//! mutation through the [`AccountStore`] when allowed. Every call is evaluated
//! fresh; the requester is always passed in explicitly.
//!
//! Email uniqueness is checked here before insert/update. The check alone is
//! not atomic against concurrent writers; stores that enforce a unique email
//! index close that gap and surface the violation as `DuplicateEmail` too.

use std::sync::Arc;

use tracing::{debug, info};

use crate::account::{Account, AccountId, AccountPatch, CreateAccount, NewAccount, Requester};
use crate::error::{AcctError, Result};
use crate::invitation::InvitationCodes;
use crate::store::{AccountStore, PasswordHasher};

/// Construct once at startup, then share via Arc.
pub struct AccountPolicy {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn PasswordHasher>,
    invitations: InvitationCodes,
}

impl AccountPolicy {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn PasswordHasher>,
        invitations: InvitationCodes,
    ) -> Self {
        Self {
            store,
            hasher,
            invitations,
        }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Sign up. The invitation code decides the role.
    pub async fn create(&self, req: CreateAccount) -> Result<Account> {
        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(rejected("create", AcctError::DuplicateEmail));
        }

        let role = self
            .invitations
            .resolve(&req.invitation)
            .ok_or_else(|| rejected("create", AcctError::InvalidInvitation))?;

        let password_hash = self.hasher.hash(&req.password)?;
        let account = self
            .store
            .insert(NewAccount {
                name: req.name,
                email: req.email,
                password_hash,
                role,
            })
            .await?;

        info!(account_id = account.id, role = role.as_str(), "account created");
        Ok(account)
    }

    pub async fn read(&self, requester: &Requester, target: AccountId) -> Result<Account> {
        if !requester.may_access(target) {
            return Err(rejected("read", AcctError::Forbidden));
        }
        if requester.id() == target {
            return Ok(requester.account().clone());
        }

        self.store
            .find_by_id(target)
            .await?
            .ok_or_else(|| rejected("read", AcctError::NotFound))
    }

    /// Partial update. Non-admins must confirm with their current password;
    /// admins never do, even when resetting someone else's password.
    pub async fn update(
        &self,
        requester: &Requester,
        target: AccountId,
        patch: AccountPatch,
    ) -> Result<Account> {
        if !requester.may_access(target) {
            return Err(rejected("update", AcctError::Forbidden));
        }

        let mut account = self
            .store
            .find_by_id(target)
            .await?
            .ok_or_else(|| rejected("update", AcctError::NotFound))?;

        if let Some(email) = patch.email() {
            if let Some(holder) = self.store.find_by_email(email).await? {
                if holder.id != target {
                    return Err(rejected("update", AcctError::DuplicateEmail));
                }
            }
        }

        if !requester.is_admin() {
            let old = patch
                .old_password()
                .ok_or_else(|| rejected("update", AcctError::OldPasswordRequired))?;
            if !self.hasher.verify(old, &account.password_hash)? {
                return Err(rejected("update", AcctError::IncorrectPassword));
            }
        }

        if let Some(name) = patch.name() {
            account.name = name.to_string();
        }
        if let Some(email) = patch.email() {
            account.email = email.to_string();
        }
        let password_changed = match patch.new_password() {
            Some(pw) => {
                account.password_hash = self.hasher.hash(pw)?;
                true
            }
            None => false,
        };

        let account = self.store.update(account).await?;
        info!(
            account_id = account.id,
            requester_id = requester.id(),
            requester_role = requester.role().as_str(),
            password_changed,
            "account updated"
        );
        Ok(account)
    }

    /// Password login. Unknown email and wrong password are indistinguishable.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let Some(account) = self.store.find_by_email(email).await? else {
            debug!("login for unknown email");
            return Err(AcctError::AuthFailed);
        };
        if !self.hasher.verify(password, &account.password_hash)? {
            debug!(account_id = account.id, "login with wrong password");
            return Err(AcctError::AuthFailed);
        }
        Ok(account)
    }
}

fn rejected(op: &'static str, err: AcctError) -> AcctError {
    debug!(op, code = err.client_code().as_str(), "policy rejected");
    err
}
