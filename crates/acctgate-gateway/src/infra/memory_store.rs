//! In-process account store.
//!
//! Email uniqueness is enforced here, not only by the policy engine: the
//! `email -> id` index entry is claimed atomically (per DashMap shard) before a
//! record is written, so two racing signups for one address cannot both land.
//!
//! `update` replaces the whole record (last writer wins). An update built
//! from a stale snapshot carries the email the record had when it was read;
//! if the record has since moved to another address, the stale update
//! re-claims the old one and fails with `DuplicateEmail` when that address
//! now belongs to someone else. The stored record is left untouched.
//!
//! Lock order is always `accounts` then `email_index`; lookups copy the id out
//! of the index before touching `accounts`.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use acctgate_core::error::{AcctError, Result};
use acctgate_core::{Account, AccountId, AccountStore, NewAccount};

pub struct MemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    email_index: DashMap<String, AccountId>,
    next_id: AtomicI64,
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            email_index: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a record with a fixed id. Later inserts get ids above it.
    pub fn seed(&self, account: Account) -> Result<Account> {
        if self.accounts.contains_key(&account.id) {
            return Err(AcctError::BadRequest(format!(
                "account id {} already taken",
                account.id
            )));
        }
        self.claim_email(&account.email, account.id)?;
        self.next_id.fetch_max(account.id + 1, Ordering::SeqCst);
        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn claim_email(&self, email: &str, id: AccountId) -> Result<()> {
        match self.email_index.entry(email.to_string()) {
            Entry::Occupied(e) if *e.get() != id => Err(AcctError::DuplicateEmail),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(v) => {
                v.insert(id);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>> {
        Ok(self.accounts.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let Some(id) = self.email_index.get(email).map(|r| *r.value()) else {
            return Ok(None);
        };
        Ok(self.accounts.get(&id).map(|r| r.value().clone()))
    }

    async fn insert(&self, account: NewAccount) -> Result<Account> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.claim_email(&account.email, id) {
            tracing::debug!(email_taken = true, "store refused insert");
            return Err(e);
        }
        let account = account.with_id(id);
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let Some(mut slot) = self.accounts.get_mut(&account.id) else {
            return Err(AcctError::NotFound);
        };

        if slot.email != account.email {
            self.claim_email(&account.email, account.id)?;
            self.email_index
                .remove_if(&slot.email, |_, holder| *holder == account.id);
        }

        *slot = account.clone();
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acctgate_core::Role;

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            name: "n".into(),
            email: email.into(),
            password_hash: "h".into(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let s = MemoryAccountStore::new();
        let a = s.insert(new_account("a@email.com")).await.expect("a");
        let b = s.insert(new_account("b@email.com")).await.expect("b");
        assert!(b.id > a.id);
        assert_eq!(s.find_by_email("b@email.com").await.expect("find").map(|x| x.id), Some(b.id));
    }

    #[tokio::test]
    async fn seed_moves_id_counter_past_fixed_ids() {
        let s = MemoryAccountStore::new();
        s.seed(new_account("u@email.com").with_id(1001)).expect("seed");
        let next = s.insert(new_account("v@email.com")).await.expect("insert");
        assert_eq!(next.id, 1002);
        assert!(s.seed(new_account("w@email.com").with_id(1001)).is_err());
    }

    #[tokio::test]
    async fn email_change_releases_old_address() {
        let s = MemoryAccountStore::new();
        let mut a = s.insert(new_account("old@email.com")).await.expect("insert");
        a.email = "new@email.com".into();
        s.update(a).await.expect("update");

        assert!(s.find_by_email("old@email.com").await.expect("find").is_none());
        s.insert(new_account("old@email.com")).await.expect("old address is free again");
    }

    #[tokio::test]
    async fn update_into_taken_email_is_refused() {
        let s = MemoryAccountStore::new();
        s.insert(new_account("a@email.com")).await.expect("a");
        let mut b = s.insert(new_account("b@email.com")).await.expect("b");
        b.email = "a@email.com".into();
        let err = s.update(b.clone()).await.expect_err("must fail");
        assert!(matches!(err, AcctError::DuplicateEmail));
        let stored = s.find_by_id(b.id).await.expect("find").expect("present");
        assert_eq!(stored.email, "b@email.com");
    }

    #[tokio::test]
    async fn stale_snapshot_cannot_reclaim_a_reused_address() {
        let s = MemoryAccountStore::new();
        let a = s.insert(new_account("first@email.com")).await.expect("a");
        let stale = a.clone();

        let mut moved = a.clone();
        moved.email = "second@email.com".into();
        s.update(moved).await.expect("move");
        let other = s.insert(new_account("first@email.com")).await.expect("reuse");

        let mut renamed = stale;
        renamed.name = "renamed".into();
        let err = s.update(renamed).await.expect_err("must fail");
        assert!(matches!(err, AcctError::DuplicateEmail));

        let stored = s.find_by_id(a.id).await.expect("find").expect("present");
        assert_eq!(stored.email, "second@email.com");
        assert_eq!(stored.name, "n");
        let holder = s.find_by_email("first@email.com").await.expect("find").expect("held");
        assert_eq!(holder.id, other.id);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let s = MemoryAccountStore::new();
        let err = s.update(new_account("x@email.com").with_id(77)).await.expect_err("must fail");
        assert!(matches!(err, AcctError::NotFound));
    }
}
