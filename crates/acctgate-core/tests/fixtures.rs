//! In-test collaborators shared by the policy tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use acctgate_core::{
    AccountPolicy, AccountStore, AcctError, InvitationCodes, NewAccount, PasswordHasher, Requester,
    Result, Role,
};
use acctgate_core::{Account, AccountId};

pub const USER_CODE: &str = "invite-user";
pub const ADMIN_CODE: &str = "invite-admin";

/// Vec-backed store that counts calls and can be switched offline.
#[derive(Default)]
pub struct FakeStore {
    rows: Mutex<Vec<Account>>,
    pub lookups: AtomicUsize,
    pub inserts: AtomicUsize,
    pub updates: AtomicUsize,
    pub offline: AtomicBool,
}

impl FakeStore {
    pub fn with(rows: Vec<Account>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    pub fn get(&self, id: AccountId) -> Option<Account> {
        self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AcctError::Unavailable("fake store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for FakeStore {
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>> {
        self.check_online()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        self.check_online()?;
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account> {
        self.check_online()?;
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let account = account.with_id(id);
        rows.push(account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account> {
        self.check_online()?;
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or(AcctError::NotFound)?;
        *slot = account.clone();
        Ok(account)
    }
}

/// Reversible "hash" so tests can assert on stored values.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
        let stored = password_hash
            .strip_prefix("plain$")
            .ok_or_else(|| AcctError::Internal("not a plain hash".into()))?;
        Ok(stored == password)
    }
}

pub fn account(id: AccountId, name: &str, email: &str, password: &str, role: Role) -> Account {
    Account {
        id,
        name: name.into(),
        email: email.into(),
        password_hash: format!("plain${password}"),
        role,
    }
}

/// 1001 user, 1002 user, 2001 admin.
pub fn seeded() -> Vec<Account> {
    vec![
        account(1001, "User", "user@email.com", "12345678", Role::User),
        account(1002, "New User", "newuser@email.com", "!@#$%^&*", Role::User),
        account(2001, "Admin", "admin@email.com", "abcdefgh", Role::Admin),
    ]
}

pub fn policy(store: Arc<FakeStore>) -> AccountPolicy {
    AccountPolicy::new(
        store,
        Arc::new(PlainHasher),
        InvitationCodes::new(USER_CODE, ADMIN_CODE),
    )
}

pub fn requester(store: &FakeStore, id: AccountId) -> Requester {
    Requester::new(store.get(id).expect("seeded requester"))
}
