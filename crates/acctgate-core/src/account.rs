//! Account records and the per-request inputs of the policy engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned account identifier.
pub type AccountId = i64;

/// Account role. Serialized as `"user"` / `"admin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// Persisted account record.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Unique across the whole store.
    pub email: String,
    /// Opaque PHC string produced by the password hasher.
    pub password_hash: String,
    pub role: Role,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Account that has not been assigned an id yet.
#[derive(Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewAccount {
    pub fn with_id(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

/// Authenticated identity attached to a request.
///
/// Carries the requester's own record as loaded by the credential layer, so
/// self-reads can be answered without another store round trip.
#[derive(Debug, Clone)]
pub struct Requester {
    account: Account,
}

impl Requester {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn id(&self) -> AccountId {
        self.account.id
    }

    pub fn role(&self) -> Role {
        self.account.role
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Self access, or any access for admins.
    pub fn may_access(&self, target: AccountId) -> bool {
        self.id() == target || self.is_admin()
    }
}

/// Signup payload.
#[derive(Clone, Deserialize)]
pub struct CreateAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub invitation: String,
}

/// Partial update payload. Absent and empty-string fields are both ignored.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

impl AccountPatch {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    pub fn old_password(&self) -> Option<&str> {
        non_empty(&self.old_password)
    }

    pub fn new_password(&self) -> Option<&str> {
        non_empty(&self.new_password)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}
