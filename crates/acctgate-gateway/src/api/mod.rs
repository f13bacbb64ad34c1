//! HTTP API: signup, profile read/update, login.

pub mod accounts;
pub mod auth;
pub mod error;
pub mod validate;

use serde::Serialize;

use acctgate_core::{Account, AccountId, Role};

/// Public account representation. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub role: Role,
}

impl From<&Account> for AccountView {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id,
            name: a.name.clone(),
            email: a.email.clone(),
            role: a.role,
        }
    }
}
