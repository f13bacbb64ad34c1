//! Invitation codes: the signup secrets that pick a new account's role.

use crate::account::Role;

/// The two configured invitation secrets.
///
/// Kept apart from [`Account`](crate::account::Account) so secrets never
/// travel with records.
#[derive(Clone)]
pub struct InvitationCodes {
    user: String,
    admin: String,
}

impl InvitationCodes {
    pub fn new(user: impl Into<String>, admin: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            admin: admin.into(),
        }
    }

    /// Resolve a submitted code to a role. `None` for anything else.
    pub fn resolve(&self, submitted: &str) -> Option<Role> {
        if secret_eq(submitted, &self.user) {
            Some(Role::User)
        } else if secret_eq(submitted, &self.admin) {
            Some(Role::Admin)
        } else {
            None
        }
    }
}

// Length leaks, content does not.
fn secret_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
