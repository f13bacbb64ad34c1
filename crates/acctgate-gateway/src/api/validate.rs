//! Request-shape checks that run before the policy engine.

use acctgate_core::error::{AcctError, Result};
use acctgate_core::{AccountPatch, CreateAccount};

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn signup(req: &CreateAccount) -> Result<()> {
    if req.name.trim().is_empty() {
        return Err(AcctError::BadRequest("name must not be empty".into()));
    }
    email(&req.email)?;
    password("password", &req.password)?;
    if req.invitation.is_empty() {
        return Err(AcctError::BadRequest("invitation must not be empty".into()));
    }
    Ok(())
}

/// Only present, non-empty fields are checked; the rest are ignored by the policy.
pub fn patch(p: &AccountPatch) -> Result<()> {
    if let Some(e) = p.email() {
        email(e)?;
    }
    if let Some(pw) = p.new_password() {
        password("new_password", pw)?;
    }
    Ok(())
}

fn email(s: &str) -> Result<()> {
    let ok = match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if ok {
        Ok(())
    } else {
        Err(AcctError::BadRequest(format!("invalid email: {s}")))
    }
}

fn password(field: &str, s: &str) -> Result<()> {
    if s.chars().count() < MIN_PASSWORD_LEN {
        return Err(AcctError::BadRequest(format!(
            "{field} must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
