//! acctgate core: account records, the error taxonomy, and the account policy engine.
//!
//! This crate holds the access-control rules (who may read or modify which
//! account, and under what preconditions) together with the collaborator
//! traits the rules run against. It carries no transport or runtime
//! dependencies so the policy can be driven by any front end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AcctError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod account;
pub mod error;
pub mod invitation;
pub mod policy;
pub mod store;

/// Shared result type.
pub use error::{AcctError, Result};

pub use account::{Account, AccountId, AccountPatch, CreateAccount, NewAccount, Requester, Role};
pub use invitation::InvitationCodes;
pub use policy::AccountPolicy;
pub use store::{AccountStore, PasswordHasher};
