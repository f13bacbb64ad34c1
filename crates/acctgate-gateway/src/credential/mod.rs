//! Credential service: password hashing and bearer tokens.

pub mod argon;
pub mod token;

pub use argon::Argon2Hasher;
pub use token::TokenService;
