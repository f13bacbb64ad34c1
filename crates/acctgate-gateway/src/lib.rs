//! acctgate gateway library entry.
//!
//! This crate wires the account policy engine to its concrete collaborators
//! (in-memory store, argon2 hasher, JWT tokens) and exposes it over HTTP. It
//! is intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod context;
pub mod credential;
pub mod infra;
pub mod obs;
pub mod ops;
pub mod router;
