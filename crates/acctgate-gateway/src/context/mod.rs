//! Per-request context types shared across layers.
//!
//! The requester identity is resolved once per request by an extractor and
//! passed into every policy call as a plain argument.

pub mod requester;

pub use requester::Authenticated;
