//! Top-level facade crate for acctgate.
//!
//! Re-exports the core policy types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use acctgate_core::*;
}

pub mod gateway {
    pub use acctgate_gateway::*;
}
