//! Infrastructure adapters behind the core collaborator traits.

pub mod memory_store;

pub use memory_store::MemoryAccountStore;
