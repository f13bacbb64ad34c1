//! Shared application state for the acctgate gateway.
//!
//! Startup errors are explicit (Result instead of panic).

use std::sync::Arc;

use acctgate_core::error::Result;
use acctgate_core::{AccountPolicy, AccountStore, InvitationCodes};

use crate::config::GatewayConfig;
use crate::credential::{Argon2Hasher, TokenService};
use crate::infra::MemoryAccountStore;
use crate::obs::AccountMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    policy: Arc<AccountPolicy>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    tokens: TokenService,
    metrics: AccountMetrics,
}

impl AppState {
    /// Build application state over a fresh in-memory store.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(MemoryAccountStore::new()))
    }

    pub fn with_store(cfg: GatewayConfig, store: Arc<dyn AccountStore>) -> Result<Self> {
        let hasher = Arc::new(Argon2Hasher::new(&cfg.password)?);
        let invitations = InvitationCodes::new(&cfg.invitations.user, &cfg.invitations.admin);
        let policy = Arc::new(AccountPolicy::new(store, hasher, invitations));
        let tokens = TokenService::new(&cfg.auth);

        tracing::debug!(
            argon2_memory_kib = cfg.password.memory_kib,
            token_ttl_secs = cfg.auth.token_ttl_secs,
            "app state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                tokens,
                metrics: AccountMetrics::default(),
            }),
            policy,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> Arc<AccountPolicy> {
        Arc::clone(&self.policy)
    }

    pub fn tokens(&self) -> &TokenService {
        &self.inner.tokens
    }

    pub fn metrics(&self) -> &AccountMetrics {
        &self.inner.metrics
    }
}
