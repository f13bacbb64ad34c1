use serde::Deserialize;
use acctgate_core::error::{AcctError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub invitations: InvitationSection,

    pub auth: AuthSection,

    #[serde(default)]
    pub password: PasswordSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AcctError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.invitations.validate()?;
        self.auth.validate()?;
        self.password.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Signup secrets. `user` grants role user, `admin` grants role admin.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvitationSection {
    pub user: String,
    pub admin: String,
}

impl InvitationSection {
    pub fn validate(&self) -> Result<()> {
        if self.user.is_empty() || self.admin.is_empty() {
            return Err(AcctError::BadRequest(
                "invitations.user and invitations.admin must not be empty".into(),
            ));
        }
        if self.user == self.admin {
            return Err(AcctError::BadRequest(
                "invitations.user and invitations.admin must differ".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for InvitationSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InvitationSection { .. }")
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    pub token_secret: String,

    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl AuthSection {
    pub fn validate(&self) -> Result<()> {
        if self.token_secret.len() < 32 {
            return Err(AcctError::BadRequest(
                "auth.token_secret must be at least 32 bytes".into(),
            ));
        }
        if !(60..=604800).contains(&self.token_ttl_secs) {
            return Err(AcctError::BadRequest(
                "auth.token_ttl_secs must be between 60 and 604800".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish_non_exhaustive()
    }
}

fn default_token_ttl_secs() -> u64 {
    3600
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordSection {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,

    #[serde(default = "default_iterations")]
    pub iterations: u32,

    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordSection {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl PasswordSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=16).contains(&self.parallelism) {
            return Err(AcctError::BadRequest(
                "password.parallelism must be between 1 and 16".into(),
            ));
        }
        // argon2 needs at least 8 KiB per lane
        if self.memory_kib < 8 * self.parallelism || self.memory_kib > 1_048_576 {
            return Err(AcctError::BadRequest(
                "password.memory_kib must be between 8*parallelism and 1048576".into(),
            ));
        }
        if !(1..=16).contains(&self.iterations) {
            return Err(AcctError::BadRequest(
                "password.iterations must be between 1 and 16".into(),
            ));
        }
        Ok(())
    }
}

fn default_memory_kib() -> u32 {
    19456
}
fn default_iterations() -> u32 {
    2
}
fn default_parallelism() -> u32 {
    1
}
