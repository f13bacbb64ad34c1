//! Shared error type across acctgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientCode {
    /// Another account already holds the email.
    DuplicateEmail,
    /// Invitation code matches neither configured secret.
    InvalidInvitation,
    /// Requester may not touch the target account.
    Forbidden,
    /// Target account does not exist.
    NotFound,
    /// Non-admin update without `old_password`.
    OldPasswordRequired,
    /// `old_password` does not match the stored hash.
    IncorrectPassword,
    /// Invalid input / malformed request.
    BadRequest,
    /// Missing or invalid credential.
    AuthFailed,
    /// Record store temporarily unavailable.
    Unavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ClientCode::InvalidInvitation => "INVALID_INVITATION",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::OldPasswordRequired => "OLD_PASSWORD_REQUIRED",
            ClientCode::IncorrectPassword => "INCORRECT_PASSWORD",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::Unavailable => "UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AcctError>;

/// Unified error type used by core and gateway.
///
/// The first six variants are policy rejections: expected outcomes of a
/// request, never faults. The rest are input, credential, or infrastructure
/// failures.
#[derive(Debug, Error)]
pub enum AcctError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("invalid invitation code")]
    InvalidInvitation,
    #[error("forbidden")]
    Forbidden,
    #[error("account not found")]
    NotFound,
    #[error("old password required")]
    OldPasswordRequired,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AcctError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AcctError::DuplicateEmail => ClientCode::DuplicateEmail,
            AcctError::InvalidInvitation => ClientCode::InvalidInvitation,
            AcctError::Forbidden => ClientCode::Forbidden,
            AcctError::NotFound => ClientCode::NotFound,
            AcctError::OldPasswordRequired => ClientCode::OldPasswordRequired,
            AcctError::IncorrectPassword => ClientCode::IncorrectPassword,
            AcctError::BadRequest(_) => ClientCode::BadRequest,
            AcctError::AuthFailed => ClientCode::AuthFailed,
            AcctError::Unavailable(_) => ClientCode::Unavailable,
            AcctError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for the policy rejection taxonomy (not input or infrastructure errors).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AcctError::DuplicateEmail
                | AcctError::InvalidInvitation
                | AcctError::Forbidden
                | AcctError::NotFound
                | AcctError::OldPasswordRequired
                | AcctError::IncorrectPassword
        )
    }
}
