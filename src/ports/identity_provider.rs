//! Identity provider port for the sign-in widget.
//!
//! The credential the widget hands back is exchanged for a profile. There is
//! no backend check behind this; adapters decide how much to trust it.

use async_trait::async_trait;

use crate::domain::preferences::UserProfile;

/// Errors from the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Credential was rejected")]
    InvalidCredential,

    #[error("Identity provider is not configured: {0}")]
    NotConfigured(String),

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Turns a sign-in credential into a user profile.
///
/// # Contract
///
/// Implementations must:
/// - Return `IdentityError::InvalidCredential` for an empty or rejected credential
/// - Never persist anything themselves
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Identifier of the configured client.
    fn client_id(&self) -> &str;

    /// Exchange a credential for a profile.
    async fn sign_in(&self, credential: &str) -> Result<UserProfile, IdentityError>;
}
