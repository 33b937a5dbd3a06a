//! Stub identity provider.
//!
//! The sign-in widget hands back a credential carrying the user's claims.
//! Nothing is verified against a backend: any non-empty credential whose
//! claims parse is accepted.
//!
//! # Example
//!
//! ```ignore
//! let provider = StubIdentityProvider::new("client-123")?;
//! let profile = provider
//!     .sign_in(r#"{"sub":"42","name":"Ada","email":"ada@example.com"}"#)
//!     .await?;
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::preferences::UserProfile;
use crate::ports::{IdentityError, IdentityProvider};

/// Claims carried by a credential.
#[derive(Debug, Deserialize)]
struct CredentialClaims {
    sub: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    picture: Option<String>,
}

/// Identity provider that trusts the credential it is given.
#[derive(Debug, Clone)]
pub struct StubIdentityProvider {
    client_id: String,
}

impl StubIdentityProvider {
    /// Creates a provider for the given client.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when the client id is blank.
    pub fn new(client_id: impl Into<String>) -> Result<Self, IdentityError> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(IdentityError::NotConfigured("client id".to_string()));
        }
        Ok(Self { client_id })
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn client_id(&self) -> &str {
        &self.client_id
    }

    async fn sign_in(&self, credential: &str) -> Result<UserProfile, IdentityError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(IdentityError::InvalidCredential);
        }

        let claims: CredentialClaims =
            serde_json::from_str(credential).map_err(|_| IdentityError::InvalidCredential)?;
        if claims.sub.trim().is_empty() {
            return Err(IdentityError::InvalidCredential);
        }

        tracing::debug!(user_id = %claims.sub, "Credential accepted without verification");

        Ok(UserProfile {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            picture: claims.picture,
        })
    }
}
