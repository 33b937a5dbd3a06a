//! Sign-in, sign-out and restoring the signed-in user.

use std::sync::Arc;

use crate::domain::preferences::{UserProfile, USER_STORAGE_KEY};
use crate::ports::{
    load_json, save_json, IdentityError, IdentityProvider, KeyValueStore, StorageError,
};

/// Command to sign in with a credential from the sign-in widget.
#[derive(Debug, Clone)]
pub struct SignInCommand {
    pub credential: String,
}

/// Error type for signing in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// The identity provider refused the credential
    Identity(IdentityError),
    /// The profile could not be stored
    Storage(String),
}

impl std::fmt::Display for SignInError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignInError::Identity(err) => write!(f, "Sign-in failed: {}", err),
            SignInError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for SignInError {}

impl From<IdentityError> for SignInError {
    fn from(err: IdentityError) -> Self {
        SignInError::Identity(err)
    }
}

impl From<StorageError> for SignInError {
    fn from(err: StorageError) -> Self {
        SignInError::Storage(err.to_string())
    }
}

/// Exchanges the credential for a profile and remembers it.
pub struct SignInHandler {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn KeyValueStore>,
}

impl SignInHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { identity, store }
    }

    pub async fn handle(&self, cmd: SignInCommand) -> Result<UserProfile, SignInError> {
        // 1. Ask the provider
        let profile = self.identity.sign_in(&cmd.credential).await.map_err(|err| {
            tracing::warn!(error = %err, "Sign-in rejected");
            err
        })?;

        // 2. Remember the user
        save_json(self.store.as_ref(), USER_STORAGE_KEY, &profile).await?;

        tracing::info!(user_id = %profile.id, "User signed in");
        Ok(profile)
    }
}

/// Forgets the signed-in user.
pub struct SignOutHandler {
    store: Arc<dyn KeyValueStore>,
}

impl SignOutHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<(), StorageError> {
        self.store.remove(USER_STORAGE_KEY).await?;
        tracing::info!("User signed out");
        Ok(())
    }
}

/// Restores the signed-in user from storage.
pub struct LoadUserHandler {
    store: Arc<dyn KeyValueStore>,
}

impl LoadUserHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// `None` when nobody is signed in or the record is unreadable.
    pub async fn handle(&self) -> Option<UserProfile> {
        match load_json::<UserProfile>(self.store.as_ref(), USER_STORAGE_KEY).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Stored user unreadable, treating as signed out");
                None
            }
        }
    }
}
