//! AppContext - wires configuration to adapters and hands out handlers.

use std::sync::Arc;

use super::handlers::{
    LoadPrioritiesHandler, LoadThemeHandler, LoadUserHandler, SavePrioritiesHandler,
    SignInHandler, SignOutHandler, ToggleThemeHandler,
};
use super::session::{DecisionSession, SessionSettings};
use crate::adapters::{FileKeyValueStore, InMemoryKeyValueStore, StubIdentityProvider};
use crate::config::{AppConfig, StorageBackend, ValidationError};
use crate::ports::{Clock, IdentityError, IdentityProvider, KeyValueStore, PlatformEnvironment};

/// Errors raised while assembling the application.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error("Identity provider: {0}")]
    Identity(#[from] IdentityError),
}

/// Shared ports plus the settings every session gets.
#[derive(Clone)]
pub struct AppContext {
    store: Arc<dyn KeyValueStore>,
    identity: Arc<dyn IdentityProvider>,
    environment: Arc<dyn PlatformEnvironment>,
    clock: Arc<dyn Clock>,
    settings: SessionSettings,
}

impl AppContext {
    /// Builds the context from validated configuration.
    ///
    /// # Errors
    ///
    /// Fails fast on invalid configuration, a missing identity client id first.
    pub fn from_config(
        config: &AppConfig,
        environment: Arc<dyn PlatformEnvironment>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, BootstrapError> {
        config.validate()?;

        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
            StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
        };
        let identity = Arc::new(StubIdentityProvider::new(config.identity.client_id.clone())?);

        tracing::info!(
            backend = ?config.storage.backend,
            celebration_secs = config.celebration.duration_secs,
            "Application context ready"
        );

        Ok(Self {
            store,
            identity,
            environment,
            clock,
            settings: SessionSettings {
                celebration_duration: config.celebration.duration(),
                app_name: config.sharing.app_name.clone(),
            },
        })
    }

    /// Assembles a context from explicit ports.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        identity: Arc<dyn IdentityProvider>,
        environment: Arc<dyn PlatformEnvironment>,
        clock: Arc<dyn Clock>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            store,
            identity,
            environment,
            clock,
            settings,
        }
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// A fresh session with the stored priorities restored.
    pub async fn start_session(&self) -> DecisionSession {
        let mut session = DecisionSession::new(
            self.clock.clone(),
            self.environment.clone(),
            self.settings.clone(),
        );
        session.set_priorities(self.load_priorities().handle().await);
        session
    }

    pub fn load_theme(&self) -> LoadThemeHandler {
        LoadThemeHandler::new(self.store.clone(), self.environment.clone())
    }

    pub fn toggle_theme(&self) -> ToggleThemeHandler {
        ToggleThemeHandler::new(self.store.clone())
    }

    pub fn load_priorities(&self) -> LoadPrioritiesHandler {
        LoadPrioritiesHandler::new(self.store.clone())
    }

    pub fn save_priorities(&self) -> SavePrioritiesHandler {
        SavePrioritiesHandler::new(self.store.clone())
    }

    pub fn sign_in(&self) -> SignInHandler {
        SignInHandler::new(self.identity.clone(), self.store.clone())
    }

    pub fn sign_out(&self) -> SignOutHandler {
        SignOutHandler::new(self.store.clone())
    }

    pub fn load_user(&self) -> LoadUserHandler {
        LoadUserHandler::new(self.store.clone())
    }
}
