//! Theme handlers - load and toggle the light/dark preference.

use std::sync::Arc;

use crate::domain::preferences::{ThemeEnvelope, ThemePreference, THEME_STORAGE_KEY};
use crate::ports::{load_json, save_json, KeyValueStore, PlatformEnvironment, StorageError};

/// Reads the stored theme, falling back to the platform's preference.
pub struct LoadThemeHandler {
    store: Arc<dyn KeyValueStore>,
    environment: Arc<dyn PlatformEnvironment>,
}

impl LoadThemeHandler {
    pub fn new(store: Arc<dyn KeyValueStore>, environment: Arc<dyn PlatformEnvironment>) -> Self {
        Self { store, environment }
    }

    /// Never fails: a missing or unreadable value means "use the platform default".
    pub async fn handle(&self) -> ThemePreference {
        match load_json::<ThemeEnvelope>(self.store.as_ref(), THEME_STORAGE_KEY).await {
            Ok(Some(envelope)) => envelope.state,
            Ok(None) => self.platform_default(),
            Err(err) => {
                tracing::warn!(error = %err, "Stored theme unreadable, using platform default");
                self.platform_default()
            }
        }
    }

    fn platform_default(&self) -> ThemePreference {
        ThemePreference::new(self.environment.prefers_dark_scheme())
    }
}

/// Command to flip the theme.
#[derive(Debug, Clone, Copy)]
pub struct ToggleThemeCommand {
    pub current: ThemePreference,
}

/// Flips the theme and persists the result.
pub struct ToggleThemeHandler {
    store: Arc<dyn KeyValueStore>,
}

impl ToggleThemeHandler {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ToggleThemeCommand) -> Result<ThemePreference, StorageError> {
        let next = cmd.current.toggled();
        save_json(self.store.as_ref(), THEME_STORAGE_KEY, &ThemeEnvelope::from(next)).await?;
        tracing::info!(dark_mode = next.dark_mode, "Theme toggled");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryKeyValueStore, StaticEnvironment};

    fn environment(prefers_dark: bool) -> Arc<StaticEnvironment> {
        Arc::new(StaticEnvironment::new(prefers_dark, "http://localhost/"))
    }

    #[tokio::test]
    async fn test_load_defaults_to_platform_preference() {
        let store = Arc::new(InMemoryKeyValueStore::new());

        let dark = LoadThemeHandler::new(store.clone(), environment(true)).handle().await;
        let light = LoadThemeHandler::new(store, environment(false)).handle().await;

        assert!(dark.dark_mode);
        assert!(!light.dark_mode);
    }

    #[tokio::test]
    async fn test_load_reads_stored_envelope() {
        let store = Arc::new(InMemoryKeyValueStore::with_values([(
            THEME_STORAGE_KEY,
            r#"{"state":{"isDarkMode":true},"version":0}"#,
        )]));

        let theme = LoadThemeHandler::new(store, environment(false)).handle().await;

        assert!(theme.dark_mode);
        assert_eq!(theme.root_class(), Some("dark"));
    }

    #[tokio::test]
    async fn test_load_ignores_garbage() {
        let store = Arc::new(InMemoryKeyValueStore::with_values([(THEME_STORAGE_KEY, "{not json")]));

        let theme = LoadThemeHandler::new(store, environment(true)).handle().await;

        assert!(theme.dark_mode);
    }

    #[tokio::test]
    async fn test_toggle_persists_envelope() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let handler = ToggleThemeHandler::new(store.clone());

        let theme = handler
            .handle(ToggleThemeCommand {
                current: ThemePreference::new(false),
            })
            .await
            .unwrap();

        assert!(theme.dark_mode);
        let raw = store.get(THEME_STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"{"state":{"isDarkMode":true},"version":0}"#);
    }

    #[tokio::test]
    async fn test_toggle_round_trips_through_load() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let toggle = ToggleThemeHandler::new(store.clone());
        let load = LoadThemeHandler::new(store, environment(false));

        let current = load.handle().await;
        toggle.handle(ToggleThemeCommand { current }).await.unwrap();

        assert!(load.handle().await.dark_mode);
    }
}
