//! Celebration and sharing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::sharing::DEFAULT_APP_NAME;

/// Confetti timing
#[derive(Debug, Clone, Deserialize)]
pub struct CelebrationConfig {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
}

impl CelebrationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.duration_secs == 0 || self.duration_secs > 60 {
            return Err(ValidationError::InvalidCelebrationDuration);
        }
        Ok(())
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
        }
    }
}

fn default_duration_secs() -> u64 {
    5
}

/// Share message settings
#[derive(Debug, Clone, Deserialize)]
pub struct SharingConfig {
    /// Name used in the share message
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl SharingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.app_name.trim().is_empty() {
            return Err(ValidationError::BlankAppName);
        }
        Ok(())
    }
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celebration_defaults() {
        let config = CelebrationConfig::default();
        assert_eq!(config.duration(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_celebration_duration_bounds() {
        assert!(CelebrationConfig { duration_secs: 0 }.validate().is_err());
        assert!(CelebrationConfig { duration_secs: 61 }.validate().is_err());
        assert!(CelebrationConfig { duration_secs: 60 }.validate().is_ok());
    }

    #[test]
    fn test_sharing_defaults() {
        assert_eq!(SharingConfig::default().app_name, "DecisionMate");
    }

    #[test]
    fn test_blank_app_name() {
        let config = SharingConfig {
            app_name: " ".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::BlankAppName));
    }
}
