//! Identity provider configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Sign-in widget configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct IdentityConfig {
    /// OAuth client id handed to the sign-in widget
    #[serde(default)]
    pub client_id: String,
}

impl IdentityConfig {
    /// A missing client id is fatal at startup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY__CLIENT_ID"));
        }
        Ok(())
    }
}
