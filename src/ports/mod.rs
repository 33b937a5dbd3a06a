//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - local persistence of opaque JSON values
//! - `PlatformEnvironment` - colour-scheme preference and current URL
//! - `Clock` - the current time, injectable for deterministic timers
//! - `IdentityProvider` - the sign-in widget

mod identity_provider;
mod key_value_store;
mod platform;

pub use identity_provider::{IdentityError, IdentityProvider};
pub use key_value_store::{load_json, save_json, KeyValueStore, StorageError};
pub use platform::{Clock, PlatformEnvironment};
