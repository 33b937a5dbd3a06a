//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key/value stores (in-memory, files)
//! - `platform` - Environment and clock
//! - `identity` - Sign-in provider stub

pub mod identity;
pub mod platform;
pub mod storage;

pub use identity::StubIdentityProvider;
pub use platform::{ManualClock, StaticEnvironment, SystemClock};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
