//! Platform ports - the ambient facts a browser would supply.
//!
//! - `PlatformEnvironment` - colour-scheme preference and current page URL
//! - `Clock` - the current time

use crate::domain::foundation::Timestamp;

/// What the host environment reports about itself.
pub trait PlatformEnvironment: Send + Sync {
    /// True when the host prefers a dark colour scheme.
    fn prefers_dark_scheme(&self) -> bool;

    /// Absolute URL of the page being shown, used for sharing.
    fn current_url(&self) -> String;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
