//! Application handlers.
//!
//! Command and query handlers that coordinate the session with the ports.

mod identity;
mod priorities;
mod theme;

pub use identity::{
    LoadUserHandler, SignInCommand, SignInError, SignInHandler, SignOutHandler,
};
pub use priorities::{LoadPrioritiesHandler, SavePrioritiesCommand, SavePrioritiesHandler};
pub use theme::{LoadThemeHandler, ToggleThemeCommand, ToggleThemeHandler};
