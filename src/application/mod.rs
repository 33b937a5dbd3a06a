//! Application layer - the decision session and the handlers around it.
//!
//! `DecisionSession` owns the in-progress decision and applies screen
//! input synchronously. Handlers coordinate with the ports for anything
//! that is persisted or goes through the identity provider.

mod context;
pub mod handlers;
mod session;

pub use context::{AppContext, BootstrapError};
pub use handlers::{
    LoadPrioritiesHandler, LoadThemeHandler, LoadUserHandler, SavePrioritiesCommand,
    SavePrioritiesHandler, SignInCommand, SignInError, SignInHandler, SignOutHandler,
    ToggleThemeCommand, ToggleThemeHandler,
};
pub use session::{DecisionSession, SessionSettings};
