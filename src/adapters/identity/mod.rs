//! Identity adapters.
//!
//! - **StubIdentityProvider** - Accepts any well-formed credential unverified

mod stub;

pub use stub::StubIdentityProvider;
