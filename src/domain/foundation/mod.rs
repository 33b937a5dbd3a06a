//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types
//! that form the vocabulary of the DecisionMate domain.

mod errors;
mod percentage;
mod step;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use step::DecisionStep;
pub use timestamp::Timestamp;
pub use weight::Weight;
