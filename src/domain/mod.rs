//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (weights, percentages, steps, errors)
//! - `decision` - Decision state, options, priorities and the pros/cons worksheet
//! - `analysis` - Pure scoring services and best-option selection
//! - `flow` - Navigation across the guided path
//! - `celebration` - Confetti timer and overlays after finalizing
//! - `sharing` - Share links for social platforms
//! - `preferences` - Theme flag and user record persisted locally

pub mod analysis;
pub mod celebration;
pub mod decision;
pub mod flow;
pub mod foundation;
pub mod preferences;
pub mod sharing;
