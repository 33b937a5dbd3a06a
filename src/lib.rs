//! DecisionMate - guided decision making with weighted scoring.
//!
//! The guided path walks a decision through six steps and recommends the
//! option with the best risk-weighted impact score. A pros/cons worksheet
//! ranks options by net weighted score. Theme, priorities and the signed-in
//! user are kept in local storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
