//! Platform adapters.
//!
//! - **StaticEnvironment** - Fixed colour-scheme preference and URL
//! - **SystemClock** - Wall-clock time
//! - **ManualClock** - Time that only moves when told to (testing)

mod clock;
mod environment;

pub use clock::{ManualClock, SystemClock};
pub use environment::StaticEnvironment;
