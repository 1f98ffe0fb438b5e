//! Repeatability run orchestration.
//!
//! A run validates its request, then drives a type-state [`Session`] through
//! positioning, sampling and finalizing. Compensation is suspended for the whole
//! session and restored on every exit path.

mod builder;
mod orchestrator;
mod outcome;
mod session;
pub mod state;

pub use builder::RepeatabilityTestBuilder;
pub use orchestrator::RepeatabilityTest;
pub use outcome::{RunOutcome, TestResult};
pub use session::Session;
