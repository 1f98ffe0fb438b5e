//! Progress and result reporting.
//!
//! The run emits structured [`RunEvent`]s; turning them into text is the job of
//! a [`Reporter`]. [`SerialReporter`] renders the classic serial console output.

mod serial;

pub use serial::SerialReporter;

use crate::config::request::Verbosity;
use crate::error::{ProbeFailure, RequestError};
use crate::pattern::{Leg, LegPlan};
use crate::run::TestResult;
use crate::stats::StatsSnapshot;

/// Something that happened during a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunEvent {
    /// The request was rejected; nothing moved.
    Rejected(RequestError),
    /// Test header. Written once the verbose level is valid, even if a later
    /// gate rejects the request.
    Started,
    /// Moving to the target and deploying the probe.
    Positioning,
    /// Leg parameters drawn for the coming reading.
    LegPlan(LegPlan),
    /// About to move to a leg waypoint.
    LegMove {
        /// The leg.
        leg: Leg,
        /// Current Z height of the carriage.
        z: f32,
    },
    /// A reading succeeded.
    Sample {
        /// Zero-based sample index.
        index: u8,
        /// Configured number of samples.
        total: u8,
        /// Measured height.
        z: f32,
        /// Statistics including this reading.
        stats: StatsSnapshot,
    },
    /// A probe reading failed; no further readings are taken.
    ProbeFailed(ProbeFailure),
    /// Every configured reading succeeded.
    Finished(TestResult),
}

/// Consumer of run events.
pub trait Reporter {
    /// Handle one event. `verbosity` is the run's level, or the default level
    /// when the requested one is unusable.
    fn report(&mut self, verbosity: Verbosity, event: &RunEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _verbosity: Verbosity, _event: &RunEvent) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, verbosity: Verbosity, event: &RunEvent) {
        (**self).report(verbosity, event);
    }
}
