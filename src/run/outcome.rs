//! Result of a repeatability run.

use crate::error::{ProbeFailure, RequestError};
use crate::stats::StatsSnapshot;

/// Final statistics of a run that got past validation.
///
/// Statistics cover the readings actually taken; with no readings they are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    /// Mean height.
    pub mean: f32,
    /// Population standard deviation.
    pub sigma: f32,
    /// Lowest reading.
    pub min: f32,
    /// Highest reading.
    pub max: f32,
    /// `max - min`.
    pub range: f32,
    /// Readings taken.
    pub samples_taken: u8,
    /// Readings requested.
    pub samples_requested: u8,
    /// Whether every requested reading succeeded.
    pub success: bool,
    /// The failed probe reading, if any.
    pub failure: Option<ProbeFailure>,
}

impl TestResult {
    pub(crate) fn from_snapshot(
        snapshot: StatsSnapshot,
        samples_requested: u8,
        failure: Option<ProbeFailure>,
    ) -> Self {
        let success = failure.is_none() && snapshot.count == samples_requested;
        if snapshot.count == 0 {
            return Self {
                mean: 0.0,
                sigma: 0.0,
                min: 0.0,
                max: 0.0,
                range: 0.0,
                samples_taken: 0,
                samples_requested,
                success,
                failure,
            };
        }
        Self {
            mean: snapshot.mean,
            sigma: snapshot.sigma,
            min: snapshot.min,
            max: snapshot.max,
            range: snapshot.range(),
            samples_taken: snapshot.count,
            samples_requested,
            success,
            failure,
        }
    }
}

/// What a call to `run` produced. A run never returns an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// Rejected before any motion.
    Rejected(RequestError),
    /// Mechanical phase ran; see [`TestResult::success`].
    Measured(TestResult),
}

impl RunOutcome {
    /// Result if the run got past validation.
    pub fn result(&self) -> Option<&TestResult> {
        match self {
            RunOutcome::Measured(result) => Some(result),
            RunOutcome::Rejected(_) => None,
        }
    }

    /// Whether every requested reading succeeded.
    pub fn is_success(&self) -> bool {
        self.result().map(|r| r.success).unwrap_or(false)
    }
}
