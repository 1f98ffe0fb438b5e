//! Probe driver interface and the sampler built on it.

mod sampler;

pub use sampler::{ProbeSampler, SampleReading};

use crate::config::request::Verbosity;
use crate::config::units::Point;

/// What the probe does after a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeRetract {
    /// Lift clear of the bed but stay deployed.
    #[default]
    Raise,
    /// Fully retract (stow) the probe.
    Stow,
}

impl ProbeRetract {
    /// Retract mode for the request's engage flag.
    #[inline]
    pub fn from_engage(engage: bool) -> Self {
        if engage {
            ProbeRetract::Stow
        } else {
            ProbeRetract::Raise
        }
    }
}

/// Physical Z-probe driver.
pub trait Probe {
    /// Move to `at` (probe coordinates), deploy if needed and probe the bed.
    ///
    /// Returns the trigger height, or `None` (or NaN) if the probe did not trigger.
    fn check_point(&mut self, at: Point, retract: ProbeRetract, verbosity: Verbosity)
        -> Option<f32>;

    /// Fully retract the probe.
    fn stow(&mut self);
}
