//! Probe sampler: deployment probe, per-sample readings and final stow.

use crate::config::request::Verbosity;
use crate::config::units::Point;
use crate::error::ProbeFailure;

use super::{Probe, ProbeRetract};

/// One reading of the sample loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleReading {
    /// Zero-based sample index.
    pub index: u8,
    /// Trigger height, or the failure.
    pub outcome: Result<f32, ProbeFailure>,
}

impl SampleReading {
    /// Height if the reading succeeded.
    #[inline]
    pub fn z(&self) -> Option<f32> {
        self.outcome.ok()
    }
}

/// Reads the probe at a fixed target.
pub struct ProbeSampler<'a, P: Probe> {
    probe: &'a mut P,
    target: Point,
    retract: ProbeRetract,
}

impl<'a, P: Probe> ProbeSampler<'a, P> {
    /// Create a sampler for `target` using `retract` between readings.
    pub fn new(probe: &'a mut P, target: Point, retract: ProbeRetract) -> Self {
        Self {
            probe,
            target,
            retract,
        }
    }

    /// Sample location.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Move to the target, deploy and take a first reading at full detail.
    pub fn deploy(&mut self) -> Result<f32, ProbeFailure> {
        let z = self
            .probe
            .check_point(self.target, self.retract, Verbosity::LEGS);
        valid_height(z).ok_or_else(|| {
            warn!("deployment probe failed");
            ProbeFailure::deployment()
        })
    }

    /// Take reading `index` with minimal detail.
    pub fn sample(&mut self, index: u8) -> SampleReading {
        let z = self
            .probe
            .check_point(self.target, self.retract, Verbosity::QUIET);
        let outcome = valid_height(z).ok_or_else(|| {
            warn!("probe failed on sample {}", index);
            ProbeFailure::sample(index)
        });
        SampleReading { index, outcome }
    }

    /// Stow the probe.
    pub fn stow(&mut self) {
        self.probe.stow();
    }
}

fn valid_height(z: Option<f32>) -> Option<f32> {
    z.filter(|z| !z.is_nan())
}
