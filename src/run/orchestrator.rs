//! Repeatability test entry point.

use embedded_hal::delay::DelayNs;
use rand::Rng;

use crate::config::{validate_request, Kinematics, RepeatabilityRequest, Verbosity};
use crate::error::RequestError;
use crate::machine::{Compensation, Machine, StatusDisplay};
use crate::probe::Probe;
use crate::report::{Reporter, RunEvent};

use super::builder::RepeatabilityTestBuilder;
use super::outcome::RunOutcome;
use super::session::{Rig, Session};

/// Probe repeatability test bound to one machine.
///
/// Owns its collaborators between runs; each call to [`run`](Self::run)
/// borrows them for the duration of that run only.
pub struct RepeatabilityTest<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    machine: M,
    probe: P,
    compensation: C,
    delay: D,
    rng: G,
    kinematics: Kinematics,
    settle_ms: u32,
}

impl<M, P, C, D, G> RepeatabilityTest<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    /// Create a builder for configuring a test.
    pub fn builder() -> RepeatabilityTestBuilder<M, P, C, D, G> {
        RepeatabilityTestBuilder::new()
    }

    pub(crate) fn new(
        machine: M,
        probe: P,
        compensation: C,
        delay: D,
        rng: G,
        kinematics: Kinematics,
        settle_ms: u32,
    ) -> Self {
        Self {
            machine,
            probe,
            compensation,
            delay,
            rng,
            kinematics,
            settle_ms,
        }
    }

    /// Run a test without a status display.
    ///
    /// Never fails: a rejected request is reported and returned as
    /// [`RunOutcome::Rejected`] without any motion.
    pub fn run(&mut self, request: &RepeatabilityRequest, reporter: &mut dyn Reporter) -> RunOutcome {
        self.execute(request, reporter, None)
    }

    /// Run a test, showing progress and the final deviation on `display`.
    pub fn run_with_display(
        &mut self,
        request: &RepeatabilityRequest,
        reporter: &mut dyn Reporter,
        display: &mut dyn StatusDisplay,
    ) -> RunOutcome {
        self.execute(request, reporter, Some(display))
    }

    fn execute<'a>(
        &'a mut self,
        request: &RepeatabilityRequest,
        reporter: &'a mut dyn Reporter,
        display: Option<&'a mut dyn StatusDisplay>,
    ) -> RunOutcome {
        let config = match validate_request(request, &self.machine) {
            Ok(config) => config,
            Err(e) => {
                warn!("repeatability request rejected");
                // The header is written once the verbose level is known.
                let verbosity = match request.verbosity() {
                    Some(v) if e != RequestError::NotHomed => {
                        reporter.report(v, &RunEvent::Started);
                        v
                    }
                    _ => Verbosity::default(),
                };
                reporter.report(verbosity, &RunEvent::Rejected(e));
                return RunOutcome::Rejected(e);
            }
        };

        info!(
            "repeatability test: {} samples, {} legs",
            config.samples(),
            config.legs()
        );
        reporter.report(config.verbosity(), &RunEvent::Started);

        let rig = Rig {
            machine: &mut self.machine,
            probe: &mut self.probe,
            compensation: &mut self.compensation,
            delay: &mut self.delay,
            rng: &mut self.rng,
            kinematics: &self.kinematics,
            settle_ms: self.settle_ms,
            reporter,
            display,
        };

        let finalizing = match Session::begin(rig, config).deploy() {
            Ok(sampling) => sampling.sample_all(),
            Err(finalizing) => finalizing,
        };
        RunOutcome::Measured(finalizing.finish())
    }

    /// Kinematics strategy in use.
    #[inline]
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// Settle dwell in milliseconds.
    #[inline]
    pub fn settle_ms(&self) -> u32 {
        self.settle_ms
    }

    /// Get a reference to the machine.
    #[inline]
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Get a mutable reference to the machine.
    #[inline]
    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }

    /// Get a reference to the probe.
    #[inline]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Get a reference to the compensation switch.
    #[inline]
    pub fn compensation(&self) -> &C {
        &self.compensation
    }

    /// Get a reference to the delay provider.
    #[inline]
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Release the collaborators.
    pub fn into_parts(self) -> (M, P, C, D, G) {
        (
            self.machine,
            self.probe,
            self.compensation,
            self.delay,
            self.rng,
        )
    }
}
