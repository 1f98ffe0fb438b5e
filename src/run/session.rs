//! Mechanical phase of a run, with type-state safety.
//!
//! A session exists from the moment compensation is suspended until the
//! probe is stowed and the position reported. Every path through it ends in
//! [`Session::finish`], which is where the cleanup happens.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use rand::Rng;

use crate::config::kinematics::Kinematics;
use crate::config::TestConfiguration;
use crate::error::ProbeFailure;
use crate::machine::{Compensation, CompensationSuspended, Machine, StatusDisplay};
use crate::pattern::LegPattern;
use crate::probe::{Probe, ProbeSampler};
use crate::report::{Reporter, RunEvent};
use crate::stats::RunningStatistics;

use super::outcome::TestResult;
use super::state::{Finalizing, Positioning, RunPhase, Sampling};

/// Borrowed collaborators for one session.
pub(crate) struct Rig<'a, M, P, C, D, G> {
    pub machine: &'a mut M,
    pub probe: &'a mut P,
    pub compensation: &'a mut C,
    pub delay: &'a mut D,
    pub rng: &'a mut G,
    pub kinematics: &'a Kinematics,
    pub settle_ms: u32,
    pub reporter: &'a mut dyn Reporter,
    pub display: Option<&'a mut dyn StatusDisplay>,
}

/// A run past validation.
///
/// Generic over:
/// - `M`: motion system (must implement `Machine`)
/// - `P`: probe driver (must implement `Probe`)
/// - `C`: leveling compensation (must implement `Compensation`)
/// - `D`: settle delay provider (must implement `DelayNs`)
/// - `G`: random source (must implement `rand::Rng`)
/// - `S`: phase marker
pub struct Session<'a, M, P, C, D, G, S>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
    S: RunPhase,
{
    machine: &'a mut M,
    sampler: ProbeSampler<'a, P>,
    delay: &'a mut D,
    rng: &'a mut G,
    kinematics: &'a Kinematics,
    settle_ms: u32,
    reporter: &'a mut dyn Reporter,
    display: Option<&'a mut dyn StatusDisplay>,

    /// Restores compensation when dropped.
    compensation: CompensationSuspended<'a, C>,

    config: TestConfiguration,
    stats: RunningStatistics,
    failure: Option<ProbeFailure>,

    _phase: PhantomData<S>,
}

impl<'a, M, P, C, D, G, S> Session<'a, M, P, C, D, G, S>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
    S: RunPhase,
{
    /// Get the current phase name.
    #[inline]
    pub fn phase_name(&self) -> &'static str {
        S::name()
    }

    /// The validated configuration.
    #[inline]
    pub fn config(&self) -> &TestConfiguration {
        &self.config
    }

    fn emit(&mut self, event: RunEvent) {
        self.reporter.report(self.config.verbosity(), &event);
    }

    fn into_phase<T: RunPhase>(self) -> Session<'a, M, P, C, D, G, T> {
        debug!("run phase {} -> {}", S::name(), T::name());
        Session {
            machine: self.machine,
            sampler: self.sampler,
            delay: self.delay,
            rng: self.rng,
            kinematics: self.kinematics,
            settle_ms: self.settle_ms,
            reporter: self.reporter,
            display: self.display,
            compensation: self.compensation,
            config: self.config,
            stats: self.stats,
            failure: self.failure,
            _phase: PhantomData,
        }
    }
}

impl<'a, M, P, C, D, G> Session<'a, M, P, C, D, G, Positioning>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    /// Suspend compensation and prepare the machine for probing moves.
    pub(crate) fn begin(rig: Rig<'a, M, P, C, D, G>, config: TestConfiguration) -> Self {
        let compensation = CompensationSuspended::new(rig.compensation);
        rig.machine.setup_for_probe_move();

        let mut session = Self {
            machine: rig.machine,
            sampler: ProbeSampler::new(rig.probe, config.target(), config.retract()),
            delay: rig.delay,
            rng: rig.rng,
            kinematics: rig.kinematics,
            settle_ms: rig.settle_ms,
            reporter: rig.reporter,
            display: rig.display,
            compensation,
            config,
            stats: RunningStatistics::new(),
            failure: None,
            _phase: PhantomData,
        };
        session.emit(RunEvent::Positioning);
        session
    }

    /// Move to the target, deploy the probe and take a first reading.
    ///
    /// On failure the session skips sampling and goes straight to cleanup.
    pub fn deploy(
        mut self,
    ) -> core::result::Result<
        Session<'a, M, P, C, D, G, Sampling>,
        Session<'a, M, P, C, D, G, Finalizing>,
    > {
        match self.sampler.deploy() {
            Ok(z) => {
                trace!("deployment reading {}", z);
                Ok(self.into_phase())
            }
            Err(failure) => {
                self.failure = Some(failure);
                self.emit(RunEvent::ProbeFailed(failure));
                Err(self.into_phase())
            }
        }
    }
}

impl<'a, M, P, C, D, G> Session<'a, M, P, C, D, G, Sampling>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    /// Take every configured reading, stopping at the first probe failure.
    pub fn sample_all(mut self) -> Session<'a, M, P, C, D, G, Finalizing> {
        let total = self.config.samples();
        for index in 0..total {
            if let Some(display) = self.display.as_mut() {
                display.show_progress(index + 1, total);
            }

            if self.config.legs() > 0 {
                self.walk_legs();
            }

            let reading = self.sampler.sample(index);
            let z = match reading.outcome {
                Ok(z) => z,
                Err(failure) => {
                    self.failure = Some(failure);
                    self.emit(RunEvent::ProbeFailed(failure));
                    break;
                }
            };

            let stats = match self.stats.update(z) {
                Ok(stats) => stats,
                Err(_) => {
                    warn!("statistics full after {} readings", index);
                    break;
                }
            };
            self.emit(RunEvent::Sample {
                index,
                total,
                z,
                stats,
            });
        }
        self.into_phase()
    }

    /// Walk a freshly drawn leg pattern, then settle.
    fn walk_legs(&mut self) {
        let center = self.config.target() - self.machine.probe_offset();
        let verbosity = self.config.verbosity();
        let mut pattern = LegPattern::new(
            self.kinematics,
            &mut *self.rng,
            center,
            self.config.legs(),
            self.config.schizoid(),
        );
        self.reporter
            .report(verbosity, &RunEvent::LegPlan(pattern.plan()));

        while let Some(leg) = pattern.next_leg(&*self.machine) {
            let z = self.machine.current_position().z;
            self.reporter
                .report(verbosity, &RunEvent::LegMove { leg, z });
            self.machine.move_to_blocking(leg.waypoint.point);
        }

        if self.settle_ms > 0 {
            self.delay.delay_ms(self.settle_ms);
        }
    }
}

impl<'a, M, P, C, D, G> Session<'a, M, P, C, D, G, Finalizing>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    /// Stow the probe, restore compensation and report the position.
    ///
    /// Runs on every path once the session exists. The statistics summary is
    /// only emitted when every configured reading succeeded.
    pub fn finish(self) -> TestResult {
        let Session {
            machine,
            mut sampler,
            reporter,
            display,
            compensation,
            config,
            stats,
            failure,
            ..
        } = self;

        sampler.stow();

        let result = TestResult::from_snapshot(stats.snapshot(), config.samples(), failure);
        if result.success {
            info!("repeatability sigma {}", result.sigma);
            reporter.report(config.verbosity(), &RunEvent::Finished(result));
            if let Some(display) = display {
                display.show_deviation(result.sigma);
            }
        }

        machine.clean_up_after_probe_move();
        drop(compensation);
        machine.report_current_position();

        result
    }
}
