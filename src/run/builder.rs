//! Builder pattern for RepeatabilityTest.

use embedded_hal::delay::DelayNs;
use rand::{Rng, SeedableRng};

use crate::config::{validate_kinematics, validate_profile, Kinematics, MachineProfile};
use crate::error::{ConfigError, Error, Result};
use crate::machine::{Compensation, Machine};
use crate::probe::Probe;

use super::orchestrator::RepeatabilityTest;

/// Builder for creating RepeatabilityTest instances.
pub struct RepeatabilityTestBuilder<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    machine: Option<M>,
    probe: Option<P>,
    compensation: Option<C>,
    delay: Option<D>,
    rng: Option<G>,
    kinematics: Option<Kinematics>,
    settle_ms: u32,
}

impl<M, P, C, D, G> Default for RepeatabilityTestBuilder<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P, C, D, G> RepeatabilityTestBuilder<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            machine: None,
            probe: None,
            compensation: None,
            delay: None,
            rng: None,
            kinematics: None,
            settle_ms: 0,
        }
    }

    /// Set the motion system.
    pub fn machine(mut self, machine: M) -> Self {
        self.machine = Some(machine);
        self
    }

    /// Set the probe driver.
    pub fn probe(mut self, probe: P) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Set the bed-leveling compensation switch.
    ///
    /// Use [`NoCompensation`](crate::machine::NoCompensation) on machines
    /// without leveling.
    pub fn compensation(mut self, compensation: C) -> Self {
        self.compensation = Some(compensation);
        self
    }

    /// Set the delay provider used for the settle dwell.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the random source for leg patterns.
    pub fn rng(mut self, rng: G) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Set the kinematics strategy.
    pub fn kinematics(mut self, kinematics: Kinematics) -> Self {
        self.kinematics = Some(kinematics);
        self
    }

    /// Dwell after the last leg before probing, in milliseconds.
    pub fn settle_ms(mut self, ms: u32) -> Self {
        self.settle_ms = ms;
        self
    }

    /// Build the RepeatabilityTest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingComponent` naming the first collaborator
    /// that was not supplied, or the kinematics error if the strategy cannot
    /// produce a finite leg radius.
    pub fn build(self) -> Result<RepeatabilityTest<M, P, C, D, G>> {
        let machine = self.machine.ok_or(missing("machine"))?;
        let probe = self.probe.ok_or(missing("probe"))?;
        let compensation = self.compensation.ok_or(missing("compensation"))?;
        let delay = self.delay.ok_or(missing("delay"))?;
        let rng = self.rng.ok_or(missing("rng"))?;
        let kinematics = self.kinematics.ok_or(missing("kinematics"))?;
        validate_kinematics(&kinematics)?;

        Ok(RepeatabilityTest::new(
            machine,
            probe,
            compensation,
            delay,
            rng,
            kinematics,
            self.settle_ms,
        ))
    }
}

impl<M, P, C, D, G> RepeatabilityTestBuilder<M, P, C, D, G>
where
    M: Machine,
    P: Probe,
    C: Compensation,
    D: DelayNs,
    G: Rng + SeedableRng,
{
    /// Seed the random source. Equal seeds give equal leg patterns.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(G::seed_from_u64(seed));
        self
    }

    /// Configure from a machine profile.
    ///
    /// Selects the kinematics strategy and applies the settle dwell and the
    /// seed, if the profile has one.
    pub fn from_profile(mut self, profile: &MachineProfile) -> Result<Self> {
        self.kinematics = Some(validate_profile(profile)?);
        self.settle_ms = profile.settle_ms;
        if let Some(seed) = profile.seed {
            self = self.seed(seed);
        }
        Ok(self)
    }
}

fn missing(component: &'static str) -> Error {
    Error::Config(ConfigError::MissingComponent(component))
}
