//! Request and profile validation.

use crate::error::{ConfigError, Error, Parameter, RequestError, Result};
use crate::machine::Machine;
use crate::probe::ProbeRetract;
use crate::stats::MAX_SAMPLES;

use super::kinematics::{axis_is_valid, Kinematics, KinematicsKind};
use super::request::{RepeatabilityRequest, Verbosity, DEFAULT_SAMPLES, DEFAULT_VERBOSE};
use super::units::Point;
use super::MachineProfile;

/// Fewest readings that give a meaningful deviation.
pub const MIN_SAMPLES: i32 = 4;
/// Most legs of movement before a reading.
pub const MAX_LEGS: i32 = 15;
/// Legs used by the star pattern when none are requested.
pub const STAR_LEGS: u8 = 7;

/// Validated options of one run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestConfiguration {
    samples: u8,
    verbosity: Verbosity,
    legs: u8,
    schizoid: bool,
    retract: ProbeRetract,
    target: Point,
}

impl TestConfiguration {
    /// Number of readings (4-50).
    #[inline]
    pub fn samples(&self) -> u8 {
        self.samples
    }

    /// Reporting detail.
    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Legs of movement before each reading (0 or 2-15).
    #[inline]
    pub fn legs(&self) -> u8 {
        self.legs
    }

    /// Star pattern instead of circular walk.
    #[inline]
    pub fn schizoid(&self) -> bool {
        self.schizoid
    }

    /// Probe behaviour between readings.
    #[inline]
    pub fn retract(&self) -> ProbeRetract {
        self.retract
    }

    /// Sample location in probe coordinates.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }
}

/// Validate a request against the machine's current state.
///
/// Gates, in order: homed axes, verbose level, sample count, target
/// reachability, number of legs. The machine is only queried, never moved.
///
/// # Errors
///
/// Returns the first gate that fails.
pub fn validate_request<M: Machine + ?Sized>(
    request: &RepeatabilityRequest,
    machine: &M,
) -> core::result::Result<TestConfiguration, RequestError> {
    if !machine.is_homed() {
        return Err(RequestError::NotHomed);
    }

    let verbosity = request.verbosity().ok_or(RequestError::InvalidParameter(
        Parameter::Verbose(request.verbose.unwrap_or(DEFAULT_VERBOSE)),
    ))?;

    let samples = request.samples.unwrap_or(DEFAULT_SAMPLES);
    if !(MIN_SAMPLES..=MAX_SAMPLES as i32).contains(&samples) {
        return Err(RequestError::InvalidParameter(Parameter::SampleCount(samples)));
    }

    let default_target = machine.current_position().xy() + machine.probe_offset();
    let target = Point::new(
        request.x.unwrap_or(default_target.x),
        request.y.unwrap_or(default_target.y),
    );
    if !machine.is_reachable_by_probe(target) {
        return Err(RequestError::OutOfBounds {
            x: target.x,
            y: target.y,
        });
    }

    let legs = match request.legs {
        Some(legs) if !(0..=MAX_LEGS).contains(&legs) => {
            return Err(RequestError::InvalidParameter(Parameter::Legs(legs)));
        }
        // A single leg only returns to where it started.
        Some(1) => 2,
        Some(legs) => legs as u8,
        None if request.schizoid => STAR_LEGS,
        None => 0,
    };

    Ok(TestConfiguration {
        samples: samples as u8,
        verbosity,
        legs,
        schizoid: request.schizoid,
        retract: ProbeRetract::from_engage(request.engage),
        target,
    })
}

/// Validate a machine profile and select its kinematics strategy.
///
/// Checks:
/// - The section the kinematics needs is present
/// - Bed bounds are finite and non-empty on both axes, with a finite extent
/// - Probe radius is finite and positive
pub fn validate_profile(profile: &MachineProfile) -> Result<Kinematics> {
    let kinematics = match profile.kinematics {
        KinematicsKind::Cartesian => Kinematics::cartesian(
            profile
                .bed
                .ok_or(Error::Config(ConfigError::MissingSection("bed")))?,
        ),
        KinematicsKind::CenterPivoted => Kinematics::center_pivoted(
            profile
                .probe_radius
                .ok_or(Error::Config(ConfigError::MissingSection("probe_radius")))?,
        ),
    };
    validate_kinematics(&kinematics)?;
    Ok(kinematics)
}

/// Check that a kinematics strategy yields a finite leg radius range.
pub fn validate_kinematics(kinematics: &Kinematics) -> Result<()> {
    match kinematics {
        Kinematics::Cartesian(k) => {
            let bed = k.bed;
            if !axis_is_valid(bed.min_x, bed.max_x) {
                return Err(Error::Config(ConfigError::InvalidBedBounds {
                    axis: 'x',
                    min: bed.min_x,
                    max: bed.max_x,
                }));
            }
            if !axis_is_valid(bed.min_y, bed.max_y) {
                return Err(Error::Config(ConfigError::InvalidBedBounds {
                    axis: 'y',
                    min: bed.min_y,
                    max: bed.max_y,
                }));
            }
        }
        Kinematics::CenterPivoted(k) => {
            let radius = k.probe_radius;
            if !radius.is_finite() || radius <= 0.0 {
                return Err(Error::Config(ConfigError::InvalidProbeRadius(radius)));
            }
        }
    }
    Ok(())
}
