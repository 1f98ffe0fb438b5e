//! Configuration module for probe-repeatability.
//!
//! Provides request options, their validation into a [`TestConfiguration`],
//! and the machine profile that selects the kinematics strategy. Profiles and
//! requests can be loaded from TOML with the `std` feature.

pub mod kinematics;
#[cfg(feature = "std")]
mod loader;
mod profile;
pub mod request;
pub mod units;
mod validation;

pub use kinematics::{BedBounds, Kinematics, KinematicsKind, PointCorrection};
pub use profile::MachineProfile;
pub use request::{RepeatabilityRequest, Verbosity};
pub use validation::{
    validate_kinematics, validate_profile, validate_request, TestConfiguration, MAX_LEGS,
    MIN_SAMPLES, STAR_LEGS,
};

#[cfg(feature = "std")]
pub use loader::{load_profile, parse_profile, parse_request};

// Re-export unit types at config level
pub use units::{Degrees, Point, Position, ProbeOffset};
