//! # probe-repeatability
//!
//! Z-probe repeatability test for machines with a bed probe, with embedded-hal
//! 1.0 support.
//!
//! ## Features
//!
//! - **Randomized legs**: Optional circular walk or five-pointed star between readings
//! - **Kinematics-aware**: Waypoints clamped to the bed or pulled towards the center
//! - **Running statistics**: Mean, min, max and population sigma after every reading
//! - **no_std compatible**: Core library works without standard library
//! - **Type-state safety**: Compile-time run phase verification
//! - **Guaranteed restore**: Leveling compensation is restored on every exit path
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use probe_repeatability::{RepeatabilityRequest, RepeatabilityTest, SerialReporter};
//!
//! // Load the machine profile from TOML
//! let (profile, _) = probe_repeatability::load_profile("printer.toml")?;
//!
//! let mut test = RepeatabilityTest::builder()
//!     .from_profile(&profile)?
//!     .machine(machine)
//!     .probe(probe)
//!     .compensation(leveling)
//!     .delay(delay)
//!     .seed(42)
//!     .build()?;
//!
//! let mut console = SerialReporter::new(String::new());
//! let outcome = test.run(&RepeatabilityRequest::new().samples(10).legs(4), &mut console);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log;

// Core modules
pub mod config;
pub mod error;
pub mod machine;
pub mod pattern;
pub mod probe;
pub mod report;
pub mod run;
pub mod stats;

// Re-exports for ergonomic API
pub use config::{
    validate_profile, validate_request, BedBounds, Kinematics, KinematicsKind, MachineProfile,
    RepeatabilityRequest, TestConfiguration, Verbosity,
};
pub use error::{Error, ProbeFailure, Result};
pub use machine::{Compensation, Machine, NoCompensation, ProbeReach, StatusDisplay};
pub use probe::{Probe, ProbeRetract};
pub use report::{NullReporter, Reporter, RunEvent, SerialReporter};
pub use run::{state, RepeatabilityTest, RunOutcome, TestResult};
pub use stats::{RunningStatistics, StatsSnapshot};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_profile, parse_profile, parse_request};

// Unit types
pub use config::units::{Degrees, Point, Position, ProbeOffset};
