//! Machine profile - geometry and run settings from TOML.

use serde::Deserialize;

use super::kinematics::{BedBounds, KinematicsKind};

/// Static machine description used to build a repeatability test.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MachineProfile {
    /// Geometry family.
    #[serde(default)]
    pub kinematics: KinematicsKind,

    /// Bed area (required for Cartesian machines).
    #[serde(default)]
    pub bed: Option<BedBounds>,

    /// Probe-reachable radius (required for center-pivoted machines).
    #[serde(default)]
    pub probe_radius: Option<f32>,

    /// Dwell after the last leg move before each reading (milliseconds).
    #[serde(default)]
    pub settle_ms: u32,

    /// Seed for the leg pattern generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MachineProfile {
    /// Cartesian profile with the given bed.
    pub fn cartesian(bed: BedBounds) -> Self {
        Self {
            kinematics: KinematicsKind::Cartesian,
            bed: Some(bed),
            ..Self::default()
        }
    }

    /// Center-pivoted profile with the given probe-reachable radius.
    pub fn center_pivoted(probe_radius: f32) -> Self {
        Self {
            kinematics: KinematicsKind::CenterPivoted,
            probe_radius: Some(probe_radius),
            ..Self::default()
        }
    }

    /// Set the settle dwell.
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Set the pattern seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
