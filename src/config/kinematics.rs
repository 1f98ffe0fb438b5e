//! Kinematics strategies for leg waypoints.
//!
//! The machine geometry decides two things about a leg pattern: how large the
//! circle may be, and how a waypoint that left the reachable area is brought
//! back. Both are chosen once, when the profile is loaded.

use serde::Deserialize;

use crate::machine::ProbeReach;

use super::units::Point;

/// Scale factor applied per pull-in step on center-pivoted machines.
pub const PULL_IN_FACTOR: f32 = 0.8;

/// Upper bound on pull-in steps for a single waypoint.
pub const MAX_PULL_IN_STEPS: u8 = 32;

/// Smallest leg radius on Cartesian machines (machine units).
pub const CARTESIAN_MIN_RADIUS: f32 = 5.0;

/// Geometry family of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KinematicsKind {
    /// Independent, box-bounded X and Y axes.
    #[default]
    Cartesian,
    /// Reachable area is a disc around a central pivot (delta and similar).
    CenterPivoted,
}

/// Printable bed area.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BedBounds {
    /// Minimum X.
    pub min_x: f32,
    /// Maximum X.
    pub max_x: f32,
    /// Minimum Y.
    pub min_y: f32,
    /// Maximum Y.
    pub max_y: f32,
}

impl BedBounds {
    /// Create new bounds.
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Check if bounds are valid: finite, min < max and a finite extent on
    /// both axes.
    pub fn is_valid(&self) -> bool {
        axis_is_valid(self.min_x, self.max_x) && axis_is_valid(self.min_y, self.max_y)
    }

    /// Bed width along X.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Bed depth along Y.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Check if a point lies on the bed.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Clamp each coordinate independently onto the bed.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.max(self.min_x).min(self.max_x),
            p.y.max(self.min_y).min(self.max_y),
        )
    }
}

/// One axis of a bed: finite ends, `min < max`, and a width that does not
/// overflow.
pub(crate) fn axis_is_valid(min: f32, max: f32) -> bool {
    min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()
}

/// A waypoint after correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corrected {
    /// Point to move to.
    pub point: Point,
    /// Number of pull-in steps applied (center-pivoted only).
    pub pull_ins: u8,
    /// Whether the point had to be changed at all.
    pub adjusted: bool,
}

impl Corrected {
    fn unchanged(point: Point) -> Self {
        Self {
            point,
            pull_ins: 0,
            adjusted: false,
        }
    }
}

/// Candidate-position correction contract.
pub trait PointCorrection {
    /// Range `[low, high]` the leg radius is drawn from.
    fn radius_range(&self) -> (f32, f32);

    /// Bring `candidate` back into the reachable area.
    fn correct<R: ProbeReach + ?Sized>(&self, candidate: Point, reach: &R) -> Corrected;
}

/// Box-bounded machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian {
    /// Bed area waypoints are clamped to.
    pub bed: BedBounds,
}

impl PointCorrection for Cartesian {
    fn radius_range(&self) -> (f32, f32) {
        let high = 0.125 * self.bed.width().min(self.bed.height());
        (CARTESIAN_MIN_RADIUS, high.max(CARTESIAN_MIN_RADIUS))
    }

    fn correct<R: ProbeReach + ?Sized>(&self, candidate: Point, _reach: &R) -> Corrected {
        let point = self.bed.clamp(candidate);
        Corrected {
            point,
            pull_ins: 0,
            adjusted: point != candidate,
        }
    }
}

/// Machine whose reachable area is a disc around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPivoted {
    /// Radius the probe can reach.
    pub probe_radius: f32,
}

impl PointCorrection for CenterPivoted {
    fn radius_range(&self) -> (f32, f32) {
        (0.125 * self.probe_radius, self.probe_radius / 3.0)
    }

    fn correct<R: ProbeReach + ?Sized>(&self, candidate: Point, reach: &R) -> Corrected {
        let mut point = candidate;
        let mut pull_ins = 0;
        while !reach.is_reachable_by_probe(point) {
            if pull_ins == MAX_PULL_IN_STEPS {
                warn!("pull-in limit reached at ({}, {})", point.x, point.y);
                break;
            }
            point = point.scaled(PULL_IN_FACTOR);
            pull_ins += 1;
            trace!("pulling point towards center: ({}, {})", point.x, point.y);
        }
        if pull_ins == 0 {
            return Corrected::unchanged(point);
        }
        Corrected {
            point,
            pull_ins,
            adjusted: true,
        }
    }
}

/// Kinematics strategy selected by the machine profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kinematics {
    /// See [`Cartesian`].
    Cartesian(Cartesian),
    /// See [`CenterPivoted`].
    CenterPivoted(CenterPivoted),
}

impl Kinematics {
    /// Cartesian machine with the given bed.
    pub const fn cartesian(bed: BedBounds) -> Self {
        Kinematics::Cartesian(Cartesian { bed })
    }

    /// Center-pivoted machine with the given probe-reachable radius.
    pub const fn center_pivoted(probe_radius: f32) -> Self {
        Kinematics::CenterPivoted(CenterPivoted { probe_radius })
    }

    /// Geometry family.
    pub fn kind(&self) -> KinematicsKind {
        match self {
            Kinematics::Cartesian(_) => KinematicsKind::Cartesian,
            Kinematics::CenterPivoted(_) => KinematicsKind::CenterPivoted,
        }
    }
}

impl PointCorrection for Kinematics {
    fn radius_range(&self) -> (f32, f32) {
        match self {
            Kinematics::Cartesian(k) => k.radius_range(),
            Kinematics::CenterPivoted(k) => k.radius_range(),
        }
    }

    fn correct<R: ProbeReach + ?Sized>(&self, candidate: Point, reach: &R) -> Corrected {
        match self {
            Kinematics::Cartesian(k) => k.correct(candidate, reach),
            Kinematics::CenterPivoted(k) => k.correct(candidate, reach),
        }
    }
}
