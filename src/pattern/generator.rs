//! Randomized leg waypoints around the sample target.

use rand::Rng;

use crate::config::kinematics::{Corrected, PointCorrection};
use crate::config::units::{Degrees, Point};
use crate::machine::ProbeReach;

/// Angular jump of the star pattern: skip one vertex of a regular pentagon.
pub const STAR_STEP: Degrees = Degrees(2.0 * 72.0);
/// Smallest random-walk increment.
pub const WALK_STEP_MIN: f32 = 25.0;
/// Random-walk increments are drawn below this.
pub const WALK_STEP_MAX: f32 = 45.0;

/// Direction of travel around the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Increasing angle.
    CounterClockwise,
    /// Decreasing angle.
    Clockwise,
}

impl Turn {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Turn::CounterClockwise => 1.0,
            Turn::Clockwise => -1.0,
        }
    }
}

/// Random parameters drawn once per reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegPlan {
    /// Circle radius.
    pub radius: f32,
    /// Angle before the first leg.
    pub start: Degrees,
    /// Direction of travel.
    pub turn: Turn,
}

/// One intermediate waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// One-based leg number.
    pub number: u8,
    /// Angle of this leg, in `[0, 360)`.
    pub angle: Degrees,
    /// Waypoint on the circle before correction.
    pub candidate: Point,
    /// Waypoint to move to.
    pub waypoint: Corrected,
}

/// Leg waypoints for a single reading.
///
/// Yields `legs - 1` waypoints, then is exhausted. A fresh pattern is drawn for
/// every reading.
pub struct LegPattern<'a, K: PointCorrection, G: Rng> {
    kinematics: &'a K,
    rng: &'a mut G,
    plan: LegPlan,
    center: Point,
    angle: Degrees,
    schizoid: bool,
    emitted: u8,
    total: u8,
}

impl<'a, K: PointCorrection, G: Rng> LegPattern<'a, K, G> {
    /// Draw a new pattern around `center` (nozzle coordinates).
    pub fn new(kinematics: &'a K, rng: &'a mut G, center: Point, legs: u8, schizoid: bool) -> Self {
        let turn = if rng.gen::<bool>() {
            Turn::Clockwise
        } else {
            Turn::CounterClockwise
        };
        let start = Degrees(rng.gen_range(0.0..Degrees::TURN.0));
        let (low, high) = kinematics.radius_range();
        let radius = rng.gen_range(low..=high);

        debug!("leg plan: radius {} angle {} sign {}", radius, start.0, turn.sign());

        Self {
            kinematics,
            rng,
            plan: LegPlan {
                radius,
                start,
                turn,
            },
            center,
            angle: start,
            schizoid,
            emitted: 0,
            total: legs.saturating_sub(1),
        }
    }

    /// Parameters drawn for this pattern.
    #[inline]
    pub fn plan(&self) -> LegPlan {
        self.plan
    }

    /// Waypoints not yet produced.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.total - self.emitted
    }

    /// Produce the next waypoint, corrected against `reach`.
    pub fn next_leg<R: ProbeReach + ?Sized>(&mut self, reach: &R) -> Option<Leg> {
        if self.emitted == self.total {
            return None;
        }

        let step = if self.schizoid {
            STAR_STEP
        } else {
            Degrees(self.rng.gen_range(WALK_STEP_MIN..WALK_STEP_MAX))
        };
        self.angle = Degrees(self.angle.0 + self.plan.turn.sign() * step.0).wrapped();

        let candidate = self.center.on_circle(self.plan.radius, self.angle);
        let waypoint = self.kinematics.correct(candidate, reach);
        self.emitted += 1;

        Some(Leg {
            number: self.emitted,
            angle: self.angle,
            candidate,
            waypoint,
        })
    }
}
