//! Unit types for positions and angles.
//!
//! Provides type-safe representations of bed coordinates and leg angles so
//! that machine coordinates and probe-relative coordinates cannot be mixed up.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angles beyond this magnitude are pre-reduced before the explicit wrap loop.
///
/// Below it, repeated subtraction of 360 is exact in `f32`.
const EXACT_WRAP_LIMIT: f32 = 1.0e6;

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// A full turn.
    pub const TURN: Self = Self(360.0);

    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Wrap into `[0, 360)` by repeatedly adding or subtracting a full turn.
    ///
    /// The result is congruent to the input modulo 360. Non-finite angles wrap to 0.
    pub fn wrapped(self) -> Self {
        let mut angle = self.0;
        if !angle.is_finite() {
            return Self(0.0);
        }
        if libm::fabsf(angle) > EXACT_WRAP_LIMIT {
            angle = libm::fmodf(angle, Self::TURN.0);
        }
        loop {
            if angle >= Self::TURN.0 {
                angle -= Self::TURN.0;
            } else if angle < 0.0 {
                angle += Self::TURN.0;
            } else {
                return Self(angle);
            }
        }
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A point on the bed plane in machine units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in the direction of `angle`.
    #[inline]
    pub fn on_circle(self, radius: f32, angle: Degrees) -> Self {
        let rad = angle.to_radians();
        Self {
            x: self.x + libm::cosf(rad) * radius,
            y: self.y + libm::sinf(rad) * radius,
        }
    }

    /// Scale both coordinates toward the origin.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Distance from the origin.
    #[inline]
    pub fn norm(self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y)
    }
}

/// Offset of the probe trigger point from the nozzle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ProbeOffset {
    /// X offset.
    pub dx: f32,
    /// Y offset.
    pub dy: f32,
}

impl ProbeOffset {
    /// Create a new offset.
    #[inline]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Add<ProbeOffset> for Point {
    type Output = Point;

    /// Nozzle position to probe position.
    fn add(self, rhs: ProbeOffset) -> Self::Output {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<ProbeOffset> for Point {
    type Output = Point;

    /// Probe position to nozzle position.
    fn sub(self, rhs: ProbeOffset) -> Self::Output {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

/// Full machine position as reported by the motion system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the bed plane.
    #[inline]
    pub const fn xy(self) -> Point {
        Point::new(self.x, self.y)
    }
}
