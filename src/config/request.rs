//! Raw repeatability request options.

use serde::Deserialize;

/// Default number of probe readings.
pub const DEFAULT_SAMPLES: i32 = 10;
/// Default reporting detail.
pub const DEFAULT_VERBOSE: i32 = 1;

/// Reporting detail, 0 (quiet) to 4 (leg diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(u8);

impl Verbosity {
    /// Errors and the standard deviation only.
    pub const QUIET: Self = Self(0);
    /// Header and summary line.
    pub const SUMMARY: Self = Self(1);
    /// Every reading.
    pub const SAMPLES: Self = Self(2);
    /// Every reading with running statistics.
    pub const STATISTICS: Self = Self(3);
    /// Leg planning and moves (maximum detail).
    pub const LEGS: Self = Self(4);

    /// Create a verbosity level, `None` if outside 0-4.
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::LEGS.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the raw level.
    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Test header and final summary line.
    #[inline]
    pub fn shows_summary(self) -> bool {
        self >= Self::SUMMARY
    }

    /// One line per reading.
    #[inline]
    pub fn shows_samples(self) -> bool {
        self >= Self::SAMPLES
    }

    /// Running statistics on each reading line, positioning notice.
    #[inline]
    pub fn shows_statistics(self) -> bool {
        self >= Self::STATISTICS
    }

    /// Leg plans and intermediate moves.
    #[inline]
    pub fn shows_legs(self) -> bool {
        self >= Self::LEGS
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self::SUMMARY
    }
}

/// Options of a repeatability request as received from the command front end.
///
/// Values are kept wide and signed so that implausible input survives until
/// validation can name it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepeatabilityRequest {
    /// Number of probe readings (4-50, default 10).
    #[serde(default)]
    pub samples: Option<i32>,

    /// Reporting detail (0-4, default 1).
    #[serde(default)]
    pub verbose: Option<i32>,

    /// Sample X position; defaults to the current position plus probe offset.
    #[serde(default)]
    pub x: Option<f32>,

    /// Sample Y position; defaults to the current position plus probe offset.
    #[serde(default)]
    pub y: Option<f32>,

    /// Legs of movement before each reading (0-15).
    #[serde(default)]
    pub legs: Option<i32>,

    /// Stow the probe between every reading instead of only raising it.
    #[serde(default)]
    pub engage: bool,

    /// Trace a five-pointed star instead of a loose circular walk.
    #[serde(default)]
    pub schizoid: bool,
}

impl RepeatabilityRequest {
    /// Create a request with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of readings.
    pub fn samples(mut self, samples: i32) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Set the verbose level.
    pub fn verbose(mut self, level: i32) -> Self {
        self.verbose = Some(level);
        self
    }

    /// Set the sample location.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the number of legs.
    pub fn legs(mut self, legs: i32) -> Self {
        self.legs = Some(legs);
        self
    }

    /// Stow the probe between readings.
    pub fn engage(mut self, engage: bool) -> Self {
        self.engage = engage;
        self
    }

    /// Use the star pattern.
    pub fn schizoid(mut self, schizoid: bool) -> Self {
        self.schizoid = schizoid;
        self
    }

    /// Requested reporting detail, `None` if the level is outside 0-4.
    pub fn verbosity(&self) -> Option<Verbosity> {
        u8::try_from(self.verbose.unwrap_or(DEFAULT_VERBOSE))
            .ok()
            .and_then(Verbosity::new)
    }
}
