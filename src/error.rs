//! Error types for probe-repeatability.
//!
//! Request rejections, configuration problems and statistics overflow share one
//! error type. Probe failures are not errors: a failed reading ends the sample
//! loop and is carried in the run outcome instead.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all probe-repeatability operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Request options rejected before any motion
    Request(RequestError),
    /// Machine profile parsing, validation or builder error
    Config(ConfigError),
    /// Running statistics error
    Statistics(StatisticsError),
}

/// A request option that failed its range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Verbose level outside 0-4
    Verbose(i32),
    /// Sample count outside 4-50
    SampleCount(i32),
    /// Number of legs outside 0-15
    Legs(i32),
}

impl Parameter {
    /// Stable option name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Parameter::Verbose(_) => "verbose-level",
            Parameter::SampleCount(_) => "sample-count",
            Parameter::Legs(_) => "legs",
        }
    }

    /// The rejected value.
    pub const fn value(self) -> i32 {
        match self {
            Parameter::Verbose(v) | Parameter::SampleCount(v) | Parameter::Legs(v) => v,
        }
    }
}

/// Reasons a repeatability request is rejected.
///
/// Every variant is raised before the machine moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestError {
    /// An option is outside its plausible range
    InvalidParameter(Parameter),
    /// Target position cannot be reached by the probe
    OutOfBounds {
        /// Requested X in machine coordinates
        x: f32,
        /// Requested Y in machine coordinates
        y: f32,
    },
    /// Axes have not been homed
    NotHomed,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Bed bounds are empty on one axis (min must be < max)
    InvalidBedBounds {
        /// Axis name ("x" or "y")
        axis: char,
        /// Minimum bound
        min: f32,
        /// Maximum bound
        max: f32,
    },
    /// Probe-reachable radius must be finite and > 0
    InvalidProbeRadius(f32),
    /// A required collaborator was not supplied to the builder
    MissingComponent(&'static str),
    /// The profile lacks a section its kinematics needs
    MissingSection(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Running statistics errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsError {
    /// More samples than the accumulator can hold
    CapacityExceeded {
        /// Fixed capacity of the sample store
        capacity: usize,
    },
}

/// Which probe reading failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    /// The initial deploy-and-probe at the target
    Deployment,
    /// A reading inside the sample loop (zero-based index)
    Sample(u8),
}

/// A probe reading that returned no height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeFailure {
    /// Where in the run the failure happened.
    pub stage: ProbeStage,
}

impl ProbeFailure {
    /// Failure of the initial deployment probe.
    pub const fn deployment() -> Self {
        Self {
            stage: ProbeStage::Deployment,
        }
    }

    /// Failure of the sample with the given zero-based index.
    pub const fn sample(index: u8) -> Self {
        Self {
            stage: ProbeStage::Sample(index),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(e) => write!(f, "Request error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Statistics(e) => write!(f, "Statistics error: {}", e),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Verbose(v) => write!(f, "Verbose Level {} not plausible (0-4)", v),
            Parameter::SampleCount(v) => write!(f, "Sample size {} not plausible (4-50)", v),
            Parameter::Legs(v) => {
                write!(f, "Number of legs in movement {} not plausible (0-15)", v)
            }
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidParameter(p) => write!(f, "{}", p),
            RequestError::OutOfBounds { x, y } => {
                write!(f, "(X{}, Y{}) out of bounds", x, y)
            }
            RequestError::NotHomed => write!(f, "Home all axes first"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidBedBounds { axis, min, max } => {
                write!(f, "Invalid bed bounds on {}: min ({}) must be < max ({})", axis, min, max)
            }
            ConfigError::InvalidProbeRadius(r) => {
                write!(f, "Invalid probe radius: {}. Must be > 0", r)
            }
            ConfigError::MissingComponent(name) => write!(f, "{} is required", name),
            ConfigError::MissingSection(name) => {
                write!(f, "Missing '{}' for the selected kinematics", name)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticsError::CapacityExceeded { capacity } => {
                write!(f, "Sample store full ({} samples)", capacity)
            }
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            ProbeStage::Deployment => write!(f, "Probe failed during deployment"),
            ProbeStage::Sample(n) => write!(f, "Probe failed on sample {}", n + 1),
        }
    }
}

// Conversion impls
impl From<RequestError> for Error {
    fn from(e: RequestError) -> Self {
        Error::Request(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<StatisticsError> for Error {
    fn from(e: StatisticsError) -> Self {
        Error::Statistics(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for RequestError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for StatisticsError {}
