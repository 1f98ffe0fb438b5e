//! Run phase type-state markers.
//!
//! Uses Rust's type system to enforce the order Positioning, Sampling,
//! Finalizing at compile time. Validation happens before a session exists and
//! the finished run is represented by its outcome.

/// Moving to the target and deploying the probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Positioning;

/// Taking readings.
#[derive(Debug, Clone, Copy)]
pub struct Sampling;

/// Stowing, restoring and reporting.
#[derive(Debug, Clone, Copy)]
pub struct Finalizing;

/// Trait for run phases.
pub trait RunPhase: private::Sealed {
    /// Get the phase name as a static string.
    fn name() -> &'static str;
}

impl RunPhase for Positioning {
    fn name() -> &'static str {
        "Positioning"
    }
}

impl RunPhase for Sampling {
    fn name() -> &'static str {
        "Sampling"
    }
}

impl RunPhase for Finalizing {
    fn name() -> &'static str {
        "Finalizing"
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Positioning {}
    impl Sealed for super::Sampling {}
    impl Sealed for super::Finalizing {}
}
