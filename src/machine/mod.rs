//! Collaborators the repeatability test drives.
//!
//! The motion planner, probe driver, bed-leveling layer and status display live
//! outside this crate. They are reached only through the traits below so a run
//! can be exercised against fakes.

mod compensation;

pub use compensation::{CompensationSuspended, NoCompensation};

use crate::config::units::{Point, Position, ProbeOffset};

/// Geometry check for probe positions.
pub trait ProbeReach {
    /// Whether the probe can be brought to `at` (probe coordinates).
    fn is_reachable_by_probe(&self, at: Point) -> bool;
}

/// Motion system and machine geometry.
///
/// Every motion call blocks until the move has finished.
pub trait Machine: ProbeReach {
    /// Whether all axes have been homed.
    fn is_homed(&self) -> bool {
        true
    }

    /// Current nozzle position.
    fn current_position(&self) -> Position;

    /// Probe trigger point relative to the nozzle.
    fn probe_offset(&self) -> ProbeOffset;

    /// Move the nozzle to `to` and wait for the move to finish.
    fn move_to_blocking(&mut self, to: Point);

    /// Prepare feedrates and endstops for probing moves.
    fn setup_for_probe_move(&mut self) {}

    /// Undo [`Machine::setup_for_probe_move`].
    fn clean_up_after_probe_move(&mut self) {}

    /// Send the current position to the host.
    fn report_current_position(&mut self);
}

/// Bed-leveling compensation switch.
pub trait Compensation {
    /// Whether compensation is currently applied to moves.
    fn is_enabled(&self) -> bool;

    /// Turn compensation on or off.
    fn set_enabled(&mut self, enabled: bool);
}

/// Optional status line (LCD or similar). Purely informational.
pub trait StatusDisplay {
    /// Show "point n of total".
    fn show_progress(&mut self, point: u8, total: u8);

    /// Show the final standard deviation.
    fn show_deviation(&mut self, sigma: f32);
}
