//! Serial console rendering of run events.

use core::fmt::{self, Write};

use crate::config::kinematics::PULL_IN_FACTOR;
use crate::config::request::Verbosity;
use crate::pattern::Turn;

use super::{Reporter, RunEvent};

/// Writes firmware-style text lines to any [`core::fmt::Write`] sink.
///
/// Output is gated by the run's verbosity. Errors and the final standard
/// deviation are always written. Write failures are ignored.
#[derive(Debug, Default)]
pub struct SerialReporter<W: Write> {
    out: W,
}

impl<W: Write> SerialReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Take the sink back.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, verbosity: Verbosity, event: &RunEvent) -> fmt::Result {
        let out = &mut self.out;
        match event {
            RunEvent::Rejected(e) => writeln!(out, "Error: {}", e),
            RunEvent::Started => {
                if verbosity.shows_summary() {
                    writeln!(out, "Z-Probe Repeatability Test")?;
                }
                Ok(())
            }
            RunEvent::Positioning => {
                if verbosity.shows_statistics() {
                    writeln!(out, "Positioning the probe...")?;
                }
                Ok(())
            }
            RunEvent::LegPlan(plan) => {
                if verbosity.shows_legs() {
                    let dir = match plan.turn {
                        Turn::CounterClockwise => "CCW",
                        Turn::Clockwise => "CW",
                    };
                    writeln!(
                        out,
                        "Starting radius: {:.3}   angle: {:.3} dir: {}",
                        plan.radius, plan.start.0, dir
                    )?;
                }
                Ok(())
            }
            RunEvent::LegMove { leg, z } => {
                if verbosity.shows_legs() {
                    // One line per scale step, as the steps were taken.
                    let mut step = leg.candidate;
                    for _ in 0..leg.waypoint.pull_ins {
                        step = step.scaled(PULL_IN_FACTOR);
                        writeln!(out, "Pulling point towards center:{:.3}, {:.3}", step.x, step.y)?;
                    }
                    let to = leg.waypoint.point;
                    writeln!(out, "Going to: X{:.3} Y{:.3} Z{:.3}", to.x, to.y, z)?;
                }
                Ok(())
            }
            RunEvent::Sample {
                index,
                total,
                z,
                stats,
            } => {
                if verbosity.shows_samples() {
                    write!(out, "{} of {}: z: {:.3}", index + 1, total, z)?;
                    if verbosity.shows_statistics() {
                        write!(
                            out,
                            " mean: {:.4} sigma: {:.6} min: {:.3} max: {:.3} range: {:.3}",
                            stats.mean,
                            stats.sigma,
                            stats.min,
                            stats.max,
                            stats.range()
                        )?;
                    }
                    writeln!(out)?;
                }
                Ok(())
            }
            RunEvent::ProbeFailed(failure) => writeln!(out, "Error: {}", failure),
            RunEvent::Finished(result) => {
                writeln!(out, "Finished!")?;
                if verbosity.shows_summary() {
                    writeln!(
                        out,
                        "Mean: {:.6} Min: {:.3} Max: {:.3} Range: {:.3}",
                        result.mean, result.min, result.max, result.range
                    )?;
                }
                writeln!(out, "Standard Deviation: {:.6}", result.sigma)
            }
        }
    }
}

impl<W: Write> Reporter for SerialReporter<W> {
    fn report(&mut self, verbosity: Verbosity, event: &RunEvent) {
        let _ = self.render(verbosity, event);
    }
}
