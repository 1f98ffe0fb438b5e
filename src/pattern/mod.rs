//! Movement pattern generation.
//!
//! Before each reading the carriage walks a few legs around the target so the
//! probe is measured after real mechanical settling rather than from rest.

mod generator;

pub use generator::{Leg, LegPattern, LegPlan, Turn, STAR_STEP, WALK_STEP_MAX, WALK_STEP_MIN};
