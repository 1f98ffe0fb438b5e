//! Repeatability test against a simulated delta printer.
//!
//! Demonstrates loading a machine profile and a request from TOML, wiring the
//! collaborators through the builder and printing the serial console output.
//! The simulated probe triggers at a fixed height plus a little noise.

use probe_repeatability::{
    parse_profile, parse_request, Compensation, Machine, Point, Position, Probe, ProbeOffset,
    ProbeReach, ProbeRetract, RepeatabilityTest, RunOutcome, SerialReporter, StatusDisplay,
    Verbosity,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Delay provider that actually sleeps.
struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Delta printer with a 90 mm probe-reachable radius.
struct SimulatedDelta {
    position: Position,
    moves: usize,
}

impl ProbeReach for SimulatedDelta {
    fn is_reachable_by_probe(&self, at: Point) -> bool {
        at.norm() <= 90.0
    }
}

impl Machine for SimulatedDelta {
    fn current_position(&self) -> Position {
        self.position
    }

    fn probe_offset(&self) -> ProbeOffset {
        ProbeOffset::new(0.0, 18.0)
    }

    fn move_to_blocking(&mut self, to: Point) {
        self.position.x = to.x;
        self.position.y = to.y;
        self.moves += 1;
    }

    fn report_current_position(&mut self) {
        println!(
            "X:{:.2} Y:{:.2} Z:{:.2}",
            self.position.x, self.position.y, self.position.z
        );
    }
}

/// Probe with a few microns of trigger noise.
struct NoisyProbe {
    noise: SmallRng,
}

impl Probe for NoisyProbe {
    fn check_point(&mut self, _at: Point, _retract: ProbeRetract, _verbosity: Verbosity) -> Option<f32> {
        Some(0.25 + self.noise.gen_range(-0.004..0.004))
    }

    fn stow(&mut self) {
        println!("probe stowed");
    }
}

struct MeshLeveling {
    active: bool,
}

impl Compensation for MeshLeveling {
    fn is_enabled(&self) -> bool {
        self.active
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.active = enabled;
    }
}

struct StatusLine;

impl StatusDisplay for StatusLine {
    fn show_progress(&mut self, point: u8, total: u8) {
        eprintln!("[lcd] Probing point {}/{}", point, total);
    }

    fn show_deviation(&mut self, sigma: f32) {
        eprintln!("[lcd] Deviation: {:.6}", sigma);
    }
}

const PROFILE: &str = r#"
kinematics = "center_pivoted"
probe_radius = 90.0
settle_ms = 5
seed = 2024
"#;

const REQUEST: &str = r#"
samples = 8
verbose = 4
legs = 4
"#;

fn main() -> Result<(), probe_repeatability::Error> {
    println!("=== Probe Repeatability Simulation ===\n");

    let (profile, kinematics) = parse_profile(PROFILE)?;
    println!("Kinematics: {:?}", kinematics.kind());

    let request = parse_request(REQUEST)?;

    let mut test: RepeatabilityTest<_, _, _, _, SmallRng> = RepeatabilityTest::builder()
        .from_profile(&profile)?
        .machine(SimulatedDelta {
            position: Position::new(0.0, 0.0, 10.0),
            moves: 0,
        })
        .probe(NoisyProbe {
            noise: SmallRng::seed_from_u64(7),
        })
        .compensation(MeshLeveling { active: true })
        .delay(SleepDelay)
        .build()?;

    let mut console = SerialReporter::new(String::new());
    let outcome: RunOutcome = test.run_with_display(&request, &mut console, &mut StatusLine);
    print!("{}", console.into_inner());

    match outcome {
        RunOutcome::Measured(result) => {
            println!(
                "\n{} of {} readings, sigma {:.6}, {} leg moves",
                result.samples_taken,
                result.samples_requested,
                result.sigma,
                test.machine().moves
            );
        }
        RunOutcome::Rejected(e) => println!("\nrejected: {}", e),
    }
    println!("Mesh leveling restored: {}", test.compensation().is_enabled());

    Ok(())
}
