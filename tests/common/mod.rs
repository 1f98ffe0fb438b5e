//! Fake collaborators shared by the integration tests.
//!
//! Every fake writes into one shared journal so tests can check the order of
//! calls across the machine, the probe and the compensation switch.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;
use probe_repeatability::config::BedBounds;
use probe_repeatability::{
    Compensation, Machine, Point, Position, Probe, ProbeOffset, ProbeReach, ProbeRetract,
    RepeatabilityTest, Reporter, RunEvent, StatusDisplay, Verbosity,
};
use rand::rngs::SmallRng;

/// One collaborator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Setup,
    Move(Point),
    Cleanup,
    ReportPosition,
    Check(Point, ProbeRetract, Verbosity),
    Stow,
    Compensation(bool),
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn count(journal: &Journal, pred: impl Fn(&Call) -> bool) -> usize {
    journal.borrow().iter().filter(|c| pred(c)).count()
}

pub fn position_of(journal: &Journal, call: Call) -> usize {
    journal
        .borrow()
        .iter()
        .position(|c| *c == call)
        .unwrap_or_else(|| panic!("{:?} not in journal", call))
}

pub fn moves(journal: &Journal) -> Vec<Point> {
    journal
        .borrow()
        .iter()
        .filter_map(|c| match c {
            Call::Move(p) => Some(*p),
            _ => None,
        })
        .collect()
}

/// Area the probe can reach.
#[derive(Debug, Clone, Copy)]
pub enum Reach {
    Rect(BedBounds),
    Disc(f32),
}

impl Reach {
    fn contains(&self, p: Point) -> bool {
        match self {
            Reach::Rect(bed) => bed.contains(p),
            Reach::Disc(r) => p.norm() <= *r,
        }
    }
}

pub struct Bench {
    pub homed: bool,
    pub position: Position,
    pub offset: ProbeOffset,
    pub reach: Reach,
    pub journal: Journal,
}

impl Bench {
    /// Homed Cartesian machine with a 200 x 200 bed, nozzle at (100, 100, 5)
    /// and the probe at (-20, +10) from the nozzle.
    pub fn cartesian(journal: &Journal) -> Self {
        Self {
            homed: true,
            position: Position::new(100.0, 100.0, 5.0),
            offset: ProbeOffset::new(-20.0, 10.0),
            reach: Reach::Rect(bed()),
            journal: journal.clone(),
        }
    }

    /// Homed center-pivoted machine with the probe reaching `radius`.
    pub fn pivoted(journal: &Journal, radius: f32) -> Self {
        Self {
            homed: true,
            position: Position::new(0.0, 0.0, 5.0),
            offset: ProbeOffset::new(0.0, 0.0),
            reach: Reach::Disc(radius),
            journal: journal.clone(),
        }
    }
}

pub fn bed() -> BedBounds {
    BedBounds::new(0.0, 200.0, 0.0, 200.0)
}

impl ProbeReach for Bench {
    fn is_reachable_by_probe(&self, at: Point) -> bool {
        self.reach.contains(at)
    }
}

impl Machine for Bench {
    fn is_homed(&self) -> bool {
        self.homed
    }

    fn current_position(&self) -> Position {
        self.position
    }

    fn probe_offset(&self) -> ProbeOffset {
        self.offset
    }

    fn move_to_blocking(&mut self, to: Point) {
        self.position.x = to.x;
        self.position.y = to.y;
        self.journal.borrow_mut().push(Call::Move(to));
    }

    fn setup_for_probe_move(&mut self) {
        self.journal.borrow_mut().push(Call::Setup);
    }

    fn clean_up_after_probe_move(&mut self) {
        self.journal.borrow_mut().push(Call::Cleanup);
    }

    fn report_current_position(&mut self) {
        self.journal.borrow_mut().push(Call::ReportPosition);
    }
}

/// Probe returning scripted heights. Past the script it keeps returning the
/// last entry.
pub struct ScriptedProbe {
    readings: Vec<Option<f32>>,
    next: usize,
    journal: Journal,
}

impl ScriptedProbe {
    pub fn new(journal: &Journal, readings: &[Option<f32>]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
            journal: journal.clone(),
        }
    }

    pub fn steady(journal: &Journal, z: f32) -> Self {
        Self::new(journal, &[Some(z)])
    }

    pub fn checks(&self) -> usize {
        self.next
    }
}

impl Probe for ScriptedProbe {
    fn check_point(&mut self, at: Point, retract: ProbeRetract, verbosity: Verbosity) -> Option<f32> {
        self.journal
            .borrow_mut()
            .push(Call::Check(at, retract, verbosity));
        let i = self.next.min(self.readings.len() - 1);
        self.next += 1;
        self.readings[i]
    }

    fn stow(&mut self) {
        self.journal.borrow_mut().push(Call::Stow);
    }
}

pub struct Leveling {
    pub enabled: bool,
    journal: Journal,
}

impl Leveling {
    pub fn new(journal: &Journal, enabled: bool) -> Self {
        Self {
            enabled,
            journal: journal.clone(),
        }
    }
}

impl Compensation for Leveling {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.journal.borrow_mut().push(Call::Compensation(enabled));
    }
}

/// Records every event.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<(Verbosity, RunEvent)>,
}

impl Reporter for Recorder {
    fn report(&mut self, verbosity: Verbosity, event: &RunEvent) {
        self.events.push((verbosity, *event));
    }
}

#[derive(Default)]
pub struct Lcd {
    pub progress: Vec<(u8, u8)>,
    pub deviation: Option<f32>,
}

impl StatusDisplay for Lcd {
    fn show_progress(&mut self, point: u8, total: u8) {
        self.progress.push((point, total));
    }

    fn show_deviation(&mut self, sigma: f32) {
        self.deviation = Some(sigma);
    }
}

/// Delay that records every millisecond dwell instead of sleeping.
#[derive(Default)]
pub struct Stopwatch {
    pub dwells: Vec<u32>,
}

impl DelayNs for Stopwatch {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.dwells.push(ms);
    }
}

pub type BenchTest<D = NoopDelay> = RepeatabilityTest<Bench, ScriptedProbe, Leveling, D, SmallRng>;
