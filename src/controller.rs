// --- File: controller.rs ---
use crate::simulation::GridSimulation;
use rand::Rng;
use std::time::{Duration, Instant};
use winit::keyboard::KeyCode;

/// External triggers the owning loop reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyS | KeyCode::Space => Some(Command::TogglePause),
            KeyCode::KeyR => Some(Command::Reset),
            KeyCode::KeyQ | KeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Whether the owning loop should keep going after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Rate limiter for generation updates, driven by a monotonic clock.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval: Duration,
    last_update: Option<Instant>,
}

impl FramePacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_update: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_update {
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
            None => true,
        }
    }

    /// Earliest instant at which the next update may run, if one has run before.
    /// `None` as well when that instant is past what `Instant` can represent.
    pub fn next_due(&self) -> Option<Instant> {
        self.last_update
            .and_then(|last| last.checked_add(self.min_interval))
    }

    pub fn mark_updated(&mut self, now: Instant) {
        self.last_update = Some(now);
    }
}

pub struct Controller {
    state: RunState,
    pacer: FramePacer,
}

impl Controller {
    pub fn new(min_update_interval: Duration) -> Self {
        Self {
            state: RunState::Running,
            pacer: FramePacer::new(min_update_interval),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn apply<R: Rng>(&mut self, command: Command, simulation: &mut GridSimulation<R>) -> Signal {
        match command {
            Command::TogglePause => {
                self.state = match self.state {
                    RunState::Running => RunState::Paused,
                    RunState::Paused => RunState::Running,
                };
                log::info!(
                    "Simulation {}",
                    if self.is_paused() { "paused" } else { "resumed" }
                );
                Signal::Continue
            }
            Command::Reset => {
                simulation.reset();
                log::info!(
                    "Board reseeded, {} cells alive",
                    simulation.population()
                );
                Signal::Continue
            }
            Command::Quit => {
                log::info!("Quit requested at generation {}", simulation.generation());
                Signal::Stop
            }
        }
    }

    /// Advances one generation if running and the pacer allows it.
    /// Returns whether the board changed.
    pub fn tick<R: Rng>(&mut self, simulation: &mut GridSimulation<R>, now: Instant) -> bool {
        if self.is_paused() || !self.pacer.is_due(now) {
            return false;
        }
        simulation.advance();
        self.pacer.mark_updated(now);
        true
    }

    /// When the loop should wake up next; `None` means wait for input.
    pub fn next_wake(&self) -> Option<Instant> {
        match self.state {
            RunState::Paused => None,
            RunState::Running if self.pacer.last_update.is_none() => Some(Instant::now()),
            RunState::Running => self.pacer.next_due(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn blinker() -> GridSimulation<StdRng> {
        let mut sim = GridSimulation::with_rng(10, 10, StdRng::seed_from_u64(1)).unwrap();
        for c in 3..=5 {
            sim.set_cell(4, c, Cell::Alive).unwrap();
        }
        sim
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key(KeyCode::KeyS), Some(Command::TogglePause));
        assert_eq!(Command::from_key(KeyCode::Space), Some(Command::TogglePause));
        assert_eq!(Command::from_key(KeyCode::KeyR), Some(Command::Reset));
        assert_eq!(Command::from_key(KeyCode::KeyQ), Some(Command::Quit));
        assert_eq!(Command::from_key(KeyCode::Escape), Some(Command::Quit));
        assert_eq!(Command::from_key(KeyCode::KeyX), None);
    }

    #[test]
    fn pacer_is_due_before_first_update() {
        let pacer = FramePacer::new(INTERVAL);
        assert!(pacer.is_due(Instant::now()));
        assert_eq!(pacer.next_due(), None);
    }

    #[test]
    fn pacer_enforces_minimum_interval() {
        let mut pacer = FramePacer::new(INTERVAL);
        let t0 = Instant::now();
        pacer.mark_updated(t0);
        assert!(!pacer.is_due(t0 + Duration::from_millis(99)));
        assert!(pacer.is_due(t0 + INTERVAL));
        assert!(pacer.is_due(t0 + Duration::from_millis(250)));
        assert_eq!(pacer.next_due(), Some(t0 + INTERVAL));
    }

    #[test]
    fn unreachable_deadline_waits_for_input() {
        let mut controller = Controller::new(Duration::MAX);
        let mut sim = blinker();
        let t0 = Instant::now();
        assert!(controller.next_wake().is_some());
        assert!(controller.tick(&mut sim, t0));
        assert!(!controller.tick(&mut sim, t0 + Duration::from_secs(3600)));
        assert_eq!(controller.pacer.next_due(), None);
        assert_eq!(controller.next_wake(), None);
    }

    #[test]
    fn tick_advances_at_most_once_per_interval() {
        let mut controller = Controller::new(INTERVAL);
        let mut sim = blinker();
        let t0 = Instant::now();

        assert!(controller.tick(&mut sim, t0));
        assert!(!controller.tick(&mut sim, t0 + Duration::from_millis(10)));
        assert_eq!(sim.generation(), 1);
        assert!(controller.tick(&mut sim, t0 + INTERVAL));
        assert_eq!(sim.generation(), 2);
        assert_eq!(controller.next_wake(), Some(t0 + INTERVAL + INTERVAL));
    }

    #[test]
    fn paused_controller_skips_advance() {
        let mut controller = Controller::new(Duration::ZERO);
        let mut sim = blinker();
        assert_eq!(controller.apply(Command::TogglePause, &mut sim), Signal::Continue);
        assert_eq!(controller.state(), RunState::Paused);
        assert_eq!(controller.next_wake(), None);

        let active = sim.active_index();
        assert!(!controller.tick(&mut sim, Instant::now()));
        assert_eq!(sim.active_index(), active);
        assert_eq!(sim.generation(), 0);

        controller.apply(Command::TogglePause, &mut sim);
        assert!(controller.tick(&mut sim, Instant::now()));
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn reset_keeps_run_state_and_reseeds() {
        let mut controller = Controller::new(Duration::ZERO);
        let mut sim = blinker();
        controller.tick(&mut sim, Instant::now());
        controller.apply(Command::TogglePause, &mut sim);

        assert_eq!(controller.apply(Command::Reset, &mut sim), Signal::Continue);
        assert!(controller.is_paused());
        assert_eq!(sim.active_index(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut controller = Controller::new(INTERVAL);
        let mut sim = blinker();
        assert_eq!(controller.apply(Command::Quit, &mut sim), Signal::Stop);
    }
}
// --- End of File: controller.rs ---
