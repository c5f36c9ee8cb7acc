use rand::Rng;
use tracing::{info, trace};

use crate::domain::{Algorithm, Cell, CellSet, Pattern, Rule, StepStats, default_rule, generation};

use super::Config;

/// Whether ticks advance the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    /// The only transition: Paused <-> Running
    pub const fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    pub const fn label(self) -> &'static str {
        match self {
            RunState::Paused => "Paused",
            RunState::Running => "Running",
        }
    }
}

/// Simulation orchestrates the automaton.
///
/// It is the single owner of the live [`CellSet`]. Readers borrow it through
/// [`Simulation::cells`]; a generation step builds the successor from the
/// current set and replaces it only once complete.
pub struct Simulation {
    cells: CellSet,
    pub rule: Box<dyn Rule>,
    pub algorithm: Algorithm,
    pub run_state: RunState,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    min_updates_per_second: f32,
    max_updates_per_second: f32,
    random_density: f64,
    pub last_step: Option<StepStats>,
    pub last_evolution_time_ms: f32,  // Evolution performance metric
    pub last_render_time_ms: f32,     // Render performance metric
    /// Index of pattern pending placement (None = normal mode)
    pub pending_pattern_index: Option<usize>,
}

impl Simulation {
    /// Create an empty, paused simulation
    pub fn new(config: &Config) -> Self {
        let min_updates_per_second = config.min_updates_per_second;
        let max_updates_per_second = config.max_updates_per_second.max(min_updates_per_second);
        Self {
            cells: CellSet::new(),
            rule: default_rule(),
            algorithm: Algorithm::default(),
            run_state: RunState::Paused,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: bound_speed(
                config.updates_per_second(),
                min_updates_per_second,
                max_updates_per_second,
            ),
            min_updates_per_second,
            max_updates_per_second,
            random_density: config.random_density,
            last_step: None,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            pending_pattern_index: None,
        }
    }

    /// Start from an existing set of live cells (builder pattern)
    pub fn with_cells(mut self, cells: CellSet) -> Self {
        self.cells = cells;
        self
    }

    /// Set run state (builder pattern)
    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    /// Current live cells
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    /// Set the cellular automaton rule
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        info!(rule = rule.name(), "rule changed");
        self.rule = rule;
    }

    /// Set the generation algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        info!(algorithm = algorithm.name(), "algorithm changed");
        self.algorithm = algorithm;
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.run_state = self.run_state.toggled();
        self.update_timer = 0.0;
        info!(state = self.run_state.label(), generation = self.generation, "run state toggled");
        self
    }

    /// Flip one cell between alive and dead
    pub fn toggle_cell(&mut self, cell: Cell) {
        let alive = self.cells.toggle(cell);
        trace!(x = cell.x, y = cell.y, alive, "cell toggled");
    }

    /// Stamp a pattern centred on `centre`
    pub fn place_pattern(&mut self, pattern: &Pattern, centre: Cell) {
        pattern.place_on(&mut self.cells, centre);
        info!(pattern = pattern.name, x = centre.x, y = centre.y, "pattern placed");
    }

    /// Clear all cells and reset generation counter
    pub fn clear(mut self) -> Self {
        self.cells.clear();
        self.generation = 0;
        self.run_state = RunState::Paused;
        self.last_step = None;
        info!("cleared");
        self
    }

    /// Replace the cells with random soup over the inclusive rectangle `min..=max`
    pub fn randomize(self, min: Cell, max: Cell) -> Self {
        self.randomize_with(&mut rand::rng(), min, max)
    }

    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R, min: Cell, max: Cell) -> Self {
        self.cells = CellSet::random_region(rng, min, max, self.random_density);
        self.generation = 0;
        self.run_state = RunState::Paused;
        self.last_step = None;
        info!(population = self.cells.len(), "randomized");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = bound_speed(
            self.updates_per_second + delta,
            self.min_updates_per_second,
            self.max_updates_per_second,
        );
        self
    }

    /// Advance exactly one generation, regardless of run state
    pub fn step_once(mut self) -> Self {
        self.advance();
        self
    }

    /// Update simulation by one frame
    /// Advances a generation once enough time has accumulated while running
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            // Carry the remainder, but never more than one interval
            self.update_timer = (self.update_timer - update_interval).min(update_interval);
        }

        self
    }

    fn advance(&mut self) {
        let start = std::time::Instant::now();

        let (next, stats) = generation::step(&self.cells, self.rule.as_ref(), self.algorithm);
        self.cells = next;

        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.last_step = Some(stats);
        self.generation += 1;
    }
}

/// Keep a speed within `[min, max]`; NaN falls back to `min`
fn bound_speed(speed: f32, min: f32, max: f32) -> f32 {
    speed.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeedsRule, presets};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker() -> CellSet {
        [(0, 0), (1, 0), (2, 0)].into_iter().map(Cell::from).collect()
    }

    fn simulation() -> Simulation {
        Simulation::new(&Config::default())
    }

    #[test]
    fn test_starts_empty_and_paused() {
        let sim = simulation();
        assert!(sim.cells().is_empty());
        assert_eq!(sim.run_state, RunState::Paused);
        assert_eq!(sim.generation, 0);
    }

    #[test]
    fn test_run_state_toggle() {
        assert_eq!(RunState::Paused.toggled(), RunState::Running);
        assert_eq!(RunState::Running.toggled(), RunState::Paused);

        let sim = simulation().toggle_running();
        assert!(sim.is_running());
        assert!(!sim.toggle_running().is_running());
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let sim = simulation().with_cells(blinker()).tick(10.0);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.cells(), &blinker());
    }

    #[test]
    fn test_running_tick_waits_for_interval() {
        let sim = simulation()
            .with_cells(blinker())
            .with_run_state(RunState::Running)
            .tick(0.01);
        assert_eq!(sim.generation, 0);

        let sim = sim.tick(0.05);
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.cells().len(), 3);
        assert!(sim.cells().contains(Cell::new(1, -1)));
        // Time past the interval carries into the next tick
        assert!((sim.update_timer - 0.01).abs() < 1e-4);
    }

    #[test]
    fn test_tick_keeps_rate_when_frames_jitter() {
        // 4 gen/s with frames of 3/16 s: 1.5 s of frames is 6 generations
        let config = Config {
            tick_interval: 0.25,
            ..Config::default()
        };
        let sim = Simulation::new(&config)
            .with_cells(blinker())
            .with_run_state(RunState::Running);

        let sim = (0..8).fold(sim, |s, _| s.tick(0.1875));
        assert_eq!(sim.generation, 6);
    }

    #[test]
    fn test_long_frame_advances_once() {
        let sim = simulation()
            .with_cells(blinker())
            .with_run_state(RunState::Running)
            .tick(10.0);
        assert_eq!(sim.generation, 1);
        assert!(sim.update_timer <= 1.0 / sim.updates_per_second);
    }

    #[test]
    fn test_starting_speed_within_bounds() {
        let slow = Config {
            tick_interval: 5.0,
            ..Config::default()
        };
        let sim = Simulation::new(&slow);
        assert_eq!(sim.updates_per_second, 1.0);
        // Slower stays at the floor instead of speeding up
        assert_eq!(sim.adjust_speed(-1.0).updates_per_second, 1.0);

        let fast = Config {
            tick_interval: 0.001,
            ..Config::default()
        };
        let sim = Simulation::new(&fast);
        assert_eq!(sim.updates_per_second, 60.0);
        assert_eq!(sim.adjust_speed(1.0).updates_per_second, 60.0);
    }

    #[test]
    fn test_inverted_speed_bounds_do_not_panic() {
        let config = Config {
            min_updates_per_second: 60.0,
            max_updates_per_second: 1.0,
            ..Config::default()
        };
        let sim = Simulation::new(&config).adjust_speed(1.0);
        assert_eq!(sim.updates_per_second, 60.0);
    }

    #[test]
    fn test_step_once_ignores_run_state() {
        let sim = simulation().with_cells(blinker()).step_once().step_once();
        assert_eq!(sim.generation, 2);
        assert_eq!(sim.cells(), &blinker());
        assert_eq!(
            sim.last_step,
            Some(StepStats { candidates: 15, population: 3 })
        );
    }

    #[test]
    fn test_toggle_cell_twice_is_identity() {
        let mut sim = simulation().with_cells(blinker());
        sim.toggle_cell(Cell::new(-8, 3));
        assert_eq!(sim.cells().len(), 4);
        sim.toggle_cell(Cell::new(-8, 3));
        assert_eq!(sim.cells(), &blinker());
    }

    #[test]
    fn test_clear_resets() {
        let sim = simulation()
            .with_cells(blinker())
            .with_run_state(RunState::Running)
            .step_once()
            .clear();
        assert!(sim.cells().is_empty());
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.run_state, RunState::Paused);
        assert_eq!(sim.last_step, None);
    }

    #[test]
    fn test_randomize_within_region() {
        let mut rng = StdRng::seed_from_u64(5);
        let (min, max) = (Cell::new(-20, -10), Cell::new(20, 10));
        let sim = simulation().with_cells(blinker()).randomize_with(&mut rng, min, max);

        assert!(!sim.cells().is_empty());
        assert_eq!(sim.cells().within(min, max).count(), sim.cells().len());
    }

    #[test]
    fn test_adjust_speed_clamped() {
        let sim = simulation().adjust_speed(1000.0);
        assert_eq!(sim.updates_per_second, 60.0);
        let sim = sim.adjust_speed(-1000.0);
        assert_eq!(sim.updates_per_second, 1.0);
    }

    #[test]
    fn test_rule_change_applies_to_next_step() {
        let mut sim = simulation().with_cells(blinker());
        sim.set_rule(Box::new(SeedsRule));
        let sim = sim.step_once();
        // Under Seeds every live cell dies
        assert!(!sim.cells().contains(Cell::new(1, 0)));
    }

    #[test]
    fn test_parallel_algorithm_same_result() {
        let mut sim = simulation();
        sim.place_pattern(&presets::acorn(), Cell::new(0, 0));
        let mut parallel = simulation().with_cells(sim.cells().clone());
        parallel.set_algorithm(Algorithm::SparseParallel);

        let sim = (0..20).fold(sim, |s, _| s.step_once());
        let parallel = (0..20).fold(parallel, |s, _| s.step_once());
        assert_eq!(sim.cells(), parallel.cells());
    }
}
