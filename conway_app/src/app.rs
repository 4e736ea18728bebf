// app.rs - State owned by the Game of Life window

use std::time::Duration;

use conway::Grid;
use egui::Color32;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_INTERVAL_SECS;
use crate::history::CycleDetector;
use crate::input::{Brush, Camera};
use crate::patterns::{self, PATTERNS};
use crate::scheduler::StepTimer;

pub struct GameOfLife {
    pub grid             : Grid,
    pub timer            : StepTimer,
    pub camera           : Option<Camera>,    // Placed once the canvas size is known
    pub brush            : Brush,
    pub generation       : u64,
    pub repeating_since  : Option<u64>,  // First generation seen to repeat an earlier one
    pub live_color       : Color32,
    pub dead_color       : Color32,
    pub selected_pattern : usize,
    cycles               : CycleDetector,
    random_seed          : u32,
}

impl GameOfLife {
    pub fn new(width: i32, height: i32) -> conway::Result<Self> {
        Ok(Self {
            grid             : Grid::new(width, height)?,
            timer            : StepTimer::new(Duration::from_secs_f32(DEFAULT_INTERVAL_SECS)),
            camera           : None,
            brush            : Brush::default(),
            generation       : 0,
            repeating_since  : None,
            live_color       : Color32::WHITE,
            dead_color       : Color32::BLACK,
            selected_pattern : 0,
            cycles           : CycleDetector::default(),
            random_seed      : 0,
        })
    }

    /// Advances one generation and notes when the grid starts repeating.
    /// Only the Start/Stop control stops the timer.
    pub fn update_generation(&mut self) {
        self.grid.step();
        self.generation = self.generation.wrapping_add(1);
        debug!(generation = self.generation, population = self.grid.population(), "step");

        if self.cycles.observe(&self.grid) && self.repeating_since.is_none() {
            info!(generation = self.generation, "grid is repeating");
            self.repeating_since = Some(self.generation);
        }
    }

    pub fn toggle_running(&mut self) {
        let running = self.timer.toggle();
        info!(running, "simulation toggled");
    }

    pub fn set_interval_secs(&mut self, secs: f32) {
        self.timer.set_interval(Duration::from_secs_f32(secs.max(0.0)));
    }

    /// Paints with the brush at a grid position; off-grid positions do nothing.
    pub fn paint(&mut self, x: i32, y: i32) {
        match self.brush.paint(&mut self.grid, x, y) {
            Ok(true) => {
                self.cycles.reset();
                self.repeating_since = None;
            }
            Ok(false) => {}
            Err(err) => warn!(%err, "edit rejected"),
        }
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.restart_history();
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        match pattern.apply(&mut self.grid) {
            Ok(placed) => info!(pattern = pattern.name, placed, "pattern applied"),
            Err(err) => warn!(%err, pattern = pattern.name, "pattern not applied"),
        }
        self.restart_history();
    }

    pub fn apply_random_pattern(&mut self) {
        let (width, height) = (self.grid.width() as i32, self.grid.height() as i32);
        match patterns::random_grid(width, height, self.random_seed) {
            Ok(grid) => {
                info!(seed = self.random_seed, population = grid.population(), "random fill");
                self.grid = grid;
            }
            Err(err) => warn!(%err, "random fill failed"),
        }
        self.random_seed = self.random_seed.wrapping_add(1);
        self.restart_history();
    }

    fn restart_history(&mut self) {
        self.generation = 0;
        self.repeating_since = None;
        self.cycles.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn generation_counts_steps() {
        let mut app = GameOfLife::new(8, 8).unwrap();
        app.apply_selected_pattern();
        app.update_generation();
        app.update_generation();
        assert_eq!(app.generation, 2);

        app.clear_grid();
        assert_eq!(app.generation, 0);
        assert_eq!(app.grid.population(), 0);
    }

    #[test]
    fn repeating_state_is_reported_without_stopping() {
        let mut app = GameOfLife::new(6, 6).unwrap();
        app.selected_pattern = PATTERNS.iter().position(|p| p.name == "Blinker").unwrap();
        app.apply_selected_pattern();
        app.toggle_running();

        assert!(app.timer.poll(Instant::now()));
        app.update_generation();
        app.update_generation();
        assert_eq!(app.repeating_since, None);
        app.update_generation();
        assert_eq!(app.repeating_since, Some(3));
        app.update_generation();
        assert_eq!(app.repeating_since, Some(3));
        assert!(app.timer.is_running());
    }

    #[test]
    fn drawing_on_idle_running_grid_evolves() {
        let mut app = GameOfLife::new(10, 10).unwrap();
        app.toggle_running();

        let t0 = Instant::now();
        for tick in 0..3u32 {
            assert!(app.timer.poll(t0 + app.timer.interval() * tick));
            app.update_generation();
        }
        assert!(app.timer.is_running());
        assert!(app.repeating_since.is_some());

        for x in 3..6 {
            app.paint(x, 4);
        }
        app.brush.release();
        assert_eq!(app.repeating_since, None);

        assert!(app.timer.poll(t0 + app.timer.interval() * 3));
        app.update_generation();
        assert_eq!(app.grid.get(4, 3), Ok(true));
        assert_eq!(app.grid.get(3, 4), Ok(false));
    }

    #[test]
    fn block_keeps_running() {
        let mut app = GameOfLife::new(6, 6).unwrap();
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            app.grid.set(x, y, true).unwrap();
        }
        app.toggle_running();
        app.update_generation();
        app.update_generation();

        assert!(app.timer.is_running());
        assert_eq!(app.repeating_since, Some(2));
    }

    #[test]
    fn generation_counter_wraps() {
        let mut app = GameOfLife::new(3, 3).unwrap();
        app.generation = u64::MAX;
        app.update_generation();
        assert_eq!(app.generation, 0);
    }

    #[test]
    fn random_fill_changes_with_each_use() {
        let mut app = GameOfLife::new(20, 20).unwrap();
        app.apply_random_pattern();
        let first = app.grid.clone();
        app.apply_random_pattern();
        assert_ne!(app.grid, first);
        assert_eq!((app.grid.width(), app.grid.height()), (20, 20));
    }

    #[test]
    fn negative_interval_is_clamped() {
        let mut app = GameOfLife::new(3, 3).unwrap();
        app.set_interval_secs(-1.0);
        assert_eq!(app.timer.interval(), Duration::ZERO);
    }
}
