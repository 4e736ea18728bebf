// scheduler.rs - Decides when the next generation is due
//
// The grid knows nothing about time. The frame loop polls the timer and
// calls `Grid::step` whenever it fires; stopping the timer is all it takes
// to stop the simulation.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StepTimer {
    interval  : Duration,
    running   : bool,
    last_step : Option<Instant>,
}

impl StepTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, running: false, last_step: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Takes effect from the next poll, measured from the last step.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The first poll after starting fires straight away.
    pub fn start(&mut self) {
        self.running = true;
        self.last_step = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.running { self.stop() } else { self.start() }
        self.running
    }

    /// Whether a step is due at `now`. At most one step fires per poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        match self.last_step {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_step = Some(now);
                true
            }
        }
    }

    /// How long until the next step is due, or `None` while stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_step {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = StepTimer::new(MS * 100);
        let t0 = Instant::now();

        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + MS * 1000));
        assert_eq!(timer.time_until_next(t0), None);
    }

    #[test]
    fn fires_immediately_then_every_interval() {
        let mut timer = StepTimer::new(MS * 100);
        let t0 = Instant::now();
        timer.start();

        assert!(timer.poll(t0));
        assert!(!timer.poll(t0 + MS * 50));
        assert_eq!(timer.time_until_next(t0 + MS * 50), Some(MS * 50));
        assert!(timer.poll(t0 + MS * 100));
        assert!(!timer.poll(t0 + MS * 150));
        assert!(timer.poll(t0 + MS * 250));
    }

    #[test]
    fn zero_interval_fires_every_poll() {
        let mut timer = StepTimer::new(Duration::ZERO);
        let t0 = Instant::now();
        timer.start();

        assert!(timer.poll(t0));
        assert!(timer.poll(t0));
        assert_eq!(timer.time_until_next(t0), Some(Duration::ZERO));
    }

    #[test]
    fn stop_cancels_pending_steps() {
        let mut timer = StepTimer::new(MS * 10);
        let t0 = Instant::now();
        timer.start();
        assert!(timer.poll(t0));

        timer.stop();
        assert!(!timer.poll(t0 + MS * 500));
    }

    #[test]
    fn toggle_restarts_immediately() {
        let mut timer = StepTimer::new(MS * 100);
        let t0 = Instant::now();

        assert!(timer.toggle());
        assert!(timer.poll(t0));
        assert!(!timer.toggle());
        assert!(timer.toggle());
        assert!(timer.poll(t0 + MS));
    }

    #[test]
    fn interval_change_applies_to_pending_step() {
        let mut timer = StepTimer::new(MS * 1000);
        let t0 = Instant::now();
        timer.start();
        assert!(timer.poll(t0));

        timer.set_interval(MS * 20);
        assert_eq!(timer.interval(), MS * 20);
        assert!(timer.poll(t0 + MS * 20));
    }
}
