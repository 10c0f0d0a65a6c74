use crate::constants::MAX_TICK_BACKLOG;

/// Fixed-period heartbeat driving the transition progress.
///
/// Wall time is accumulated and converted into whole ticks; the remainder
/// carries over to the next call. A stopped clock drops incoming time.
#[derive(Debug, Clone)]
pub struct ProgressClock {
    interval: f32,
    accumulator: f32,
    max_backlog: f32,
    running: bool,
}

impl ProgressClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            max_backlog: MAX_TICK_BACKLOG.max(interval),
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `dt` seconds and returns how many ticks elapsed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        // A non-positive interval would never drain the accumulator.
        if !self.running || !dt.is_finite() || dt <= 0.0 || !(self.interval > 0.0) {
            return 0;
        }

        // Clamp the backlog so a stalled host does not replay a burst of ticks.
        self.accumulator = (self.accumulator + dt).min(self.max_backlog);

        let mut ticks = 0;
        // Tolerate float drift so exact multiples of the interval tick on time.
        while self.accumulator + self.interval * 1e-3 >= self.interval {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        self.accumulator = self.accumulator.max(0.0);
        ticks
    }
}
