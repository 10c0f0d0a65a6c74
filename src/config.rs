use std::fmt;

use crate::constants::*;

/// Geometry and timing of the transition engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Base radius of the peephole circle.
    pub radius: f32,
    /// Progress value at the grow/shrink midpoint; a full cycle is `[0, 2 * limit]`.
    pub limit: f32,
    /// Wall-clock seconds for one full transition.
    pub duration: f32,
    /// Progress clock period in seconds.
    pub tick_interval: f32,
    pub max_x_offset: f32,
    pub max_y_offset: f32,
    /// Sub-progress at which the disc turns into a half-disc.
    pub arc_switch: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radius: RADIUS,
            limit: LIMIT,
            duration: DEFAULT_DURATION,
            tick_interval: TICK_INTERVAL,
            max_x_offset: MAX_X_OFFSET,
            max_y_offset: MAX_Y_OFFSET,
            arc_switch: ARC_SWITCH,
        }
    }
}

impl EngineConfig {
    /// Sets the transition duration. Non-finite or non-positive values keep the default.
    pub fn with_duration(mut self, duration: f32) -> Self {
        if duration.is_finite() && duration > 0.0 {
            self.duration = duration;
        } else {
            log::warn!(
                "invalid transition duration {}, using {}s",
                duration, DEFAULT_DURATION
            );
            self.duration = DEFAULT_DURATION;
        }
        self
    }

    /// Replaces non-finite or non-positive timing values with their defaults.
    pub fn validated(mut self) -> Self {
        fn positive(name: &str, value: f32, default: f32) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("invalid {} {}, using {}", name, value, default);
                default
            }
        }

        self.duration = positive("transition duration", self.duration, DEFAULT_DURATION);
        self.tick_interval = positive("tick interval", self.tick_interval, TICK_INTERVAL);
        self.limit = positive("progress limit", self.limit, LIMIT);
        self
    }

    /// Progress increment per clock tick.
    #[inline]
    pub fn step(&self) -> f32 {
        2.0 * self.limit / (self.duration / self.tick_interval)
    }

    /// Progress at which a transition commits.
    #[inline]
    pub fn full_cycle(&self) -> f32 {
        2.0 * self.limit
    }
}

/// Non-fatal configuration problems reported when the engine is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    CountMismatch { pages: usize, colors: usize },
    TooFewPages(usize),
    TooFewColors(usize),
}

impl ConfigIssue {
    /// Whether this issue prevents animated transitions.
    pub fn disables_animation(self) -> bool {
        !matches!(self, ConfigIssue::CountMismatch { .. })
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::CountMismatch { pages, colors } => write!(
                f,
                "pages count ({}) should be the same as background colors count ({})",
                pages, colors
            ),
            ConfigIssue::TooFewPages(n) => write!(f, "add more pages (got {}, need at least 2)", n),
            ConfigIssue::TooFewColors(n) => {
                write!(f, "add more background colors (got {}, need at least 2)", n)
            }
        }
    }
}

pub fn diagnose(pages: usize, colors: usize) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    if pages != colors {
        issues.push(ConfigIssue::CountMismatch { pages, colors });
    }
    if pages < 2 {
        issues.push(ConfigIssue::TooFewPages(pages));
    }
    if colors < 2 {
        issues.push(ConfigIssue::TooFewColors(colors));
    }
    issues
}
