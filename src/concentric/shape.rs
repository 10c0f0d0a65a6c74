use raylib::prelude::Vector2;

use crate::concentric::state::Direction;
use crate::config::EngineConfig;

/// Which half of a circle a [`PeepholeShape::HalfDisc`] keeps.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArcSide {
    Left,
    Right,
}

/// The peephole circle, positioned relative to the anchor (the button center).
///
/// Once the circle is much larger than the viewport only the half facing the
/// anchor is kept. A half-disc has the same center and radius as the disc it
/// replaces, so the visible edge does not jump at the switch.
#[derive(Debug, Clone, Copy)]
pub enum PeepholeShape {
    Disc { center: Vector2, radius: f32 },
    HalfDisc { center: Vector2, radius: f32, side: ArcSide },
}

impl PeepholeShape {
    pub fn center(&self) -> Vector2 {
        match *self {
            PeepholeShape::Disc { center, .. } | PeepholeShape::HalfDisc { center, .. } => center,
        }
    }

    pub fn radius(&self) -> f32 {
        match *self {
            PeepholeShape::Disc { radius, .. } | PeepholeShape::HalfDisc { radius, .. } => radius,
        }
    }

    pub fn is_disc(&self) -> bool {
        matches!(self, PeepholeShape::Disc { .. })
    }

    /// Point-in-shape test in anchor-relative coordinates.
    pub fn contains(&self, point: Vector2) -> bool {
        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        let inside = dx * dx + dy * dy <= self.radius() * self.radius();
        match *self {
            PeepholeShape::Disc { .. } => inside,
            PeepholeShape::HalfDisc { side: ArcSide::Left, .. } => inside && dx <= 0.0,
            PeepholeShape::HalfDisc { side: ArcSide::Right, .. } => inside && dx >= 0.0,
        }
    }
}

/// Computes the peephole geometry for a progress value. Stateless.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInterpolator {
    radius: f32,
    limit: f32,
    arc_switch: f32,
}

impl ShapeInterpolator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            radius: config.radius,
            limit: config.limit,
            arc_switch: config.arc_switch,
        }
    }

    /// Resting button: a disc of the base radius centred on the anchor.
    pub fn idle(&self) -> PeepholeShape {
        PeepholeShape::Disc {
            center: Vector2::new(0.0, 0.0),
            radius: self.radius,
        }
    }

    /// Growing phase at sub-progress `p` in `[0, limit]`.
    ///
    /// The radius grows as `R + 2^p` while the left edge slides from `-R` to
    /// the anchor, so the circle swells off the right side of the screen.
    pub fn growing(&self, p: f32) -> PeepholeShape {
        let radius = self.radius + 2f32.powf(p);
        let delta = (1.0 - p / self.limit) * self.radius;
        let center = Vector2::new(radius - delta, 0.0);

        if p > self.arc_switch {
            PeepholeShape::HalfDisc { center, radius, side: ArcSide::Left }
        } else {
            PeepholeShape::Disc { center, radius }
        }
    }

    /// Shrinking phase at sub-progress `p` in `[0, limit]`; the time reversal
    /// of [`growing`](Self::growing), mirrored to the left of the anchor.
    pub fn shrinking(&self, p: f32) -> PeepholeShape {
        let radius = self.radius + 2f32.powf(self.limit - p);
        let delta = p / self.limit * self.radius;
        let center = Vector2::new(delta - radius, 0.0);

        if p < self.limit - self.arc_switch {
            PeepholeShape::HalfDisc { center, radius, side: ArcSide::Right }
        } else {
            PeepholeShape::Disc { center, radius }
        }
    }

    /// Shape for a full-cycle progress in `[0, 2 * limit]`.
    ///
    /// Backward transitions substitute `2 * limit - progress`, replaying the
    /// forward sequence in reverse.
    pub fn at(&self, progress: f32, direction: Direction) -> PeepholeShape {
        let limit = self.limit;
        match direction {
            Direction::Forward if progress < limit => self.growing(progress),
            Direction::Forward => self.shrinking(progress - limit),
            Direction::Backward => {
                let backward = 2.0 * limit - progress;
                if progress < limit {
                    self.shrinking(backward - limit)
                } else {
                    self.growing(backward)
                }
            }
        }
    }
}
