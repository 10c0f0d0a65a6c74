use raylib::ease;
use raylib::prelude::Vector2;

use crate::concentric::state::Direction;
use crate::config::EngineConfig;

/// Quadratic ease-in on `[0, 1]`: `t²`.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    ease::quad_in(t, 0.0, 1.0, 1.0)
}

/// Quadratic ease-out on `[0, 1]`: `-t·(t-2)`.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    ease::quad_out(t, 0.0, 1.0, 1.0)
}

/// Where one page is drawn, relative to its resting position.
#[derive(Debug, Clone, Copy)]
pub struct PagePlacement {
    pub index: usize,
    pub scale: f32,
    pub offset: Vector2,
}

/// Slides and scales the outgoing and incoming pages as a function of progress.
#[derive(Debug, Clone, Copy)]
pub struct PageCompositor {
    limit: f32,
    max_x_offset: f32,
    max_y_offset: f32,
}

impl PageCompositor {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            limit: config.limit,
            max_x_offset: config.max_x_offset,
            max_y_offset: config.max_y_offset,
        }
    }

    /// `(outgoing, incoming)` travel fractions for a full-cycle progress.
    pub fn offsets(&self, progress: f32) -> (f32, f32) {
        let t = progress / self.limit / 2.0;
        (ease_out(t), ease_in(1.0 - t))
    }

    pub fn outgoing(&self, index: usize, progress: f32, direction: Direction) -> PagePlacement {
        let (offset, _) = self.offsets(progress);
        PagePlacement {
            index,
            scale: 1.0 - offset / 3.0,
            offset: Vector2::new(
                direction.sign() * self.max_x_offset * offset,
                self.max_y_offset * offset,
            ),
        }
    }

    pub fn incoming(&self, index: usize, progress: f32, direction: Direction) -> PagePlacement {
        let (_, offset) = self.offsets(progress);
        let mut scale = 1.0 - offset / 3.0;
        if scale == 0.0 {
            scale = 1.0;
        }
        PagePlacement {
            index,
            scale,
            offset: Vector2::new(
                -direction.sign() * self.max_x_offset * offset,
                self.max_y_offset * offset,
            ),
        }
    }
}
