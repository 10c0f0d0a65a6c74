#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Horizontal sign applied to the outgoing page: forward slides it left.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineState {
    Idle,              // Showing the current page, waiting for navigation
    AnimatingForward,  // Peephole growing towards the next page
    AnimatingBackward, // Time-reversed transition towards the previous page
}

/// Transition bookkeeping, mutated in place for the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    pub current_index: usize,
    pub next_index: usize,
    pub progress: f32,
    pub is_animating: bool,
    pub direction: Direction,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            current_index: 0,
            next_index: 1,
            progress: 0.0,
            is_animating: false,
            direction: Direction::Forward,
        }
    }
}

impl TransitionState {
    pub fn engine_state(&self) -> EngineState {
        match (self.is_animating, self.direction) {
            (false, _) => EngineState::Idle,
            (true, Direction::Forward) => EngineState::AnimatingForward,
            (true, Direction::Backward) => EngineState::AnimatingBackward,
        }
    }
}

/// Index after `index`, wrapping to 0 past the end.
#[inline]
pub fn index_forward(index: usize, count: usize) -> usize {
    if index + 1 < count { index + 1 } else { 0 }
}

/// Index before `index`, wrapping to the last page before 0.
#[inline]
pub fn index_backward(index: usize, count: usize) -> usize {
    if index > 0 { index - 1 } else { count.saturating_sub(1) }
}

pub fn index_towards(index: usize, count: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => index_forward(index, count),
        Direction::Backward => index_backward(index, count),
    }
}
