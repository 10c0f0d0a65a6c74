//! Concentric-circle page transitions.
//!
//! A growing peephole circle reveals the next page's color while the pages
//! slide and scale, all driven by one progress value advanced on a fixed tick.

pub mod clock;
pub mod compositor;
pub mod engine;
pub mod events;
pub mod shape;
pub mod state;

pub use clock::ProgressClock;
pub use compositor::{ease_in, ease_out, PageCompositor, PagePlacement};
pub use engine::{Mounted, Navigation, RenderFrame, TransitionEngine};
pub use events::{TransitionEvent, TransitionListener};
pub use shape::{ArcSide, PeepholeShape, ShapeInterpolator};
pub use state::{Direction, EngineState, TransitionState};
