//! Concentric onboarding carousel.
//!
//! The transition engine lives in [`concentric`]; the `onboarding` binary
//! hosts it in a raylib window.

pub mod colors;
pub mod concentric;
pub mod config;
pub mod constants;
pub mod logging;

pub use colors::Rgba;
pub use concentric::{Direction, Navigation, RenderFrame, TransitionEngine, TransitionEvent};
pub use config::{ConfigIssue, EngineConfig};
