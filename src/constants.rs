pub const RENDER_WIDTH: i32 = 720;            // Width of the demo window
pub const RENDER_HEIGHT: i32 = 1280;          // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const RADIUS: f32 = 30.0;                 // Base radius of the peephole circle
pub const LIMIT: f32 = 15.0;                  // Progress at the grow/shrink midpoint
pub const ARC_SWITCH: f32 = 10.0;             // Sub-progress where the disc becomes a half-disc
pub const TICK_INTERVAL: f32 = 0.02;          // Progress clock period (seconds)
pub const DEFAULT_DURATION: f32 = 1.0;        // One full transition (seconds)
pub const MAX_TICK_BACKLOG: f32 = 0.25;       // Wall time replayed per advance at most (seconds)

pub const MAX_X_OFFSET: f32 = 600.0;          // Horizontal travel of sliding pages
pub const MAX_Y_OFFSET: f32 = 40.0;           // Vertical travel of sliding pages

pub const BUTTON_OFFSET_Y: f32 = 300.0;       // Button center below the screen center
pub const PAGE_OFFSET_Y: f32 = -50.0;         // Page content above the screen center
