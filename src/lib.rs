//! Battle of Balls - a disc-eat-disc arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, pursuit, consumption, tick)
//! - `renderer`: Software rasterizer and double-buffered surfaces
//! - `engine`: Per-frame clear/simulate/draw/present protocol
//! - `platform`: Headless and terminal front-ends
//! - `settings`: Run configuration

pub mod engine;
pub mod error;
pub mod highscores;
pub mod input;
pub mod overlay;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{Engine, FrameOutcome};
pub use error::{ConfigError, SpawnError};
pub use highscores::{HighScores, RunRecord};
pub use input::Command;
pub use overlay::ScoreOverlay;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Surface dimensions (pixels)
    pub const RESOLUTION_X: i32 = 320;
    pub const RESOLUTION_Y: i32 = 240;

    /// Default population sizes
    pub const AI_NUM: usize = 20;
    pub const FOOD_NUM: usize = 50;

    /// Player defaults
    pub const PLAYER_RADIUS: i32 = 10;
    /// Units moved per directional command
    pub const PLAYER_STEP: i32 = 10;
    /// Score = (radius - initial radius) * SCORE_PER_RADIUS
    pub const SCORE_PER_RADIUS: i32 = 10;

    /// AI spawn radius range (inclusive)
    pub const AI_RADIUS_MIN: i32 = 10;
    pub const AI_RADIUS_MAX: i32 = 19;
    /// Food spawn radius range (inclusive)
    pub const FOOD_RADIUS_MIN: i32 = 1;
    pub const FOOD_RADIUS_MAX: i32 = 1;

    /// Pursuit heuristic step (units per tick along one axis)
    pub const PURSUIT_STEP: i32 = 2;
    /// AI at or below this radius go after food when no smaller AI is around
    pub const AI_FOOD_CHASE_RADIUS: i32 = 30;

    /// Rejection sampling budget for a single spawn
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

    /// Upper bounds accepted from a settings file
    pub const MAX_SURFACE_EDGE: i32 = 4096;
    pub const MAX_POPULATION: usize = 10_000;
    pub const MAX_SCORE_PER_RADIUS: i32 = 1000;

    /// Front-end refresh rate
    pub const FRAME_RATE: u32 = 30;

    /// Overlay text positions (character cells)
    pub const TITLE_TEXT: &str = "Battle of Balls";
    pub const TITLE_POS: (u16, u16) = (1, 1);
    pub const SCORE_LABEL_POS: (u16, u16) = (1, 2);
    pub const SCORE_VALUE_POS: (u16, u16) = (8, 2);
    pub const PROMPT_POS: (u16, u16) = (1, 4);
}

/// Euclidean distance between two integer points
#[inline]
pub fn distance(a: glam::IVec2, b: glam::IVec2) -> f32 {
    (a - b).as_vec2().length()
}
