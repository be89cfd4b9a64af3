//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Integer positions and radii
//! - Seeded RNG only (spawning and pursuit axis choice)
//! - Stable iteration order (by slot index)
//! - No surface or platform dependencies (colors are plain values)

pub mod collision;
pub mod entity;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use collision::{Clash, resolve};
pub use entity::{Ball, EntityKind};
pub use state::{GameEvent, GamePhase, World};
pub use tick::{TickInput, TickOutcome, apply_phase_input, tick};
