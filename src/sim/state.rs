//! World state and spawn policy
//!
//! The world owns every entity. Collections are fixed-size and index-stable
//! for the whole run: an eaten AI or food item keeps its slot and is
//! re-rolled in place.

use glam::IVec2;
use rand::Rng;

use super::entity::{Ball, EntityKind};
use crate::error::SpawnError;
use crate::renderer::color::{PALETTE, PLAYER_COLOR};
use crate::settings::Settings;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// World spawned, waiting for Start
    Title,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player was eaten
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PlayerAteFood { food: usize, growth: i32 },
    AiAteFood { ai: usize, food: usize },
    AiAteAi { eater: usize, eaten: usize, growth: i32 },
    PlayerAteAi { ai: usize, growth: i32 },
    PlayerDefeated { by: usize },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub player: Ball,
    pub ai: Vec<Ball>,
    pub food: Vec<Ball>,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl World {
    /// Spawn a fresh run: player centered, AI and food scattered clear of it.
    pub fn new(settings: Settings, rng: &mut impl Rng) -> Result<Self, SpawnError> {
        let player = Ball::new(
            IVec2::new(settings.width / 2, settings.height / 2),
            settings.player_radius,
            PLAYER_COLOR,
        );
        let eaten = Ball {
            alive: false,
            ..Ball::default()
        };

        let mut world = Self {
            ai: vec![eaten; settings.ai_count],
            food: vec![eaten; settings.food_count],
            settings,
            player,
            phase: GamePhase::Title,
            time_ticks: 0,
            events: Vec::new(),
        };
        for i in 0..world.ai.len() {
            world.spawn_ai(i, rng)?;
        }
        for i in 0..world.food.len() {
            world.spawn_food(i, rng)?;
        }
        Ok(world)
    }

    /// Build a world from explicit entities, already in play
    pub fn from_parts(settings: Settings, player: Ball, ai: Vec<Ball>, food: Vec<Ball>) -> Self {
        let mut world = Self {
            settings,
            player,
            ai,
            food,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        };
        world.refresh_score();
        world
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.settings.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.settings.height
    }

    /// Re-roll AI `index` with a new color, radius and position
    pub fn spawn_ai(&mut self, index: usize, rng: &mut impl Rng) -> Result<(), SpawnError> {
        let (min, max) = (self.settings.ai_radius_min, self.settings.ai_radius_max);
        self.ai[index] = self.roll(EntityKind::Ai, index, min, max, rng)?;
        Ok(())
    }

    /// Re-roll food `index` with a new color, radius and position
    pub fn spawn_food(&mut self, index: usize, rng: &mut impl Rng) -> Result<(), SpawnError> {
        let (min, max) = (self.settings.food_radius_min, self.settings.food_radius_max);
        self.food[index] = self.roll(EntityKind::Food, index, min, max, rng)?;
        Ok(())
    }

    fn roll(
        &self,
        kind: EntityKind,
        index: usize,
        radius_min: i32,
        radius_max: i32,
        rng: &mut impl Rng,
    ) -> Result<Ball, SpawnError> {
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        let radius = rng.random_range(radius_min..=radius_max).max(1);
        let mut ball = Ball::new(IVec2::ZERO, radius, color);

        // Only the position is resampled on overlap
        let attempts = self.settings.spawn_attempts.max(1);
        for _ in 0..attempts {
            ball.pos = self.random_position(radius, rng);
            if !ball.bounds_overlap(&self.player) {
                return Ok(ball);
            }
        }
        Err(SpawnError { kind, index, attempts })
    }

    /// Uniform center such that the whole disc is on the surface
    fn random_position(&self, radius: i32, rng: &mut impl Rng) -> IVec2 {
        let (x_lo, x_hi) = axis_range(radius, self.width());
        let (y_lo, y_hi) = axis_range(radius, self.height());
        IVec2::new(rng.random_range(x_lo..=x_hi), rng.random_range(y_lo..=y_hi))
    }

    /// Re-roll every eaten AI and food item.
    ///
    /// A slot that can't be placed this tick (the player has grown over most
    /// of the board) stays eaten and is retried next tick.
    pub fn respawn_eaten(&mut self, rng: &mut impl Rng) {
        for i in 0..self.ai.len() {
            if !self.ai[i].alive {
                if let Err(e) = self.spawn_ai(i, rng) {
                    log::warn!("{e}; retrying next tick");
                }
            }
        }
        for i in 0..self.food.len() {
            if !self.food[i].alive {
                if let Err(e) = self.spawn_food(i, rng) {
                    log::warn!("{e}; retrying next tick");
                }
            }
        }
    }

    /// Recompute the player's score from its radius
    pub fn refresh_score(&mut self) {
        self.player.score = self.settings.score_for_radius(self.player.radius);
    }

    pub fn score(&self) -> i32 {
        self.player.score
    }
}

/// Inclusive range of centers keeping a disc of `radius` inside `[0, extent)`.
/// Collapses to the middle when the disc is wider than the surface.
pub fn axis_range(radius: i32, extent: i32) -> (i32, i32) {
    let lo = radius;
    let hi = extent - 1 - radius;
    if lo > hi {
        let mid = extent / 2;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Clamp a center coordinate so the disc stays on the surface
#[inline]
pub fn clamp_axis(value: i32, radius: i32, extent: i32) -> i32 {
    let (lo, hi) = axis_range(radius, extent);
    value.clamp(lo, hi)
}
