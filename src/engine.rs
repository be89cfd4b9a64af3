//! Frame protocol
//!
//! One frame is: apply Start/Pause, clear the back surface, step the world,
//! draw it, write the overlay, present, then pick up the new back surface.
//! A paused frame stops after the Start/Pause step and leaves the display
//! showing the last presented image.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::error::{ConfigError, SpawnError};
use crate::highscores::{HighScores, RunRecord};
use crate::input::Command;
use crate::overlay::ScoreOverlay;
use crate::renderer::color::BACKGROUND;
use crate::renderer::{FrameBufferDevice, Surface, SurfaceId, draw_world};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, TickInput, TickOutcome, World, apply_phase_input, tick};

/// What a call to `Engine::frame` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Paused: nothing simulated, drawn or presented
    Paused,
    /// A frame was presented
    Presented,
    /// A frame was presented and the player was eaten in it
    Defeated,
}

/// Owns the world and drives it one frame at a time against a display
pub struct Engine {
    settings: Settings,
    world: World,
    rng: Pcg32,
    /// Cached back surface, refreshed after every present
    back: SurfaceId,
    scores: HighScores,
    frames: u64,
}

impl Engine {
    /// Validate settings and spawn the first run (waiting in `Title`)
    pub fn new(settings: Settings, device: &impl FrameBufferDevice) -> Result<Self, ConfigError> {
        settings.validate()?;
        let seed = run_seed(&settings);
        let mut rng = Pcg32::seed_from_u64(seed);
        let world = World::new(settings.clone(), &mut rng)?;
        log::info!(
            "Game initialized with seed: {} ({} AI, {} food)",
            seed,
            world.ai.len(),
            world.food.len()
        );
        Ok(Self::from_world(world, rng, device))
    }

    /// Drive an already-built world
    pub fn from_world(world: World, rng: Pcg32, device: &impl FrameBufferDevice) -> Self {
        Self {
            settings: world.settings.clone(),
            world,
            rng,
            back: device.back_surface_id(),
            scores: HighScores::new(),
            frames: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.scores
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Throw the world away and spawn a new run with a fresh seed
    pub fn restart(&mut self) -> Result<(), SpawnError> {
        let seed = run_seed(&self.settings);
        self.rng = Pcg32::seed_from_u64(seed);
        self.world = World::new(self.settings.clone(), &mut self.rng)?;
        log::info!("Game restarted with seed: {}", seed);
        Ok(())
    }

    /// Advance the simulation one tick
    pub fn step(&mut self, input: &TickInput) -> TickOutcome {
        tick(&mut self.world, input, &mut self.rng)
    }

    /// Rasterize the world onto `surface`
    pub fn render(&self, surface: &mut Surface) {
        draw_world(surface, &self.world);
    }

    /// Run one frame with the commands received since the last one
    pub fn frame<D>(&mut self, device: &mut D, commands: &[Command]) -> Result<FrameOutcome, SpawnError>
    where
        D: FrameBufferDevice + ScoreOverlay,
    {
        let input = TickInput::from_commands(commands);
        if self.world.phase == GamePhase::GameOver && input.start {
            self.restart()?;
        }
        apply_phase_input(&mut self.world, &input);
        if self.world.phase == GamePhase::Paused {
            return Ok(FrameOutcome::Paused);
        }

        device.surface_mut(self.back).clear_dirty(BACKGROUND);
        let outcome = self.step(&input);
        self.render(device.surface_mut(self.back));

        if outcome == TickOutcome::Defeated {
            let eaten_by = self.world.events.iter().find_map(|e| match e {
                GameEvent::PlayerDefeated { by } => Some(*by),
                _ => None,
            });
            let run = RunRecord::from_world(&self.world, eaten_by);
            let rank = self.scores.record(run);
            log::info!(
                "Run over: score {} after {} ticks, radius {} (rank {:?})",
                run.score,
                run.ticks,
                run.radius,
                rank
            );
        }
        self.draw_overlay(device);

        device.present_and_swap();
        self.back = device.back_surface_id();
        self.frames += 1;

        Ok(match outcome {
            TickOutcome::Defeated => FrameOutcome::Defeated,
            _ => FrameOutcome::Presented,
        })
    }

    fn draw_overlay(&self, overlay: &mut impl ScoreOverlay) {
        overlay.render_text(TITLE_POS.0, TITLE_POS.1, TITLE_TEXT);
        overlay.render_text(SCORE_LABEL_POS.0, SCORE_LABEL_POS.1, "Score:");
        overlay.render_text(SCORE_VALUE_POS.0, SCORE_VALUE_POS.1, &self.world.score().to_string());

        match self.world.phase {
            GamePhase::Title => overlay.render_text(PROMPT_POS.0, PROMPT_POS.1, "Press Enter to start"),
            GamePhase::GameOver => {
                let best = self.scores.top_score().unwrap_or(0);
                let prompt = format!("You were eaten! Best: {best}  Enter to play again");
                overlay.render_text(PROMPT_POS.0, PROMPT_POS.1, &prompt);
            }
            GamePhase::Playing | GamePhase::Paused => {}
        }
    }
}

/// Fixed seed from settings, otherwise the wall clock
fn run_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}
