//! One simulation tick
//!
//! A tick is one discrete step: respawn whatever was eaten last tick, move the
//! player by the queued commands, move the AI, then resolve consumption.

use glam::IVec2;
use rand::Rng;

use super::collision::{Clash, resolve};
use super::entity::Ball;
use super::pursuit::{nearest_food, nearest_smaller_ai, pursue};
use super::state::{GamePhase, World, clamp_axis};
use crate::input::Command;

/// Input collected since the previous tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Sum of unit directions from movement commands
    pub movement: IVec2,
    /// Start pressed
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Fold any number of commands (including none) into one tick's input
    pub fn from_commands(commands: &[Command]) -> Self {
        let mut input = Self::default();
        for &cmd in commands {
            match cmd {
                Command::Start => input.start = true,
                Command::Pause => input.pause = !input.pause,
                _ => {
                    if let Some(dir) = cmd.direction() {
                        input.movement += dir;
                    }
                }
            }
        }
        input
    }
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Idle,
    Advanced,
    /// The player was eaten this tick; the run is over
    Defeated,
}

/// Apply Start/Pause to the phase. Restarting after game over is the
/// engine's job since it needs a fresh world.
pub fn apply_phase_input(state: &mut World, input: &TickInput) {
    match state.phase {
        GamePhase::Title if input.start => {
            state.phase = GamePhase::Playing;
            log::info!("Run started");
        }
        GamePhase::Playing if input.pause => state.phase = GamePhase::Paused,
        GamePhase::Paused if input.pause || input.start => state.phase = GamePhase::Playing,
        _ => {}
    }
}

/// Advance the world by one tick
pub fn tick(state: &mut World, input: &TickInput, rng: &mut impl Rng) -> TickOutcome {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return TickOutcome::Idle;
    }
    state.time_ticks += 1;

    state.respawn_eaten(rng);
    move_player(state, input.movement);
    move_ai(state, rng);

    let outcome = match resolve(state) {
        Clash::PlayerDefeated(by) => {
            state.phase = GamePhase::GameOver;
            log::info!(
                "Player eaten by AI #{} at tick {} with score {}",
                by,
                state.time_ticks,
                state.score()
            );
            TickOutcome::Defeated
        }
        _ => TickOutcome::Advanced,
    };

    for event in &state.events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    outcome
}

/// Shift the player by `movement * player_step`, keeping the disc on the surface
fn move_player(state: &mut World, movement: IVec2) {
    let step = state.settings.player_step;
    let (width, height) = (state.width(), state.height());
    let player = &mut state.player;
    let target = player.pos.saturating_add(movement.saturating_mul(IVec2::splat(step)));
    player.pos = IVec2::new(
        clamp_axis(target.x, player.radius, width),
        clamp_axis(target.y, player.radius, height),
    );
}

/// AI that touch an edge are nudged one unit inward and do nothing else this
/// tick. The rest chase the nearest smaller AI, or failing that (while small
/// enough) the nearest food, or stay put.
fn move_ai(state: &mut World, rng: &mut impl Rng) {
    let (width, height) = (state.width(), state.height());
    let step = state.settings.pursuit_step;
    let chase_radius = state.settings.ai_food_chase_radius;

    for i in 0..state.ai.len() {
        if !state.ai[i].alive {
            continue;
        }
        if nudge_inward(&mut state.ai[i], width, height) {
            continue;
        }

        let target = match nearest_smaller_ai(&state.ai, i) {
            Some(k) => Some(state.ai[k].pos),
            None if state.ai[i].radius <= chase_radius => {
                nearest_food(&state.food, &state.ai[i]).map(|f| state.food[f].pos)
            }
            None => None,
        };
        if let Some(target) = target {
            pursue(&mut state.ai[i], target, step, rng);
        }
    }
}

/// Move a disc touching an edge one unit away from it. Returns whether any
/// edge was touched.
fn nudge_inward(ball: &mut Ball, width: i32, height: i32) -> bool {
    let left = ball.pos.x - ball.radius <= 0;
    let right = ball.pos.x + ball.radius >= width - 1;
    let top = ball.pos.y - ball.radius <= 0;
    let bottom = ball.pos.y + ball.radius >= height - 1;

    // Wider than the surface: touching both sides, leave it be
    if left != right {
        ball.pos.x += if left { 1 } else { -1 };
    }
    if top != bottom {
        ball.pos.y += if top { 1 } else { -1 };
    }
    left || right || top || bottom
}
