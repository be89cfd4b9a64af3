//! Run settings
//!
//! Loaded once at startup from an optional JSON file. Missing fields fall back
//! to the defaults in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    pub width: i32,
    pub height: i32,

    // === Population ===
    pub ai_count: usize,
    pub food_count: usize,

    // === Player ===
    pub player_radius: i32,
    pub player_step: i32,
    pub score_per_radius: i32,

    // === Spawning ===
    pub ai_radius_min: i32,
    pub ai_radius_max: i32,
    pub food_radius_min: i32,
    pub food_radius_max: i32,
    /// Rejection sampling budget per spawned disc
    pub spawn_attempts: u32,

    // === AI ===
    pub pursuit_step: i32,
    pub ai_food_chase_radius: i32,

    // === Front-end ===
    pub frame_rate: u32,
    /// Fixed seed; `None` reseeds from the wall clock at every run start
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: RESOLUTION_X,
            height: RESOLUTION_Y,

            ai_count: AI_NUM,
            food_count: FOOD_NUM,

            player_radius: PLAYER_RADIUS,
            player_step: PLAYER_STEP,
            score_per_radius: SCORE_PER_RADIUS,

            ai_radius_min: AI_RADIUS_MIN,
            ai_radius_max: AI_RADIUS_MAX,
            food_radius_min: FOOD_RADIUS_MIN,
            food_radius_max: FOOD_RADIUS_MAX,
            spawn_attempts: MAX_SPAWN_ATTEMPTS,

            pursuit_step: PURSUIT_STEP,
            ai_food_chase_radius: AI_FOOD_CHASE_RADIUS,

            frame_rate: FRAME_RATE,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject configurations under which the board cannot be populated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::invalid(
                "width/height",
                format!("surface must be non-empty, got {}x{}", self.width, self.height),
            ));
        }
        if self.width > MAX_SURFACE_EDGE || self.height > MAX_SURFACE_EDGE {
            return Err(ConfigError::invalid(
                "width/height",
                format!(
                    "surface {}x{} exceeds {MAX_SURFACE_EDGE} per side",
                    self.width, self.height
                ),
            ));
        }
        if self.ai_count > MAX_POPULATION || self.food_count > MAX_POPULATION {
            return Err(ConfigError::invalid(
                "ai_count/food_count",
                format!("at most {MAX_POPULATION} discs of each kind"),
            ));
        }
        check_range("ai_radius_min/ai_radius_max", self.ai_radius_min, self.ai_radius_max)?;
        check_range("food_radius_min/food_radius_max", self.food_radius_min, self.food_radius_max)?;
        if self.player_radius < 1 {
            return Err(ConfigError::invalid("player_radius", "must be at least 1"));
        }

        // A disc spawns with its whole extent on the surface, so the largest one
        // has to fit with room to move.
        let shortest_side = i64::from(self.width.min(self.height));
        for (field, radius) in [
            ("ai_radius_max", self.ai_radius_max),
            ("food_radius_max", self.food_radius_max),
            ("player_radius", self.player_radius),
        ] {
            let diameter = 2 * i64::from(radius) + 1;
            if diameter >= shortest_side {
                return Err(ConfigError::invalid(
                    field,
                    format!("diameter {diameter} does not fit a {}x{} surface", self.width, self.height),
                ));
            }
        }

        if self.spawn_attempts == 0 {
            return Err(ConfigError::invalid("spawn_attempts", "must be at least 1"));
        }
        check_step("player_step", self.player_step)?;
        check_step("pursuit_step", self.pursuit_step)?;
        if !(0..=MAX_SCORE_PER_RADIUS).contains(&self.score_per_radius) {
            return Err(ConfigError::invalid(
                "score_per_radius",
                format!("must be within 0..={MAX_SCORE_PER_RADIUS}"),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::invalid("frame_rate", "must be at least 1"));
        }
        Ok(())
    }

    /// Score of a player disc of the given radius
    pub fn score_for_radius(&self, radius: i32) -> i32 {
        (radius - self.player_radius) * self.score_per_radius
    }
}

fn check_range(field: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if min < 1 {
        return Err(ConfigError::invalid(field, format!("minimum radius {min} is below 1")));
    }
    if min > max {
        return Err(ConfigError::invalid(field, format!("range {min}..={max} is empty")));
    }
    Ok(())
}

/// Steps are at least one unit and no longer than the largest surface edge
fn check_step(field: &'static str, step: i32) -> Result<(), ConfigError> {
    if !(1..=MAX_SURFACE_EDGE).contains(&step) {
        return Err(ConfigError::invalid(
            field,
            format!("{step} is outside 1..={MAX_SURFACE_EDGE}"),
        ));
    }
    Ok(())
}
