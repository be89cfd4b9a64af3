//! AI targeting and the randomized single-axis chase step

use glam::IVec2;
use rand::Rng;

use super::entity::Ball;

/// Nearest live AI that is smaller than `ai[hunter]`, looking only at slots
/// after the hunter's own.
pub fn nearest_smaller_ai(ai: &[Ball], hunter: usize) -> Option<usize> {
    let me = &ai[hunter];
    ai.iter()
        .enumerate()
        .skip(hunter + 1)
        .filter(|(_, other)| other.alive && other.radius < me.radius)
        .map(|(i, other)| (i, me.distance_to(other)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Nearest live food item
pub fn nearest_food(food: &[Ball], hunter: &Ball) -> Option<usize> {
    food.iter()
        .enumerate()
        .filter(|(_, f)| f.alive)
        .map(|(i, f)| (i, hunter.distance_to(f)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Move `step` units toward `target` along one randomly chosen axis.
///
/// Never overshoots the target coordinate on that axis; no diagonal moves.
pub fn pursue(hunter: &mut Ball, target: IVec2, step: i32, rng: &mut impl Rng) {
    let along_x = rng.random_bool(0.5);
    let (pos, goal) = if along_x {
        (&mut hunter.pos.x, target.x)
    } else {
        (&mut hunter.pos.y, target.y)
    };
    let gap = goal - *pos;
    *pos += gap.signum() * step.min(gap.abs());
}
