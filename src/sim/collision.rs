//! Consumption resolution
//!
//! Discs never bounce; they either pass through each other or one eats the
//! other. The three passes run in a fixed order each tick:
//! 1. player eats food
//! 2. each AI eats food, then duels every later AI
//! 3. player vs AI, stopping at the first AI that decides anything
//!
//! Growth amounts differ per pass (full food radius, a fifth of an eaten AI,
//! a quarter for the player) and are integer-truncated.

use super::state::{GameEvent, World};
use super::entity::Ball;

/// Outcome of the player-vs-AI pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clash {
    Nothing,
    PlayerAte(usize),
    PlayerDefeated(usize),
}

/// Food whose center lies within the eater's disc (rim included)
#[inline]
fn reaches_food(eater: &Ball, food: &Ball) -> bool {
    food.alive && eater.distance_to(food) <= eater.radius as f32
}

/// `eater` swallows `prey` when their centers are closer than the eater's
/// radius less a third of the prey's radius.
#[inline]
pub fn swallows(eater: &Ball, prey: &Ball) -> bool {
    eater.distance_to(prey) < eater.radius as f32 - prey.radius as f32 / 3.0
}

/// Player eats every food item it covers, growing by each item's radius.
pub fn player_eat_food(world: &mut World) {
    for (i, food) in world.food.iter_mut().enumerate() {
        if reaches_food(&world.player, food) {
            food.alive = false;
            world.player.grow(food.radius);
            world.events.push(GameEvent::PlayerAteFood {
                food: i,
                growth: food.radius,
            });
        }
    }
    world.refresh_score();
}

/// Each live AI in index order eats the food it covers, then duels every
/// live AI after it.
pub fn ai_eat_food_and_ai(world: &mut World) {
    let World { ai, food, events, .. } = world;

    for i in 0..ai.len() {
        if !ai[i].alive {
            continue;
        }

        for (f, item) in food.iter_mut().enumerate() {
            if reaches_food(&ai[i], item) {
                item.alive = false;
                ai[i].grow(item.radius);
                events.push(GameEvent::AiAteFood { ai: i, food: f });
            }
        }

        for k in i + 1..ai.len() {
            if !ai[k].alive {
                continue;
            }
            if swallows(&ai[k], &ai[i]) {
                let growth = ai[i].radius / 5;
                ai[i].alive = false;
                ai[k].grow(growth);
                events.push(GameEvent::AiAteAi { eater: k, eaten: i, growth });
                break;
            } else if swallows(&ai[i], &ai[k]) {
                let growth = ai[k].radius / 5;
                ai[k].alive = false;
                ai[i].grow(growth);
                events.push(GameEvent::AiAteAi { eater: i, eaten: k, growth });
            }
        }
    }
}

/// Player against each live AI in index order; the first AI that is eaten or
/// eats the player ends the pass.
pub fn player_vs_ai(world: &mut World) -> Clash {
    for i in 0..world.ai.len() {
        let ai = world.ai[i];
        if !ai.alive {
            continue;
        }
        if swallows(&world.player, &ai) {
            let growth = ai.radius / 4;
            world.ai[i].alive = false;
            world.player.grow(growth);
            world.refresh_score();
            world.events.push(GameEvent::PlayerAteAi { ai: i, growth });
            return Clash::PlayerAte(i);
        }
        if swallows(&ai, &world.player) {
            world.player.alive = false;
            world.events.push(GameEvent::PlayerDefeated { by: i });
            return Clash::PlayerDefeated(i);
        }
    }
    Clash::Nothing
}

/// Run all three passes in order
pub fn resolve(world: &mut World) -> Clash {
    player_eat_food(world);
    ai_eat_food_and_ai(world);
    player_vs_ai(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::color::{RED, WHITE};
    use crate::settings::Settings;
    use glam::IVec2;

    fn ball(x: i32, y: i32, r: i32) -> Ball {
        Ball::new(IVec2::new(x, y), r, RED)
    }

    fn world(player: Ball, ai: Vec<Ball>, food: Vec<Ball>) -> World {
        let settings = Settings {
            ai_count: ai.len(),
            food_count: food.len(),
            player_radius: 10,
            ..Default::default()
        };
        World::from_parts(settings, player, ai, food)
    }

    #[test]
    fn player_growth_equals_food_radius() {
        let player = Ball::new(IVec2::new(160, 120), 10, WHITE);
        let mut w = world(player, vec![], vec![ball(165, 120, 3), ball(200, 120, 1)]);
        player_eat_food(&mut w);
        assert_eq!(w.player.radius, 13);
        assert!(!w.food[0].alive);
        assert!(w.food[1].alive);
        assert_eq!(w.score(), 30);
        assert_eq!(w.events, vec![GameEvent::PlayerAteFood { food: 0, growth: 3 }]);
    }

    #[test]
    fn eaten_food_is_not_eaten_twice() {
        let player = Ball::new(IVec2::new(160, 120), 10, WHITE);
        let mut w = world(player, vec![ball(160, 125, 12)], vec![ball(162, 120, 1)]);
        player_eat_food(&mut w);
        ai_eat_food_and_ai(&mut w);
        // Player got it first; the overlapping AI doesn't
        assert_eq!(w.player.radius, 11);
        assert!(!w.events.iter().any(|e| matches!(e, GameEvent::AiAteFood { .. })));
    }

    #[test]
    fn larger_later_ai_eats_smaller_earlier_ai() {
        let far = Ball::new(IVec2::new(10, 10), 5, WHITE);
        let mut w = world(far, vec![ball(100, 100, 10), ball(120, 100, 25)], vec![]);
        ai_eat_food_and_ai(&mut w);
        assert!(!w.ai[0].alive);
        assert!(w.ai[1].alive);
        assert_eq!(w.ai[1].radius, 27);
        assert_eq!(
            w.events,
            vec![GameEvent::AiAteAi { eater: 1, eaten: 0, growth: 2 }]
        );
    }

    #[test]
    fn larger_earlier_ai_eats_smaller_later_ai() {
        let far = Ball::new(IVec2::new(10, 10), 5, WHITE);
        let mut w = world(far, vec![ball(120, 100, 25), ball(100, 100, 10)], vec![]);
        ai_eat_food_and_ai(&mut w);
        assert!(w.ai[0].alive);
        assert!(!w.ai[1].alive);
        assert_eq!(w.ai[0].radius, 27);
    }

    #[test]
    fn near_equal_ai_pass_through() {
        let far = Ball::new(IVec2::new(10, 10), 5, WHITE);
        // 20 - 18/3 = 14 and 18 - 20/3 = 11.3: neither below a distance of 15
        let mut w = world(far, vec![ball(100, 100, 20), ball(115, 100, 18)], vec![]);
        ai_eat_food_and_ai(&mut w);
        assert!(w.ai.iter().all(|a| a.alive));
        assert!(w.events.is_empty());
    }

    #[test]
    fn ai_eats_food_before_dueling() {
        let far = Ball::new(IVec2::new(10, 10), 5, WHITE);
        let mut w = world(
            far,
            vec![ball(100, 100, 10), ball(120, 100, 25)],
            vec![ball(105, 100, 2)],
        );
        ai_eat_food_and_ai(&mut w);
        // AI 0 grew to 12 before being eaten, so AI 1 gains 12 / 5
        assert!(!w.food[0].alive);
        assert!(!w.ai[0].alive);
        assert_eq!(w.ai[1].radius, 27);
        assert_eq!(w.events[0], GameEvent::AiAteFood { ai: 0, food: 0 });
    }

    #[test]
    fn big_ai_defeats_player() {
        let player = Ball::new(IVec2::new(175, 120), 10, WHITE);
        let mut w = world(player, vec![ball(150, 120, 30)], vec![]);
        assert_eq!(player_vs_ai(&mut w), Clash::PlayerDefeated(0));
        assert!(!w.player.alive);
        assert!(w.ai[0].alive);
    }

    #[test]
    fn player_eats_small_ai_for_a_quarter() {
        let player = Ball::new(IVec2::new(160, 120), 30, WHITE);
        let mut w = world(player, vec![ball(170, 120, 12)], vec![]);
        assert_eq!(player_vs_ai(&mut w), Clash::PlayerAte(0));
        assert!(!w.ai[0].alive);
        assert_eq!(w.player.radius, 33);
        assert_eq!(w.score(), 230);
    }

    #[test]
    fn first_qualifying_ai_wins() {
        let player = Ball::new(IVec2::new(160, 120), 30, WHITE);
        let mut w = world(
            player,
            vec![ball(300, 20, 12), ball(165, 120, 12), ball(170, 120, 12)],
            vec![],
        );
        assert_eq!(player_vs_ai(&mut w), Clash::PlayerAte(1));
        assert!(w.ai[0].alive);
        assert!(!w.ai[1].alive);
        assert!(w.ai[2].alive);
    }

    #[test]
    fn eating_an_ai_stops_before_a_later_threat() {
        let player = Ball::new(IVec2::new(160, 120), 20, WHITE);
        let mut w = world(
            player,
            vec![ball(165, 120, 8), ball(170, 120, 60)],
            vec![],
        );
        assert_eq!(player_vs_ai(&mut w), Clash::PlayerAte(0));
        assert!(w.player.alive);
    }
}
