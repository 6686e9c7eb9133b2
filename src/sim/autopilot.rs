//! Demo-mode steering
//!
//! Picks a direction from the current state: dodge any Paparazzi about to
//! land on the paddle, otherwise chase the goodie that lands soonest among
//! those the paddle can still reach.

use super::input::Direction;
use super::state::{Drop, GameState, Player};
use crate::consts::{PLAYER_CATCH_HALF_HEIGHT, PLAYER_HALF_WIDTH, PLAYER_SPEED};

/// How far above the paddle a hazard starts to matter
const HAZARD_LOOKAHEAD: f32 = 140.0;
/// Extra horizontal clearance kept from hazards
const HAZARD_CLEARANCE: f32 = 12.0;
/// Close enough to the target to stop moving
const DEAD_ZONE: f32 = PLAYER_SPEED / 2.0;

/// Ticks until a drop reaches the paddle row (None if already past it)
fn ticks_to_paddle(drop: &Drop, player: &Player) -> Option<f32> {
    let dy = player.y - drop.pos.y;
    if dy < -PLAYER_CATCH_HALF_HEIGHT || drop.fall_speed <= 0.0 {
        return None;
    }
    Some(dy.max(0.0) / drop.fall_speed)
}

fn toward(from: f32, to: f32) -> Direction {
    let dx = to - from;
    if dx > DEAD_ZONE {
        Direction::Right
    } else if dx < -DEAD_ZONE {
        Direction::Left
    } else {
        Direction::None
    }
}

/// Choose the paddle direction for this tick
pub fn steer(state: &GameState) -> Direction {
    let player = &state.player;

    // Nearest threatening hazard first
    let threat = state
        .drops
        .iter()
        .filter(|d| d.kind.is_hazard())
        .filter(|d| {
            let dy = player.y - d.pos.y;
            (-PLAYER_CATCH_HALF_HEIGHT..HAZARD_LOOKAHEAD).contains(&dy)
                && (d.pos.x - player.x).abs() < PLAYER_HALF_WIDTH + HAZARD_CLEARANCE
        })
        .min_by(|a, b| b.pos.y.total_cmp(&a.pos.y));

    if let Some(hazard) = threat {
        let away = if hazard.pos.x >= player.x {
            Direction::Left
        } else {
            Direction::Right
        };
        // Pinned against a wall: squeeze past on the other side
        return match away {
            Direction::Left if player.x <= Player::MIN_X => Direction::Right,
            Direction::Right if player.x >= Player::MAX_X => Direction::Left,
            dir => dir,
        };
    }

    let target = state
        .drops
        .iter()
        .filter(|d| !d.kind.is_hazard())
        .filter_map(|d| {
            let ticks = ticks_to_paddle(d, player)?;
            let gap = ((d.pos.x - player.x).abs() - PLAYER_HALF_WIDTH * 0.8).max(0.0);
            (gap <= ticks * PLAYER_SPEED).then_some((ticks, d))
        })
        .min_by(|(ta, a), (tb, b)| ta.total_cmp(tb).then(b.reward.cmp(&a.reward)));

    match target {
        Some((_, drop)) => toward(player.x, drop.pos.x),
        None => Direction::None,
    }
}
