//! Paddle catch detection
//!
//! The catch area is a fixed axis-aligned box around the paddle center,
//! roughly the paddle's visual footprint. Drops are tested as points, so a
//! drop's visual radius never matters.

use glam::Vec2;

use super::state::Player;
use crate::consts::{PLAYER_CATCH_HALF_HEIGHT, PLAYER_HALF_WIDTH};

/// Axis-aligned catch box (open bounds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchBox {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl CatchBox {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Catch box for the paddle's current position
    pub fn for_player(player: &Player) -> Self {
        Self::new(
            Vec2::new(player.x, player.y),
            Vec2::new(PLAYER_HALF_WIDTH, PLAYER_CATCH_HALF_HEIGHT),
        )
    }

    /// Strict containment: a point exactly on the edge is not caught
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x < self.half_extents.x && d.y < self.half_extents.y
    }
}

/// Does the paddle catch a drop at `point`?
#[inline]
pub fn paddle_catches(player: &Player, point: Vec2) -> bool {
    CatchBox::for_player(player).contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32) -> Player {
        Player {
            x,
            ..Default::default()
        }
    }

    #[test]
    fn test_center_hit() {
        let player = player_at(450.0);
        assert!(paddle_catches(&player, Vec2::new(450.0, player.y)));
    }

    #[test]
    fn test_edges_are_exclusive() {
        let player = player_at(450.0);
        assert!(paddle_catches(&player, Vec2::new(509.9, player.y + 23.9)));
        assert!(!paddle_catches(&player, Vec2::new(510.0, player.y)));
        assert!(!paddle_catches(&player, Vec2::new(390.0, player.y)));
        assert!(!paddle_catches(&player, Vec2::new(450.0, player.y - 24.0)));
    }

    #[test]
    fn test_box_follows_player() {
        let player = player_at(100.0);
        let catch_box = CatchBox::for_player(&player);
        assert_eq!(catch_box.center, Vec2::new(100.0, player.y));
        assert!(!catch_box.contains(Vec2::new(450.0, player.y)));
    }
}
