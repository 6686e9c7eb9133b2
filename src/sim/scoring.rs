//! Progression and scoring
//!
//! Goodies add score and fill the proposal meter; hazards cost a life.
//! Level rises by at most one per catch, even if a reward crosses several
//! thresholds at once.

use super::state::{DropKind, Hud, Player};
use crate::consts::{CATCH_GLOW, LEVEL_SCORE_STEP, METER_MAX, METER_PER_POINT};

/// What a catch did to the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Scored { reward: u32, leveled_up: bool },
    LostLife { lives_left: u8 },
}

/// Score needed to leave `level`
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(LEVEL_SCORE_STEP)
}

/// Apply a caught drop to the HUD and paddle
pub fn apply_catch(hud: &mut Hud, player: &mut Player, kind: DropKind) -> CatchOutcome {
    if kind.is_hazard() {
        hud.lives = hud.lives.saturating_sub(1);
        return CatchOutcome::LostLife {
            lives_left: hud.lives,
        };
    }

    let reward = kind.reward();
    hud.score = hud.score.saturating_add(reward);
    hud.proposal_meter = (hud.proposal_meter + reward as f32 * METER_PER_POINT).min(METER_MAX);

    let leveled_up = hud.score >= level_threshold(hud.level);
    if leveled_up {
        hud.level += 1;
    }
    player.glow = CATCH_GLOW;

    CatchOutcome::Scored { reward, leveled_up }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ring() {
        let mut hud = Hud::default();
        let mut player = Player::default();
        let outcome = apply_catch(&mut hud, &mut player, DropKind::Ring);
        assert_eq!(
            outcome,
            CatchOutcome::Scored {
                reward: 10,
                leveled_up: false
            }
        );
        assert_eq!(hud.score, 10);
        assert!((hud.proposal_meter - 6.0).abs() < 1e-4);
        assert_eq!(hud.level, 1);
        assert_eq!(player.glow, CATCH_GLOW);
    }

    #[test]
    fn test_level_up_at_threshold() {
        let mut hud = Hud {
            score: 110,
            ..Default::default()
        };
        let mut player = Player::default();
        apply_catch(&mut hud, &mut player, DropKind::Ring);
        assert_eq!(hud.score, 120);
        assert_eq!(hud.level, 2);
        assert_eq!(hud.era(), "Red");
    }

    #[test]
    fn test_single_level_per_catch() {
        let mut hud = Hud {
            score: 500,
            ..Default::default()
        };
        let mut player = Player::default();
        apply_catch(&mut hud, &mut player, DropKind::Heart);
        assert_eq!(hud.level, 2);
    }

    #[test]
    fn test_hazard_costs_life_only() {
        let mut hud = Hud {
            score: 40,
            proposal_meter: 24.0,
            ..Default::default()
        };
        let mut player = Player::default();
        let outcome = apply_catch(&mut hud, &mut player, DropKind::Paparazzi);
        assert_eq!(outcome, CatchOutcome::LostLife { lives_left: 2 });
        assert_eq!(hud.score, 40);
        assert_eq!(hud.proposal_meter, 24.0);
        assert_eq!(player.glow, 0.0);
    }

    #[test]
    fn test_lives_floor_and_meter_ceiling() {
        let mut hud = Hud {
            lives: 0,
            proposal_meter: 95.0,
            ..Default::default()
        };
        let mut player = Player::default();
        apply_catch(&mut hud, &mut player, DropKind::Paparazzi);
        assert_eq!(hud.lives, 0);
        apply_catch(&mut hud, &mut player, DropKind::Star);
        assert_eq!(hud.proposal_meter, METER_MAX);
    }
}
