//! Game phase transitions
//!
//! ```text
//! Idle <-> Running --(meter full)--> Won
//!              \----(no lives)----> GameOver
//! Won / GameOver --(reset)--> Idle
//! ```
//!
//! When the meter fills and the last life goes on the same tick, `Won` is
//! taken: the meter is checked first.

use super::effects;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// Apply the host's run flag (start an idle game / pause a running one)
///
/// Terminal phases ignore it; leaving them takes a reset.
pub fn apply_run_request(state: &mut GameState, run: bool) {
    match (state.phase, run) {
        (GamePhase::Idle, true) => {
            log::info!("Game started");
            state.phase = GamePhase::Running;
            state.events.push(GameEvent::Started);
        }
        (GamePhase::Running, false) => {
            log::info!("Game paused");
            state.phase = GamePhase::Idle;
            state.events.push(GameEvent::Paused);
        }
        _ => {}
    }
}

/// End-of-tick check for win/loss
pub fn evaluate(state: &mut GameState, rng: &mut impl RandomSource) {
    if state.phase != GamePhase::Running {
        return;
    }

    if state.hud.meter_full() {
        log::info!("Proposal meter full - won with score {}", state.hud.score);
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
        effects::celebrate(state, rng);
    } else if state.hud.out_of_lives() {
        log::info!(
            "Out of lives - game over at level {} with score {}",
            state.hud.level,
            state.hud.score
        );
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::METER_MAX;
    use crate::sim::rng::seeded;

    #[test]
    fn test_start_and_pause() {
        let mut state = GameState::new();
        apply_run_request(&mut state, false);
        assert_eq!(state.phase, GamePhase::Idle);
        apply_run_request(&mut state, true);
        assert_eq!(state.phase, GamePhase::Running);
        apply_run_request(&mut state, true);
        assert_eq!(state.phase, GamePhase::Running);
        apply_run_request(&mut state, false);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.events, vec![GameEvent::Started, GameEvent::Paused]);
    }

    #[test]
    fn test_terminal_ignores_run_request() {
        let mut state = GameState::new();
        for phase in [GamePhase::GameOver, GamePhase::Won] {
            state.phase = phase;
            apply_run_request(&mut state, true);
            assert_eq!(state.phase, phase);
            apply_run_request(&mut state, false);
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_meter_beats_lives() {
        let mut state = GameState::new();
        let mut rng = seeded(9);
        state.phase = GamePhase::Running;
        state.hud.lives = 0;
        state.hud.proposal_meter = METER_MAX;
        evaluate(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::Won);
        assert_eq!(state.events, vec![GameEvent::Won, GameEvent::Celebration]);
    }

    #[test]
    fn test_game_over() {
        let mut state = GameState::new();
        let mut rng = seeded(9);
        state.phase = GamePhase::Running;
        state.hud.lives = 0;
        evaluate(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_idle_never_transitions() {
        let mut state = GameState::new();
        let mut rng = seeded(9);
        state.hud.lives = 0;
        evaluate(&mut state, &mut rng);
        assert_eq!(state.phase, GamePhase::Idle);
    }
}
