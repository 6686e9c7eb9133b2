//! Read-only view of a finished tick, for the renderer

use serde::Serialize;

use super::state::{DropKind, GameEvent, GamePhase, GameState, ParticleTag};

/// What the renderer needs to draw a drop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub kind: DropKind,
}

/// What the renderer needs to draw a particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub tag: ParticleTag,
}

/// Render-ready state after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub era: &'static str,
    pub proposal_meter: f32,
    pub player_x: f32,
    pub player_glow: f32,
    pub drops: Vec<DropView>,
    pub particles: Vec<ParticleView>,
    pub phase: GamePhase,
    /// Events raised during this tick
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            score: state.hud.score,
            lives: state.hud.lives,
            level: state.hud.level,
            era: state.hud.era(),
            proposal_meter: state.hud.proposal_meter,
            player_x: state.player.x,
            player_glow: state.player.glow,
            drops: state
                .drops
                .iter()
                .map(|d| DropView {
                    id: d.id,
                    x: d.pos.x,
                    y: d.pos.y,
                    rotation: d.rotation,
                    kind: d.kind,
                })
                .collect(),
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    x: p.pos.x,
                    y: p.pos.y,
                    tag: p.tag,
                })
                .collect(),
            phase: state.phase,
            events: state.events.clone(),
        }
    }

    /// Serialize for a JavaScript or file consumer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Did this tick raise a matching event?
    pub fn has_event(&self, pred: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snap = Snapshot::capture(&GameState::new());
        assert_eq!(snap.score, 0);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.era, "Fearless");
        assert_eq!(snap.proposal_meter, 0.0);
        assert_eq!(snap.player_x, 450.0);
        assert_eq!(snap.phase, GamePhase::Idle);
        assert!(snap.drops.is_empty() && snap.particles.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = Snapshot::capture(&GameState::new()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["era"], "Fearless");
        assert_eq!(value["phase"], "Idle");
        assert_eq!(value["lives"], 3);
        assert!(value["drops"].as_array().unwrap().is_empty());
    }
}
