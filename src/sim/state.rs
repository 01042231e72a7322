//! Complete game state and the per-frame render snapshot
//!
//! One `GameState` value owns everything mutable; only the simulation loop
//! writes to it. `reset` replaces the whole value, so there is no hidden
//! global and no re-entrant construction. Once `over` is set the state is
//! terminal until a reset.

use glam::Vec2;

use super::arena::{wall_layout, Wall};
use super::entity::{Ghost, Hunter};
use super::events::WorldEvents;
use crate::consts::*;

/// Match outcome, set together with `over`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Hunter,
    Ghost,
}

/// Read-only snapshot the renderer consumes alongside the entities.
///
/// Rebuilt at the end of every step; holds exactly the visibility results
/// the renderer must not recompute for itself.
#[derive(Debug, Clone, Default)]
pub struct FrameView {
    /// Cone membership result for this frame
    pub ghost_visible: bool,
    /// Hunter facing angle the cone was built from
    pub facing: f32,
    /// Cone polygon (apex + arc), present only while the light is on
    pub cone: Option<Vec<Vec2>>,
    /// Hunter-to-ghost distance clamped to the detector range
    pub detector_distance: f32,
}

/// Fixed spawn points; both are collision-free in the arena layout
pub const HUNTER_SPAWN: Vec2 = Vec2::new(100.0, 100.0);
pub const GHOST_SPAWN: Vec2 = Vec2::new(650.0, 450.0);

#[derive(Debug, Clone)]
pub struct GameState {
    pub hunter: Hunter,
    pub ghost: Ghost,
    pub walls: Vec<Wall>,
    pub events: WorldEvents,
    pub over: bool,
    pub winner: Option<Winner>,
    pub view: FrameView,
    /// Run seed, reused on reset for a deterministic restart
    seed: u64,
}

impl GameState {
    /// Fresh match state at `now_ms`
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let hunter = Hunter::new(HUNTER_SPAWN);
        let ghost = Ghost::new(GHOST_SPAWN);
        let view = FrameView {
            detector_distance: (ghost.core.pos - hunter.core.pos)
                .length()
                .min(DETECTOR_MAX_RANGE),
            ..FrameView::default()
        };
        Self {
            hunter,
            ghost,
            walls: wall_layout(),
            events: WorldEvents::new(seed, now_ms),
            over: false,
            winner: None,
            view,
            seed,
        }
    }

    /// Reinitialize the entire match from scratch
    pub fn reset(&mut self, now_ms: u64) {
        *self = Self::new(self.seed, now_ms);
    }
}
