//! Per-frame simulation step
//!
//! `step` is a pure transition over (state, held input, timestamp); the
//! timestamp is supplied by the caller so runs are deterministic and
//! testable. Frame order matters: move both entities, resolve hunter
//! interactions, advance world events, then evaluate the win condition.

use glam::Vec2;

use super::state::{FrameView, GameState, Winner};
use super::visibility::{cone_contains, cone_polygon, detector_distance, facing_angle};
use crate::consts::*;

/// Held direction keys for one player
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldDir {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDir {
    /// Raw held axes in {-1, 0, 1}, before diagonal scaling
    pub fn raw(&self) -> (f32, f32) {
        let dx = (self.right as i8 - self.left as i8) as f32;
        let dy = (self.down as i8 - self.up as i8) as f32;
        (dx, dy)
    }

    /// Unit movement vector; both axes held scales each by 1/sqrt(2) so
    /// diagonals are no faster than straight lines
    pub fn delta(&self) -> Vec2 {
        let (dx, dy) = self.raw();
        if dx != 0.0 && dy != 0.0 {
            Vec2::new(dx, dy) * std::f32::consts::FRAC_1_SQRT_2
        } else {
            Vec2::new(dx, dy)
        }
    }
}

/// Input commands for a single step (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Hunter movement (arrow keys)
    pub hunter: HeldDir,
    /// Ghost movement (WASD)
    pub ghost: HeldDir,
    /// Edge-triggered light toggle
    pub toggle_light: bool,
    /// Restart from the terminal screen
    pub restart: bool,
    /// Cooperative quit; observed by the host loop, not by `step`
    pub quit: bool,
}

/// Advance the game by one fixed frame at timestamp `now_ms`.
///
/// Once the state is terminal only a restart is processed; everything else
/// waits for the host to act on `quit`.
pub fn step(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if state.over {
        if input.restart {
            log::info!("restarting match");
            state.reset(now_ms);
        }
        return;
    }

    // Light toggle: edge action behind a cooldown so one keypress cannot
    // flicker the lamp
    if input.toggle_light
        && now_ms.saturating_sub(state.hunter.last_toggle_ms) > LIGHT_TOGGLE_COOLDOWN_MS
    {
        state.hunter.light_on = !state.hunter.light_on;
        state.hunter.last_toggle_ms = now_ms;
    }

    // Movement: each entity independently, blocked moves fully rejected
    let hunter_delta = input.hunter.delta() * state.hunter.core.speed;
    state.hunter.core.pos = super::arena::try_move(
        &state.walls,
        state.hunter.core.pos,
        hunter_delta,
        ENTITY_EXTENT,
    );
    let ghost_delta = input.ghost.delta() * state.ghost.core.speed;
    state.ghost.core.pos = super::arena::try_move(
        &state.walls,
        state.ghost.core.pos,
        ghost_delta,
        ENTITY_EXTENT,
    );

    // Visibility is never sticky: false until this frame's cone test says
    // otherwise
    state.ghost.visible_this_frame = false;

    // Hunter interaction resolution
    let (raw_dx, raw_dy) = input.hunter.raw();
    let facing = facing_angle(raw_dx, raw_dy);
    let hunter_center = state.hunter.core.center();

    if state.hunter.light_on
        && cone_contains(hunter_center, facing, state.ghost.core.center())
    {
        state.ghost.visible_this_frame = true;
        state.ghost.apply_damage(LIGHT_DAMAGE_PER_FRAME);
    }

    // Capture: the ghost only has to touch the hunter
    if (state.ghost.core.center() - hunter_center).length() < CAPTURE_DISTANCE {
        state.hunter.core.alive = false;
    }

    // Battery pickup collection
    if let Some(amount) = state.events.try_collect(state.hunter.core.pos) {
        state.hunter.recharge(amount);
        log::debug!("battery collected, charge now {:.0}", state.hunter.battery);
    }

    // Drain after damage resolution: a full battery yields exactly 200
    // damage frames before the lamp dies with it
    if state.hunter.light_on && !state.hunter.drain_light() {
        state.hunter.light_on = false;
    }

    // Timed world events
    state.events.advance(now_ms, &state.walls);

    // Win condition; ghost death is checked first, so if both fall in the
    // same frame the hunter takes the match
    if !state.ghost.core.alive {
        state.over = true;
        state.winner = Some(Winner::Hunter);
    } else if !state.hunter.core.alive {
        state.over = true;
        state.winner = Some(Winner::Ghost);
    }
    if state.over {
        log::info!("match over, winner: {:?}", state.winner);
    }

    // Render snapshot
    state.view = FrameView {
        ghost_visible: state.ghost.visible_this_frame,
        facing,
        cone: (state.hunter.core.alive && state.hunter.light_on)
            .then(|| cone_polygon(hunter_center, facing)),
        detector_distance: detector_distance(state.hunter.core.pos, state.ghost.core.pos),
    };
}
