//! Player entities: a shared base record plus per-role extensions
//!
//! Two fixed roles, so no trait objects: the hunter and ghost structs embed
//! the same [`Entity`] base and add their role-specific state. All mutation
//! goes through the few methods here; the renderer only ever reads.

use glam::Vec2;

use crate::consts::*;

/// Which role an entity plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hunter,
    Ghost,
}

/// State shared by both players. `pos` is the top-left corner of the
/// 20x20 bounding box.
#[derive(Debug, Clone)]
pub struct Entity {
    pub pos: Vec2,
    /// Units per simulation frame at normalized input magnitude
    pub speed: f32,
    pub health: f32,
    pub alive: bool,
    pub kind: EntityKind,
}

impl Entity {
    fn new(kind: EntityKind, pos: Vec2, speed: f32, health: f32) -> Self {
        Self {
            pos,
            speed,
            health,
            alive: true,
            kind,
        }
    }

    /// Center of the bounding box, used by cone and proximity tests
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENTITY_EXTENT / 2.0)
    }
}

/// The seeking player: carries the flashlight and its battery
#[derive(Debug, Clone)]
pub struct Hunter {
    pub core: Entity,
    pub light_on: bool,
    /// Battery charge in [0, 100]
    pub battery: f32,
    /// Timestamp of the last light toggle, for the toggle cooldown
    pub last_toggle_ms: u64,
}

impl Hunter {
    pub fn new(pos: Vec2) -> Self {
        Self {
            core: Entity::new(EntityKind::Hunter, pos, HUNTER_SPEED, HUNTER_HEALTH),
            light_on: false,
            battery: BATTERY_MAX,
            last_toggle_ms: 0,
        }
    }

    /// Drain one frame's worth of battery while the light is on.
    ///
    /// Returns whether the light remains usable. The frame the battery
    /// reaches zero this returns false and the caller must force the light
    /// off.
    pub fn drain_light(&mut self) -> bool {
        self.battery = (self.battery - BATTERY_DRAIN_PER_FRAME).max(0.0);
        self.battery > 0.0
    }

    /// Restore battery, capped at the maximum
    pub fn recharge(&mut self, amount: f32) {
        self.battery = (self.battery + amount).min(BATTERY_MAX);
    }
}

/// The hiding player: invisible unless caught in the light this frame
#[derive(Debug, Clone)]
pub struct Ghost {
    pub core: Entity,
    /// Recomputed from cone membership every frame; never persists
    pub visible_this_frame: bool,
}

impl Ghost {
    pub fn new(pos: Vec2) -> Self {
        Self {
            core: Entity::new(EntityKind::Ghost, pos, GHOST_SPEED, GHOST_HEALTH),
            visible_this_frame: false,
        }
    }

    /// Subtract health and clamp the alive flag when it reaches zero
    pub fn apply_damage(&mut self, amount: f32) {
        self.core.health -= amount;
        if self.core.health <= 0.0 {
            self.core.alive = false;
        }
    }
}
