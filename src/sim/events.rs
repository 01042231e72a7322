//! Timed world events: the battery pickup
//!
//! A two-state machine (absent/present) owning the only pickup instance and
//! the seeded RNG that places it. Spawn eligibility is anchored to pickup
//! creation time, not consumption time: collecting a pickup early does not
//! shorten the wait for the next one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::{collides, Wall};
use crate::consts::*;

/// How many placement samples to try per frame before giving up and
/// retrying next frame. The arena always has free interior space, so a
/// failure here is effectively impossible.
const MAX_PLACEMENT_TRIES: u32 = 64;

/// A battery recharge pickup, at most one alive at a time
#[derive(Debug, Clone)]
pub struct BatteryPickup {
    /// Center of the pickup
    pub pos: Vec2,
    pub spawn_time_ms: u64,
}

/// Owner of the pickup lifecycle
#[derive(Debug, Clone)]
pub struct WorldEvents {
    pickup: Option<BatteryPickup>,
    last_spawn_ms: u64,
    rng: Pcg32,
}

impl WorldEvents {
    pub fn new(seed: u64, now_ms: u64) -> Self {
        Self {
            pickup: None,
            last_spawn_ms: now_ms,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The current pickup, if one is on the field
    #[inline]
    pub fn pickup(&self) -> Option<&BatteryPickup> {
        self.pickup.as_ref()
    }

    /// Advance spawn/expiry timers to `now_ms`
    pub fn advance(&mut self, now_ms: u64, walls: &[Wall]) {
        if self.pickup.is_none()
            && now_ms.saturating_sub(self.last_spawn_ms) > PICKUP_SPAWN_INTERVAL_MS
        {
            if let Some(pos) = self.sample_free_position(walls) {
                log::debug!("battery pickup spawned at ({:.0}, {:.0})", pos.x, pos.y);
                self.pickup = Some(BatteryPickup {
                    pos,
                    spawn_time_ms: now_ms,
                });
                // Anchor the next eligibility window to creation time
                self.last_spawn_ms = now_ms;
            }
        }

        if let Some(ref pickup) = self.pickup {
            if now_ms.saturating_sub(pickup.spawn_time_ms) > PICKUP_LIFETIME_MS {
                log::debug!("battery pickup expired uncollected");
                self.pickup = None;
            }
        }
    }

    /// Collect the pickup if the hunter is within range.
    ///
    /// Returns the battery amount restored, or None if out of range or no
    /// pickup exists.
    pub fn try_collect(&mut self, hunter_pos: Vec2) -> Option<f32> {
        let pickup = self.pickup.as_ref()?;
        if (pickup.pos - hunter_pos).length() < PICKUP_RADIUS {
            self.pickup = None;
            Some(PICKUP_RESTORE)
        } else {
            None
        }
    }

    /// Rejection-sample a collision-free interior position
    fn sample_free_position(&mut self, walls: &[Wall]) -> Option<Vec2> {
        for _ in 0..MAX_PLACEMENT_TRIES {
            let x = self.rng.random_range(50..=750) as f32;
            let y = self.rng.random_range(50..=550) as f32;
            if !collides(walls, x, y, ENTITY_EXTENT) {
                return Some(Vec2::new(x, y));
            }
        }
        // Never expected; retry on the next frame
        log::warn!("no free pickup position found this frame");
        None
    }
}
