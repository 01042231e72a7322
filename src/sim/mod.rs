//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only; timestamps are supplied by the caller, never sampled
//! - Seeded RNG only (owned by the world-event spawner)
//! - No rendering or platform dependencies

pub mod arena;
pub mod entity;
pub mod events;
pub mod state;
pub mod tick;
pub mod visibility;

pub use arena::{collides, try_move, wall_layout, Wall};
pub use entity::{Entity, EntityKind, Ghost, Hunter};
pub use events::{BatteryPickup, WorldEvents};
pub use state::{FrameView, GameState, Winner};
pub use tick::{step, HeldDir, TickInput};
pub use visibility::{cone_contains, cone_polygon, detector_distance, facing_angle};
