//! Ghost Chase - a two-player hide-and-seek arcade game
//!
//! One player (the hunter) sweeps a directional light cone around a walled
//! arena to find and wear down the other player (the ghost), who stays
//! invisible outside the cone and wins by touching the hunter.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, visibility, events)
//! - `render`: macroquad renderer, read-only consumer of the simulation
//! - `launcher`: single-instance run handle for the lobby screen
//! - `input`: held-key polling into per-frame simulation input

pub mod error;
pub mod input;
pub mod launcher;
pub mod render;
pub mod sim;

pub use error::GameError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (matches the window)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Square bounding-box side for both players
    pub const ENTITY_EXTENT: f32 = 20.0;

    /// Movement in units per simulation frame at normalized input magnitude
    pub const HUNTER_SPEED: f32 = 2.0;
    pub const GHOST_SPEED: f32 = 1.0;

    pub const HUNTER_HEALTH: f32 = 100.0;
    pub const GHOST_HEALTH: f32 = 10.0;

    /// Light cone geometry
    pub const LIGHT_RADIUS: f32 = 200.0;
    /// Full cone angle is 60 degrees; membership tests use the half-angle
    pub const LIGHT_HALF_ANGLE: f32 = 30.0 * std::f32::consts::PI / 180.0;
    /// Arc samples in the rendered cone polygon
    pub const LIGHT_CONE_SEGMENTS: usize = 20;

    /// Battery meter
    pub const BATTERY_MAX: f32 = 100.0;
    pub const BATTERY_DRAIN_PER_FRAME: f32 = 0.5;
    /// Minimum time between light toggles
    pub const LIGHT_TOGGLE_COOLDOWN_MS: u64 = 500;

    /// Damage per frame the ghost spends inside the lit cone.
    /// Gradual attrition: a full battery is exactly enough to burn down a
    /// full-health ghost (200 frames of drain, 200 frames of damage).
    pub const LIGHT_DAMAGE_PER_FRAME: f32 = 0.05;

    /// Center distance at which the ghost captures the hunter
    pub const CAPTURE_DISTANCE: f32 = 20.0;

    /// Battery pickup
    pub const PICKUP_RADIUS: f32 = 30.0;
    pub const PICKUP_RESTORE: f32 = 50.0;
    pub const PICKUP_SPAWN_INTERVAL_MS: u64 = 15_000;
    pub const PICKUP_LIFETIME_MS: u64 = 15_000;

    /// Ghost detector clamp range
    pub const DETECTOR_MAX_RANGE: f32 = 400.0;

    /// Simulation rates: active play and the game-over screen
    pub const SIM_HZ: u32 = 60;
    pub const TERMINAL_HZ: u32 = 30;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
