//! Held-key polling
//!
//! The one place that talks to the keyboard. Everything downstream sees an
//! opaque [`TickInput`], so the simulation is not tied to any input device.
//! Bindings: arrows move the hunter, WASD moves the ghost, L toggles the
//! light, R restarts from the terminal screen, Q or Escape quits.

use macroquad::prelude::{is_key_down, is_key_pressed, KeyCode};

use crate::sim::{HeldDir, TickInput};

/// Sample the keyboard for the current frame.
///
/// Movement uses held keys; toggle/restart/quit are edge-triggered presses
/// so one tap is one action.
pub fn poll() -> TickInput {
    TickInput {
        hunter: HeldDir {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
        },
        ghost: HeldDir {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
        },
        toggle_light: is_key_pressed(KeyCode::L),
        restart: is_key_pressed(KeyCode::R),
        quit: is_key_pressed(KeyCode::Q) || is_key_pressed(KeyCode::Escape),
    }
}
