//! Renderer: simulation state to pixels
//!
//! Strictly a read-only consumer of `GameState` and its `FrameView`
//! snapshot; nothing here mutates the simulation. Cone membership and
//! detector distance come precomputed from the visibility engine. Missing
//! textures degrade to solid-color placeholders.

pub mod assets;

pub use assets::Assets;

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{GameState, Winner};

const BACKGROUND: Color = Color::new(0.20, 0.20, 0.20, 1.0);
const WALL_COLOR: Color = Color::new(0.70, 0.70, 0.70, 1.0);
const HUNTER_COLOR: Color = Color::new(1.0, 0.78, 0.39, 1.0);
const GHOST_COLOR: Color = Color::new(0.78, 0.78, 1.0, 1.0);
const LIGHT_COLOR: Color = Color::new(1.0, 1.0, 0.59, 0.39);
const PICKUP_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Draw one frame of the match
pub fn draw(state: &GameState, assets: &Assets) {
    draw_background(assets);
    draw_walls(state);
    draw_pickup(state);
    draw_hunter(state, assets);
    draw_light_cone(state);
    draw_ghost(state, assets);
    draw_battery_bar(state);
    draw_detector_bar(state);
    if state.over {
        draw_game_over(state);
    }
}

fn draw_background(assets: &Assets) {
    clear_background(BACKGROUND);
    if let Some(ref texture) = assets.background {
        draw_texture_ex(
            texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(FIELD_WIDTH, FIELD_HEIGHT)),
                ..Default::default()
            },
        );
    }
}

fn draw_walls(state: &GameState) {
    for wall in &state.walls {
        draw_rectangle(wall.x, wall.y, wall.width, wall.height, WALL_COLOR);
    }
}

fn draw_pickup(state: &GameState) {
    if let Some(pickup) = state.events.pickup() {
        draw_circle(pickup.pos.x, pickup.pos.y, 10.0, PICKUP_COLOR);
    }
}

fn draw_sprite(texture: &Option<Texture2D>, x: f32, y: f32, fallback: Color) {
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(ENTITY_EXTENT, ENTITY_EXTENT)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, ENTITY_EXTENT, ENTITY_EXTENT, fallback),
    }
}

fn draw_hunter(state: &GameState, assets: &Assets) {
    if !state.hunter.core.alive {
        return;
    }
    let pos = state.hunter.core.pos;
    draw_sprite(&assets.hunter, pos.x, pos.y, HUNTER_COLOR);
}

/// Translucent cone polygon, drawn as a fan from the precomputed points
fn draw_light_cone(state: &GameState) {
    let Some(ref points) = state.view.cone else {
        return;
    };
    let apex = vec2(points[0].x, points[0].y);
    for pair in points[1..].windows(2) {
        draw_triangle(
            apex,
            vec2(pair[0].x, pair[0].y),
            vec2(pair[1].x, pair[1].y),
            LIGHT_COLOR,
        );
    }
}

fn draw_ghost(state: &GameState, assets: &Assets) {
    if !state.ghost.core.alive {
        return;
    }
    let pos = state.ghost.core.pos;
    if state.view.ghost_visible {
        draw_sprite(&assets.ghost, pos.x, pos.y, GHOST_COLOR);
        let health = format!("HP: {}", state.ghost.core.health.max(0.0) as i32);
        draw_text(&health, pos.x, pos.y - 6.0, 18.0, WHITE);
    }
    // Faint outline so the ghost player can track themselves even unlit
    draw_rectangle_lines(
        pos.x,
        pos.y,
        ENTITY_EXTENT,
        ENTITY_EXTENT,
        1.0,
        Color::new(0.39, 0.39, 1.0, 0.5),
    );
}

fn draw_battery_bar(state: &GameState) {
    let width = 100.0;
    let height = 20.0;
    let x = FIELD_WIDTH - width - 10.0;
    let y = 10.0;

    let level = state.hunter.battery;
    let fill_color = if level > 70.0 {
        GREEN
    } else if level > 30.0 {
        YELLOW
    } else {
        RED
    };

    draw_rectangle_lines(x, y, width, height, 2.0, LIGHTGRAY);
    let fill = level / BATTERY_MAX * (width - 4.0);
    draw_rectangle(x + 2.0, y + 2.0, fill, height - 4.0, fill_color);
    draw_text(&format!("{}%", level as i32), x + width / 2.0 - 20.0, y + 16.0, 18.0, WHITE);
}

/// Proximity readout: fuller and redder the closer the ghost is
fn draw_detector_bar(state: &GameState) {
    let width = 150.0;
    let height = 20.0;
    let x = 10.0;
    let y = 10.0;

    let distance = state.view.detector_distance;
    let color = if distance < 100.0 {
        RED
    } else if distance < 200.0 {
        ORANGE
    } else {
        GREEN
    };

    draw_rectangle_lines(x, y, width, height, 2.0, LIGHTGRAY);
    let fill = (1.0 - distance / DETECTOR_MAX_RANGE) * (width - 4.0);
    draw_rectangle(x + 2.0, y + 2.0, fill.max(0.0), height - 4.0, color);
    draw_text("Ghost Detector", x, y + height + 14.0, 18.0, WHITE);
}

fn draw_centered(text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(
        text,
        FIELD_WIDTH / 2.0 - dims.width / 2.0,
        y,
        size as f32,
        color,
    );
}

fn draw_game_over(state: &GameState) {
    draw_rectangle(
        0.0,
        0.0,
        FIELD_WIDTH,
        FIELD_HEIGHT,
        Color::new(0.0, 0.0, 0.0, 0.7),
    );
    draw_centered("GAME OVER", 250.0, 72, RED);
    let winner = match state.winner {
        Some(Winner::Hunter) => "Hunter wins!",
        Some(Winner::Ghost) => "Ghost wins!",
        None => "",
    };
    draw_centered(winner, 330.0, 48, WHITE);
    draw_centered("Press R to restart or Q to quit", 400.0, 32, LIGHTGRAY);
}
