//! Static wall layout and axis-aligned overlap tests
//!
//! The arena is a fixed compiled layout: four border walls closing off the
//! 800x600 field plus ten interior walls. Movement never slides along a
//! wall; a blocked move is rejected outright and the mover stays put.

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned wall rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open AABB overlap against a square box at (x, y)
    #[inline]
    fn overlaps_box(&self, x: f32, y: f32, extent: f32) -> bool {
        x < self.x + self.width
            && x + extent > self.x
            && y < self.y + self.height
            && y + extent > self.y
    }
}

/// The fixed arena: 10 interior walls plus the 4 borders.
///
/// Border walls come last and guarantee nothing leaves the field.
pub fn wall_layout() -> Vec<Wall> {
    vec![
        // Interior
        Wall::new(300.0, 100.0, 200.0, 20.0),
        Wall::new(100.0, 300.0, 20.0, 200.0),
        Wall::new(400.0, 400.0, 200.0, 20.0),
        Wall::new(200.0, 200.0, 20.0, 150.0),
        Wall::new(500.0, 200.0, 20.0, 150.0),
        Wall::new(250.0, 100.0, 20.0, 100.0),
        Wall::new(450.0, 100.0, 20.0, 100.0),
        Wall::new(600.0, 150.0, 20.0, 150.0),
        Wall::new(150.0, 450.0, 150.0, 20.0),
        Wall::new(550.0, 480.0, 150.0, 20.0),
        // Borders
        Wall::new(0.0, 0.0, FIELD_WIDTH, 20.0),
        Wall::new(0.0, 0.0, 20.0, FIELD_HEIGHT),
        Wall::new(FIELD_WIDTH - 20.0, 0.0, 20.0, FIELD_HEIGHT),
        Wall::new(0.0, FIELD_HEIGHT - 20.0, FIELD_WIDTH, 20.0),
    ]
}

/// Does a square box with top-left (x, y) overlap any wall?
///
/// Used both to block movement and to validate pickup placement.
pub fn collides(walls: &[Wall], x: f32, y: f32, extent: f32) -> bool {
    walls.iter().any(|w| w.overlaps_box(x, y, extent))
}

/// Attempt a move: returns the destination if it is wall-free, otherwise
/// the unchanged origin. No clamping to the wall edge.
pub fn try_move(walls: &[Wall], pos: Vec2, delta: Vec2, extent: f32) -> Vec2 {
    let dest = pos + delta;
    if collides(walls, dest.x, dest.y, extent) {
        pos
    } else {
        dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn open_floor_is_free() {
        let walls = wall_layout();
        assert!(!collides(&walls, 100.0, 100.0, ENTITY_EXTENT)); // hunter spawn
        assert!(!collides(&walls, 650.0, 450.0, ENTITY_EXTENT)); // ghost spawn
        assert!(!collides(&walls, 400.0, 300.0, ENTITY_EXTENT));
    }

    #[test]
    fn wall_overlap_detected() {
        let walls = wall_layout();
        // Dead center of the first interior wall
        assert!(collides(&walls, 390.0, 105.0, ENTITY_EXTENT));
        // Box only grazing a wall corner still counts
        assert!(collides(&walls, 290.0, 90.0, ENTITY_EXTENT));
        // Borders
        assert!(collides(&walls, 5.0, 300.0, ENTITY_EXTENT));
        assert!(collides(&walls, 790.0, 300.0, ENTITY_EXTENT));
    }

    #[test]
    fn touching_edge_is_not_overlap() {
        // Half-open intervals: a box ending exactly where a wall starts is free
        let walls = vec![Wall::new(100.0, 100.0, 50.0, 50.0)];
        assert!(!collides(&walls, 80.0, 100.0, 20.0));
        assert!(collides(&walls, 80.1, 100.0, 20.0));
    }

    #[test]
    fn blocked_move_leaves_position_unchanged() {
        let walls = wall_layout();
        let pos = Vec2::new(278.0, 105.0); // just left of wall at x=300
        let moved = try_move(&walls, pos, Vec2::new(4.0, 0.0), ENTITY_EXTENT);
        assert_eq!(moved, pos);
    }

    #[test]
    fn free_move_commits() {
        let walls = wall_layout();
        let pos = Vec2::new(100.0, 100.0);
        let moved = try_move(&walls, pos, Vec2::new(2.0, 0.0), ENTITY_EXTENT);
        assert_eq!(moved, Vec2::new(102.0, 100.0));
    }

    proptest! {
        /// Any box overlapping a wall rectangle must register as a collision,
        /// and any box strictly inside the free play field must not.
        #[test]
        fn collision_matches_rect_overlap(x in 20.0f32..760.0, y in 20.0f32..560.0) {
            let walls = wall_layout();
            let expected = walls.iter().any(|w| {
                x < w.x + w.width
                    && x + ENTITY_EXTENT > w.x
                    && y < w.y + w.height
                    && y + ENTITY_EXTENT > w.y
            });
            prop_assert_eq!(collides(&walls, x, y, ENTITY_EXTENT), expected);
        }

        /// try_move either commits the full delta or rejects it entirely.
        #[test]
        fn moves_never_clamp(
            x in 25.0f32..755.0,
            y in 25.0f32..555.0,
            dx in -3.0f32..3.0,
            dy in -3.0f32..3.0,
        ) {
            let walls = wall_layout();
            prop_assume!(!collides(&walls, x, y, ENTITY_EXTENT));
            let pos = Vec2::new(x, y);
            let delta = Vec2::new(dx, dy);
            let moved = try_move(&walls, pos, delta, ENTITY_EXTENT);
            prop_assert!(moved == pos || moved == pos + delta);
        }
    }
}
