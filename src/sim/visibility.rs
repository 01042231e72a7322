//! Light-cone geometry and the proximity detector
//!
//! Pure functions of current state. The membership test ("does the light
//! touch the ghost") is deliberately separate from the cone polygon the
//! renderer draws, so damage logic never depends on rendering. Walls do not
//! occlude the light.

use glam::Vec2;

use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Facing angle from the held movement direction.
///
/// Uses the raw held axes (before diagonal scaling); with no keys held the
/// hunter faces right (angle 0).
pub fn facing_angle(dx: f32, dy: f32) -> f32 {
    if dx == 0.0 && dy == 0.0 {
        0.0
    } else {
        dy.atan2(dx)
    }
}

/// Is `target` inside the light cone anchored at `apex` facing `facing`?
///
/// Inside means: Euclidean distance at most [`LIGHT_RADIUS`] (inclusive at
/// exactly the radius) and wrapped angular difference within the half-angle.
pub fn cone_contains(apex: Vec2, facing: f32, target: Vec2) -> bool {
    let to_target = target - apex;
    if to_target.length() > LIGHT_RADIUS {
        return false;
    }
    let bearing = to_target.y.atan2(to_target.x);
    normalize_angle(bearing - facing).abs() <= LIGHT_HALF_ANGLE
}

/// The cone polygon for the renderer: apex followed by arc samples.
///
/// Geometry only; never used by the membership test above.
pub fn cone_polygon(apex: Vec2, facing: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(LIGHT_CONE_SEGMENTS + 2);
    points.push(apex);
    for i in 0..=LIGHT_CONE_SEGMENTS {
        let t = i as f32 / LIGHT_CONE_SEGMENTS as f32;
        let theta = facing - LIGHT_HALF_ANGLE + t * 2.0 * LIGHT_HALF_ANGLE;
        points.push(apex + polar_to_cartesian(LIGHT_RADIUS, theta));
    }
    points
}

/// Raw hunter-to-ghost distance clamped to the detector range.
///
/// Read-only telemetry for the UI bar; closer means a stronger signal.
/// Never affects visibility and never mutates anything.
pub fn detector_distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length().min(DETECTOR_MAX_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn facing_defaults_right() {
        assert_eq!(facing_angle(0.0, 0.0), 0.0);
        assert_eq!(facing_angle(1.0, 0.0), 0.0);
        assert!((facing_angle(0.0, 1.0) - PI / 2.0).abs() < 1e-6);
        assert!((facing_angle(-1.0, 0.0).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let apex = Vec2::ZERO;
        assert!(cone_contains(apex, 0.0, Vec2::new(LIGHT_RADIUS, 0.0)));
        assert!(!cone_contains(apex, 0.0, Vec2::new(LIGHT_RADIUS + 0.1, 0.0)));
    }

    #[test]
    fn angular_boundary() {
        let apex = Vec2::ZERO;
        // Just inside the 30 degree half-angle
        let inside = polar_to_cartesian(100.0, LIGHT_HALF_ANGLE - 0.01);
        assert!(cone_contains(apex, 0.0, inside));
        // Just outside
        let outside = polar_to_cartesian(100.0, LIGHT_HALF_ANGLE + 0.01);
        assert!(!cone_contains(apex, 0.0, outside));
    }

    #[test]
    fn membership_wraps_across_pi() {
        // Facing 350 degrees, target bearing 10 degrees: 20 degrees apart,
        // well within the 30 degree half-angle despite the wraparound.
        let apex = Vec2::ZERO;
        let facing = 350.0f32.to_radians();
        let target = polar_to_cartesian(100.0, 10.0f32.to_radians());
        assert!(cone_contains(apex, facing, target));
    }

    #[test]
    fn behind_the_hunter_is_dark() {
        let apex = Vec2::new(110.0, 110.0);
        assert!(!cone_contains(apex, 0.0, Vec2::new(10.0, 110.0)));
    }

    #[test]
    fn polygon_shape() {
        let apex = Vec2::new(110.0, 110.0);
        let poly = cone_polygon(apex, 0.0);
        assert_eq!(poly.len(), LIGHT_CONE_SEGMENTS + 2);
        assert_eq!(poly[0], apex);
        for p in &poly[1..] {
            assert!(((*p - apex).length() - LIGHT_RADIUS).abs() < 1e-3);
        }
    }

    #[test]
    fn detector_clamps() {
        let a = Vec2::ZERO;
        assert_eq!(detector_distance(a, Vec2::new(100.0, 0.0)), 100.0);
        assert_eq!(
            detector_distance(a, Vec2::new(900.0, 0.0)),
            DETECTOR_MAX_RANGE
        );
    }

    proptest! {
        /// Targets safely inside both bounds are lit for any facing angle.
        #[test]
        fn inside_both_bounds_is_lit(
            facing in -PI..PI,
            offset in -0.4f32..0.4, // half-angle is ~0.524 rad
            dist in 1.0f32..190.0,
        ) {
            let apex = Vec2::new(110.0, 110.0);
            let target = apex + polar_to_cartesian(dist, facing + offset);
            prop_assert!(cone_contains(apex, facing, target));
        }

        /// Targets safely outside the radius are dark regardless of bearing.
        #[test]
        fn beyond_radius_is_dark(
            facing in -PI..PI,
            bearing in -PI..PI,
            dist in 201.0f32..1000.0,
        ) {
            let apex = Vec2::new(110.0, 110.0);
            let target = apex + polar_to_cartesian(dist, bearing);
            prop_assert!(!cone_contains(apex, facing, target));
        }

        /// Targets safely outside the angular bound are dark even in range.
        #[test]
        fn outside_angle_is_dark(
            facing in -PI..PI,
            extra in 0.65f32..3.0,
            dist in 1.0f32..190.0,
        ) {
            let apex = Vec2::new(110.0, 110.0);
            let target = apex + polar_to_cartesian(dist, facing + extra);
            prop_assert!(!cone_contains(apex, facing, target));
        }
    }
}
