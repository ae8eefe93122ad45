//! Yaw helpers. Angles are radians around +Y; a yaw of `t` faces
//! `(sin t, 0, cos t)`.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Wraps into `[-PI, PI]`. Rounding can land exactly on `PI`.
pub fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Signed shortest rotation from `from` to `to`, never longer than half a turn.
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Steps `current` toward `target` by at most `max_step` along the shortest
/// arc without overshooting. The result is wrapped.
pub fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = shortest_arc(current, target);
    let step = max_step.max(0.0);
    if delta.abs() <= step {
        return wrap_angle(target);
    }
    wrap_angle(current + step.copysign(delta))
}

pub fn heading_vector(yaw: f32) -> Vec3 {
    let (sin, cos) = yaw.sin_cos();
    Vec3::new(sin, 0.0, cos)
}

/// Yaw of the horizontal direction from `target` toward `eye`.
pub fn azimuth_between(eye: Vec3, target: Vec3) -> f32 {
    (eye.x - target.x).atan2(eye.z - target.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn wrap_keeps_range() {
        for angle in [-7.0, -PI, -1.0, 0.0, 1.0, PI, 7.0, 100.0] {
            let wrapped = wrap_angle(angle);
            assert!((-PI..=PI).contains(&wrapped), "{angle} -> {wrapped}");
            assert!((wrapped.sin() - angle.sin()).abs() < 1e-4);
        }
    }

    #[test]
    fn shortest_arc_crosses_the_seam() {
        let eps = 0.1;
        let delta = shortest_arc(-PI + eps, PI - eps);
        assert!((delta + 2.0 * eps).abs() < EPS);
    }

    #[test]
    fn rotate_towards_goes_through_pi() {
        let eps = 0.1;
        let current = -PI + eps;
        let next = rotate_towards(current, PI - eps, 0.05);
        // moving negative from -PI + eps lands just above -PI, not toward 0
        assert!((next - (-PI + eps - 0.05)).abs() < EPS);

        let mut angle = current;
        for _ in 0..10 {
            angle = rotate_towards(angle, PI - eps, 0.05);
            assert!(angle.abs() > PI - 2.0 * eps - EPS, "took the long way: {angle}");
        }
        assert!((shortest_arc(angle, PI - eps)).abs() < EPS);
    }

    #[test]
    fn rotate_towards_does_not_overshoot() {
        let angle = rotate_towards(0.0, 0.1, 1.0);
        assert!((angle - 0.1).abs() < EPS);
    }

    #[test]
    fn zero_step_holds() {
        assert!((rotate_towards(0.5, 2.0, 0.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn heading_vector_axes() {
        assert!((heading_vector(0.0) - Vec3::Z).length() < EPS);
        assert!((heading_vector(PI) + Vec3::Z).length() < EPS);
        assert!((heading_vector(PI / 2.0) - Vec3::X).length() < EPS);
    }

    #[test]
    fn azimuth_of_camera_behind_target() {
        let target = Vec3::new(3.0, 1.0, -2.0);
        assert!(azimuth_between(target + Vec3::new(0.0, 5.0, 10.0), target).abs() < EPS);
        let side = azimuth_between(target + Vec3::new(4.0, 0.0, 0.0), target);
        assert!((side - PI / 2.0).abs() < EPS);
    }
}
