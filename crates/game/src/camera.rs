use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::angle::azimuth_between;

/// What the character controller needs from the camera: a reference yaw
/// for "forward" and an orbit target it can drag along.
pub trait CameraRig {
    fn azimuth(&self) -> f32;
    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);
}

#[derive(Debug, Clone)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angles are measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 5.0,
            max_distance: 15.0,
            min_polar_angle: 0.0,
            max_polar_angle: FRAC_PI_2 - 0.05,
        }
    }
}

/// Third-person camera orbiting a target point on a sphere.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    position: Vec3,
    target: Vec3,
    config: OrbitConfig,
}

impl OrbitCamera {
    const MIN_POLAR_EPSILON: f32 = 1e-4;

    pub fn new(position: Vec3, target: Vec3, config: OrbitConfig) -> Self {
        let mut camera = Self {
            position,
            target,
            config,
        };
        let (azimuth, polar, radius) = camera.spherical();
        camera.set_spherical(azimuth, polar, radius);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn polar_angle(&self) -> f32 {
        self.spherical().1
    }

    /// Horizontal viewing direction.
    pub fn forward_xz(&self) -> Vec3 {
        let (sin, cos) = self.azimuth().sin_cos();
        -Vec3::new(sin, 0.0, cos)
    }

    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        let (azimuth, polar, radius) = self.spherical();
        self.set_spherical(
            (azimuth + delta_azimuth).rem_euclid(TAU),
            polar + delta_polar,
            radius,
        );
    }

    /// Positive deltas move the eye away from the target.
    pub fn zoom(&mut self, delta: f32) {
        let (azimuth, polar, radius) = self.spherical();
        self.set_spherical(azimuth, polar, radius + delta);
    }

    fn spherical(&self) -> (f32, f32, f32) {
        let offset = self.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return (0.0, 0.0, 0.0);
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        (azimuth_between(self.position, self.target), polar, radius)
    }

    fn set_spherical(&mut self, azimuth: f32, polar: f32, radius: f32) {
        let min_polar = self.config.min_polar_angle.max(Self::MIN_POLAR_EPSILON);
        let polar = polar.clamp(min_polar, self.config.max_polar_angle.max(min_polar));
        let radius = radius.clamp(self.config.min_distance, self.config.max_distance);

        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        self.position = self.target
            + Vec3::new(
                radius * sin_polar * sin_azimuth,
                radius * cos_polar,
                radius * sin_polar * cos_azimuth,
            );
    }
}

impl CameraRig for OrbitCamera {
    fn azimuth(&self) -> f32 {
        azimuth_between(self.position, self.target)
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    /// The eye moves with the target so the orbit offset is preserved.
    fn set_target(&mut self, target: Vec3) {
        let delta = target - self.target;
        self.target = target;
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(Vec3::new(0.0, 5.0, 10.0), Vec3::ZERO, OrbitConfig::default())
    }

    #[test]
    fn distance_is_clamped_on_construction() {
        let far = OrbitCamera::new(Vec3::new(0.0, 15.0, 50.0), Vec3::Y, OrbitConfig::default());
        assert!((far.distance() - 15.0).abs() < EPS);
        assert!(far.azimuth().abs() < EPS);
    }

    #[test]
    fn set_target_drags_the_eye() {
        let mut camera = camera();
        let offset = camera.position() - camera.target();
        camera.set_target(Vec3::new(1.0, 0.0, -2.0));
        assert!((camera.position() - camera.target() - offset).length() < EPS);
        assert!(camera.azimuth().abs() < EPS);
    }

    #[test]
    fn orbit_changes_azimuth() {
        let mut camera = camera();
        camera.orbit(FRAC_PI_2, 0.0);
        assert!((camera.azimuth() - FRAC_PI_2).abs() < EPS);
        assert!((camera.forward_xz() + Vec3::X).length() < EPS);
    }

    #[test]
    fn polar_angle_stays_above_ground() {
        let mut camera = camera();
        camera.orbit(0.0, 3.0);
        assert!(camera.polar_angle() <= OrbitConfig::default().max_polar_angle + EPS);
        assert!(camera.position().y > 0.0);

        camera.orbit(0.0, -10.0);
        assert!(camera.polar_angle() > 0.0);
    }

    #[test]
    fn zoom_respects_limits() {
        let mut camera = camera();
        camera.zoom(-100.0);
        assert!((camera.distance() - 5.0).abs() < EPS);
        camera.zoom(100.0);
        assert!((camera.distance() - 15.0).abs() < EPS);
    }

    #[test]
    fn forward_looks_at_target() {
        let camera = camera();
        assert!((camera.forward_xz() + Vec3::Z).length() < EPS);
    }
}
