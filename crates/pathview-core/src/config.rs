use glam::DVec3;
use thiserror::Error;

/// Every option the orbit camera recognises, with its default.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// World-space look-at point.
    pub target: DVec3,
    /// Eye distance from `target`, world units.
    pub distance: f64,
    /// Azimuth in radians, measured from +Z.
    pub yaw: f64,
    /// Elevation in radians above the horizontal plane.
    pub pitch: f64,
    /// Vertical field of view in radians.
    pub fov: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Radians per pixel of pointer drag.
    pub rotate_speed: f64,
    /// Gain applied to wheel deltas before the exponential zoom.
    pub zoom_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            target: DVec3::ZERO,
            distance: 10.0,
            yaw: 0.0,
            pitch: 0.0,
            fov: 45.0_f64.to_radians(),
            min_distance: 1.0,
            max_distance: 100.0,
            rotate_speed: 0.005,
            zoom_speed: 1.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("min_distance must be > 0 (got {0})")]
    NonPositiveMinDistance(f64),
    #[error("min_distance {min} exceeds max_distance {max}")]
    InvertedDistanceBounds { min: f64, max: f64 },
    #[error("field of view must lie in (0, pi) radians (got {0})")]
    FovOutOfRange(f64),
    #[error("camera option `{0}` is not finite")]
    NotFinite(&'static str),
}

impl CameraConfig {
    /// Report misconfiguration. Nothing is corrected here; the camera only
    /// clamps pitch and distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("distance", self.distance),
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("fov", self.fov),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("rotate_speed", self.rotate_speed),
            ("zoom_speed", self.zoom_speed),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }
        if !self.target.is_finite() {
            return Err(ConfigError::NotFinite("target"));
        }
        if self.min_distance <= 0.0 {
            return Err(ConfigError::NonPositiveMinDistance(self.min_distance));
        }
        if self.min_distance > self.max_distance {
            return Err(ConfigError::InvertedDistanceBounds {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if self.fov <= 0.0 || self.fov >= std::f64::consts::PI {
            return Err(ConfigError::FovOutOfRange(self.fov));
        }
        Ok(())
    }
}
