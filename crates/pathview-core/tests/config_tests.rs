// Host-side tests for camera configuration defaults and validation.

use glam::DVec3;
use pathview_core::{CameraConfig, ConfigError, OrbitCamera};

#[test]
fn defaults_match_documented_values() {
    let c = CameraConfig::default();
    assert_eq!(c.target, DVec3::ZERO);
    assert_eq!(c.distance, 10.0);
    assert_eq!(c.yaw, 0.0);
    assert_eq!(c.pitch, 0.0);
    assert!((c.fov - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert_eq!(c.min_distance, 1.0);
    assert_eq!(c.max_distance, 100.0);
    assert_eq!(c.rotate_speed, 0.005);
    assert_eq!(c.zoom_speed, 1.0);
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn camera_reflects_config() {
    let camera = OrbitCamera::new(CameraConfig {
        target: DVec3::new(1.0, 2.0, 3.0),
        yaw: 0.5,
        ..CameraConfig::default()
    });
    assert_eq!(camera.target(), DVec3::new(1.0, 2.0, 3.0));
    assert_eq!(camera.yaw(), 0.5);
    assert_eq!(camera.distance_bounds(), (1.0, 100.0));
}

#[test]
fn rejects_non_positive_min_distance() {
    let c = CameraConfig {
        min_distance: 0.0,
        ..CameraConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveMinDistance(0.0)));
}

#[test]
fn rejects_inverted_bounds() {
    let c = CameraConfig {
        min_distance: 50.0,
        max_distance: 5.0,
        ..CameraConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::InvertedDistanceBounds { min: 50.0, max: 5.0 })
    );
}

#[test]
fn rejects_fov_outside_open_interval() {
    for fov in [0.0, -0.1, std::f64::consts::PI, 4.0] {
        let c = CameraConfig {
            fov,
            ..CameraConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::FovOutOfRange(fov)));
    }
}

#[test]
fn rejects_non_finite_values() {
    let c = CameraConfig {
        zoom_speed: f64::INFINITY,
        ..CameraConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::NotFinite("zoom_speed")));

    let c = CameraConfig {
        target: DVec3::new(0.0, f64::NAN, 0.0),
        ..CameraConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::NotFinite("target")));
}

#[test]
fn out_of_range_distance_is_clamped_not_rejected() {
    let c = CameraConfig {
        distance: 0.001,
        ..CameraConfig::default()
    };
    assert_eq!(c.validate(), Ok(()));
    assert_eq!(OrbitCamera::new(c).distance(), 1.0);
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::InvertedDistanceBounds { min: 3.0, max: 2.0 }.to_string();
    assert!(msg.contains("min_distance 3"), "{}", msg);
}
