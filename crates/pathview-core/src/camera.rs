//! Orbit camera driven by pointer drag and wheel input.
//!
//! The eye revolves around `target` at `distance`; yaw is the azimuth measured
//! from +Z and pitch the elevation above the horizontal plane. The camera
//! publishes a change notification after every pose mutation so the
//! accumulation controller can invalidate its samples.

use glam::DVec3;

use crate::config::CameraConfig;
use crate::constants::{pitch_limit, DEGENERATE_CROSS_EPS, ZOOM_SCALE};
use crate::math::{clamp, cross, normalize, scale, to_padded_f32};
use crate::notify::{ChangeNotifier, Subscription};

/// Per-frame camera frame handed to the shader.
///
/// `right` and `up` are pre-scaled by `tan(fov/2) * aspect` and `tan(fov/2)`
/// so a ray for screen coordinates `(sx, sy)` in `[-1, 1]` is
/// `forward + sx * right + sy * up`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    pub position: DVec3,
    pub forward: DVec3,
    pub right: DVec3,
    pub up: DVec3,
}

impl CameraBasis {
    /// `[position, forward, right, up]` as padded f32 vectors.
    pub fn to_uniform_vectors(&self) -> [[f32; 4]; 4] {
        [
            to_padded_f32(self.position),
            to_padded_f32(self.forward),
            to_padded_f32(self.right),
            to_padded_f32(self.up),
        ]
    }
}

#[derive(Default, Clone, Copy, Debug)]
struct DragState {
    active: bool,
    last_x: f64,
    last_y: f64,
}

pub struct OrbitCamera {
    target: DVec3,
    distance: f64,
    yaw: f64,
    pitch: f64,
    fov: f64,
    min_distance: f64,
    max_distance: f64,
    rotate_speed: f64,
    zoom_speed: f64,
    drag: DragState,
    changes: ChangeNotifier,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Self {
        let limit = pitch_limit();
        Self {
            target: config.target,
            distance: clamp(config.distance, config.min_distance, config.max_distance),
            yaw: config.yaw,
            pitch: clamp(config.pitch, -limit, limit),
            fov: config.fov,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            rotate_speed: config.rotate_speed,
            zoom_speed: config.zoom_speed,
            drag: DragState::default(),
            changes: ChangeNotifier::new(),
        }
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }
    pub fn distance(&self) -> f64 {
        self.distance
    }
    pub fn yaw(&self) -> f64 {
        self.yaw
    }
    pub fn pitch(&self) -> f64 {
        self.pitch
    }
    pub fn fov(&self) -> f64 {
        self.fov
    }
    pub fn distance_bounds(&self) -> (f64, f64) {
        (self.min_distance, self.max_distance)
    }
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Register a callback run once per pose change.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.changes.subscribe(callback)
    }

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        self.drag = DragState {
            active: true,
            last_x: x,
            last_y: y,
        };
    }

    pub fn handle_pointer_up(&mut self) {
        self.drag.active = false;
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        if !self.drag.active {
            return;
        }
        let dx = x - self.drag.last_x;
        let dy = y - self.drag.last_y;
        self.drag.last_x = x;
        self.drag.last_y = y;

        self.yaw += dx * self.rotate_speed;
        let limit = pitch_limit();
        self.pitch = clamp(self.pitch - dy * self.rotate_speed, -limit, limit);
        // yaw and pitch change together: one notification
        self.changes.notify();
    }

    /// Exponential zoom: equal wheel ticks give equal relative distance change.
    pub fn handle_scroll(&mut self, delta_y: f64) {
        let factor = (delta_y * ZOOM_SCALE * self.zoom_speed).exp();
        self.distance = clamp(
            self.distance * factor,
            self.min_distance,
            self.max_distance,
        );
        self.changes.notify();
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = clamp(distance, self.min_distance, self.max_distance);
        self.changes.notify();
    }

    /// Eye-to-target unit direction as seen from the target.
    fn orbit_direction(&self) -> DVec3 {
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();
        DVec3::new(cp * sy, sp, cp * cy)
    }

    pub fn compute_basis(&self, viewport_width: f64, viewport_height: f64) -> CameraBasis {
        let position = self.target + scale(self.orbit_direction(), self.distance);
        let forward = normalize(self.target - position);
        let (right, up) = orthonormal_frame(forward);

        let tan_half_fov = (self.fov * 0.5).tan();
        let aspect = viewport_width / viewport_height;
        CameraBasis {
            position,
            forward,
            right: scale(right, tan_half_fov * aspect),
            up: scale(up, tan_half_fov),
        }
    }
}

/// Unit `right` and `up` completing `forward` into a right-handed view frame.
///
/// Uses +Y as world up, switching to +Z when `forward` is (nearly) parallel to
/// +Y and the cross product would vanish.
pub fn orthonormal_frame(forward: DVec3) -> (DVec3, DVec3) {
    let mut side = cross(forward, DVec3::Y);
    if side.length() < DEGENERATE_CROSS_EPS {
        side = cross(forward, DVec3::Z);
    }
    let right = normalize(side);
    let up = normalize(cross(right, forward));
    (right, up)
}
