//! Minimal 3-vector helpers on top of `glam::DVec3`.
//!
//! The camera works in f64 and only narrows to f32 when values are packed for
//! the GPU. These wrappers pin down the behaviour the camera relies on, most
//! importantly that normalizing a zero vector yields zero instead of NaN.

use glam::DVec3;

#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    a.cross(b)
}

#[inline]
pub fn scale(v: DVec3, scalar: f64) -> DVec3 {
    v * scalar
}

#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Narrow to an f32 `vec4` with `w = 0`, the layout WGSL expects for `vec3` data.
#[inline]
pub fn to_padded_f32(v: DVec3) -> [f32; 4] {
    [v.x as f32, v.y as f32, v.z as f32, 0.0]
}
