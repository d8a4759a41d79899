// Shared camera/input/render tuning constants used by both web and native frontends.

// Camera
pub const PITCH_MARGIN: f64 = 0.05; // keeps pitch strictly inside (-pi/2, pi/2)
pub const ZOOM_SCALE: f64 = 0.001; // wheel pixels -> log-distance
pub const DEGENERATE_CROSS_EPS: f64 = 1e-5; // |forward x up| below this swaps world up

// Wheel normalization (DOM deltaMode / winit LineDelta)
pub const WHEEL_LINE_PX: f64 = 16.0;
pub const WHEEL_PAGE_PX_FALLBACK: f64 = 800.0;

// Accumulation targets
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Log a progress line every this many accumulated samples
pub const SAMPLE_LOG_INTERVAL: u32 = 256;

#[inline]
pub fn pitch_limit() -> f64 {
    std::f64::consts::FRAC_PI_2 - PITCH_MARGIN
}
