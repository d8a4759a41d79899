// Pure helpers for canvas sizing; no DOM types so they can be tested on the host.

/// Backing-store size in device pixels for a canvas laid out at
/// `css_width` x `css_height` CSS pixels. Never returns a zero dimension.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let to_px = |css: f64| {
        let px = css * dpr;
        if px.is_finite() && px >= 1.0 {
            px as u32
        } else {
            1
        }
    };
    (to_px(css_width), to_px(css_height))
}

/// Height used to convert page-mode wheel deltas into pixels.
pub fn page_height_px(client_height: i32) -> f64 {
    client_height.max(0) as f64
}
