// Host-side tests for the DOM-free canvas sizing helpers.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod viewport {
    include!("../src/viewport.rs");
}

use viewport::*;

#[test]
fn backing_size_scales_by_device_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
}

#[test]
fn backing_size_truncates_fractional_pixels() {
    assert_eq!(backing_size(100.7, 50.2, 1.5), (151, 75));
}

#[test]
fn backing_size_never_returns_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.2, 300.0, 1.0), (1, 300));
}

#[test]
fn bogus_device_pixel_ratio_falls_back_to_one() {
    assert_eq!(backing_size(640.0, 480.0, 0.0), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, f64::NAN), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, -3.0), (640, 480));
}

#[test]
fn page_height_ignores_negative_client_height() {
    assert_eq!(page_height_px(720), 720.0);
    assert_eq!(page_height_px(-5), 0.0);
}
