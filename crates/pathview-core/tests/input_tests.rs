// Host-side tests for wheel delta normalization.

use pathview_core::input::WheelDelta;
use pathview_core::{WHEEL_LINE_PX, WHEEL_PAGE_PX_FALLBACK};

#[test]
fn dom_delta_modes_map_to_units() {
    assert_eq!(WheelDelta::from_dom(3.0, 0), WheelDelta::Pixels(3.0));
    assert_eq!(WheelDelta::from_dom(3.0, 1), WheelDelta::Lines(3.0));
    assert_eq!(WheelDelta::from_dom(3.0, 2), WheelDelta::Pages(3.0));
    assert_eq!(WheelDelta::from_dom(3.0, 99), WheelDelta::Pixels(3.0));
}

#[test]
fn conversion_to_pixels() {
    assert_eq!(WheelDelta::Pixels(-120.0).to_pixels(600.0), -120.0);
    assert_eq!(WheelDelta::Lines(3.0).to_pixels(600.0), 3.0 * WHEEL_LINE_PX);
    assert_eq!(WheelDelta::Pages(-1.0).to_pixels(600.0), -600.0);
}

#[test]
fn page_delta_without_viewport_uses_fallback() {
    assert_eq!(WheelDelta::Pages(1.0).to_pixels(0.0), WHEEL_PAGE_PX_FALLBACK);
    assert_eq!(WheelDelta::Pages(2.0).to_pixels(-10.0), 2.0 * WHEEL_PAGE_PX_FALLBACK);
}
