use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX_FALLBACK};

/// A wheel delta in whatever unit the platform reported it.
///
/// Positive values mean "scroll down", i.e. zoom out, matching the DOM
/// `deltaY` convention the camera's zoom formula is tuned for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    Pixels(f64),
    Lines(f64),
    Pages(f64),
}

impl WheelDelta {
    /// DOM `WheelEvent.deltaMode`: 0 = pixel, 1 = line, 2 = page.
    #[inline]
    pub fn from_dom(delta_y: f64, delta_mode: u32) -> Self {
        match delta_mode {
            1 => WheelDelta::Lines(delta_y),
            2 => WheelDelta::Pages(delta_y),
            _ => WheelDelta::Pixels(delta_y),
        }
    }

    /// Convert to pixels. `page_height_px` is the viewport height; zero falls
    /// back to a fixed page size.
    #[inline]
    pub fn to_pixels(self, page_height_px: f64) -> f64 {
        match self {
            WheelDelta::Pixels(px) => px,
            WheelDelta::Lines(lines) => lines * WHEEL_LINE_PX,
            WheelDelta::Pages(pages) => {
                let page = if page_height_px > 0.0 {
                    page_height_px
                } else {
                    WHEEL_PAGE_PX_FALLBACK
                };
                pages * page
            }
        }
    }
}
