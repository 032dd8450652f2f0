//! Math behind the responsive helpers: layout buckets, parallax and tilt.

use crate::constants::{DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH, TILT_DIVISOR, TILT_PERSPECTIVE_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutBucket {
    Mobile,
    Tablet,
    Desktop,
}

impl LayoutBucket {
    pub const ALL: [LayoutBucket; 3] = [
        LayoutBucket::Mobile,
        LayoutBucket::Tablet,
        LayoutBucket::Desktop,
    ];

    #[inline]
    pub fn for_width(width: f64) -> Self {
        if width < TABLET_MIN_WIDTH {
            LayoutBucket::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            LayoutBucket::Tablet
        } else {
            LayoutBucket::Desktop
        }
    }

    /// Class placed on `<body>` while this bucket is current.
    #[inline]
    pub fn class_name(&self) -> &'static str {
        match self {
            LayoutBucket::Mobile => "layout-mobile",
            LayoutBucket::Tablet => "layout-tablet",
            LayoutBucket::Desktop => "layout-desktop",
        }
    }
}

/// Parallax translation for an element, or `None` while it is outside the
/// band where the effect applies.
///
/// - `element_top`: document-space top (`rect.top + scrollY`)
/// - `element_height`: rendered height
pub fn parallax_offset(
    scroll_y: f64,
    element_top: f64,
    element_height: f64,
    viewport_height: f64,
    speed: f64,
) -> Option<f64> {
    let band_start = element_top - viewport_height;
    let band_end = element_top + element_height;
    (scroll_y > band_start && scroll_y < band_end).then(|| (scroll_y - element_top) * speed)
}

/// Tilt angles in degrees `(rotate_x, rotate_y)` for a pointer at `(x, y)`
/// relative to an element of size `width` × `height`.
#[inline]
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

pub fn tilt_transform_css(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg)",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y
    )
}

/// Parse the value of a `data-parallax` attribute; empty or invalid values
/// fall back to `default`.
pub fn parse_parallax_speed(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
