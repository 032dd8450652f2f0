use crate::carousel::Request;

/// Map a `KeyboardEvent.key` value to a carousel request.
#[inline]
pub fn request_for_key(key: &str) -> Option<Request> {
    match key {
        "ArrowRight" => Some(Request::Advance),
        "ArrowLeft" => Some(Request::Retreat),
        _ => None,
    }
}

/// Classify a horizontal swipe from its start and end x coordinates.
///
/// Moving left by at least `threshold` advances, moving right by at least
/// `threshold` retreats; anything shorter is ignored.
#[inline]
pub fn swipe_request(start_x: f64, end_x: f64, threshold: f64) -> Option<Request> {
    let dx = end_x - start_x;
    if dx <= -threshold {
        Some(Request::Advance)
    } else if dx >= threshold {
        Some(Request::Retreat)
    } else {
        None
    }
}

/// Remembers where the current touch began.
#[derive(Default, Clone, Copy, Debug)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[inline]
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Close the gesture at `end_x`. A touch-end without a matching start
    /// is ignored.
    #[inline]
    pub fn finish(&mut self, end_x: f64, threshold: f64) -> Option<Request> {
        let start = self.start_x.take()?;
        swipe_request(start, end_x, threshold)
    }
}
