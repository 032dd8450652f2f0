//! Page-lifetime owner of the carousel, its auto-advance timer and swipe
//! tracking. Every input channel funnels into [`CarouselController::request`].

use crate::autoplay::AutoAdvance;
use crate::carousel::{Carousel, CarouselError, Outcome, Request, TransitionStep};
use crate::config::CarouselConfig;
use crate::input::{request_for_key, SwipeTracker};
use crate::view::{render, CarouselView};
use smallvec::SmallVec;

/// What a [`CarouselController::poll`] call did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poll {
    pub steps: SmallVec<[TransitionStep; 4]>,
    pub auto_ticks: SmallVec<[Outcome; 2]>,
}

impl Poll {
    /// True when the visible state may have changed.
    #[inline]
    pub fn changed(&self) -> bool {
        !self.steps.is_empty() || self.auto_ticks.iter().any(Outcome::started)
    }
}

#[derive(Clone, Debug)]
pub struct CarouselController {
    carousel: Carousel,
    autoplay: AutoAdvance,
    swipe: SwipeTracker,
    hovered: bool,
}

impl CarouselController {
    pub fn new(card_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        let autoplay = AutoAdvance::new(config.auto_interval_ms);
        Ok(Self {
            carousel: Carousel::new(card_count, config)?,
            autoplay,
            swipe: SwipeTracker::default(),
            hovered: false,
        })
    }

    /// Arm the auto-advance timer if autoplay is enabled.
    pub fn start(&mut self, now_ms: f64) {
        if self.carousel.config().autoplay && !self.hovered {
            self.autoplay.start(now_ms);
        }
    }

    /// Stop every timer. In-flight transition steps still complete on poll.
    pub fn teardown(&mut self) {
        self.autoplay.stop();
    }

    #[inline]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }
    #[inline]
    pub fn autoplay(&self) -> &AutoAdvance {
        &self.autoplay
    }
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn view(&self) -> CarouselView {
        render(&self.carousel)
    }

    #[inline]
    pub fn request(&mut self, request: Request, now_ms: f64) -> Outcome {
        self.rebase(now_ms);
        self.carousel.request(request, now_ms)
    }

    #[inline]
    pub fn next(&mut self, now_ms: f64) -> Outcome {
        self.request(Request::Advance, now_ms)
    }

    #[inline]
    pub fn prev(&mut self, now_ms: f64) -> Outcome {
        self.request(Request::Retreat, now_ms)
    }

    #[inline]
    pub fn indicator(&mut self, index: usize, now_ms: f64) -> Outcome {
        self.request(Request::JumpTo(index), now_ms)
    }

    /// Directional keys; `None` for keys the carousel ignores.
    pub fn key(&mut self, key: &str, now_ms: f64) -> Option<Outcome> {
        let request = request_for_key(key)?;
        Some(self.request(request, now_ms))
    }

    #[inline]
    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
    }

    /// Close the current touch and classify it without submitting anything.
    pub fn swipe_gesture(&mut self, end_x: f64) -> Option<Request> {
        let threshold = self.carousel.config().swipe_threshold_px;
        self.swipe.finish(end_x, threshold)
    }

    pub fn touch_end(&mut self, x: f64, now_ms: f64) -> Option<Outcome> {
        let request = self.swipe_gesture(x)?;
        Some(self.request(request, now_ms))
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.autoplay.stop();
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.hovered = false;
        self.start(now_ms);
    }

    /// Earliest pending deadline across transition steps and auto-advance.
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.carousel.next_deadline(), self.autoplay.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Process every deadline up to `now_ms` in time order. Transition steps
    /// win ties against auto-advance ticks, and at most one auto-advance
    /// tick fires per call.
    pub fn poll(&mut self, now_ms: f64) -> Poll {
        let mut out = Poll::default();
        self.rebase(now_ms);
        loop {
            let step_due = self.carousel.next_deadline().filter(|d| *d <= now_ms);
            let tick_due = self.autoplay.next_deadline().filter(|d| *d <= now_ms);
            match (step_due, tick_due) {
                (None, None) => break,
                (Some(s), Some(t)) if t < s => self.fire_tick(now_ms, &mut out),
                (Some(s), _) => out.steps.extend(self.carousel.poll(s)),
                (None, Some(_)) => self.fire_tick(now_ms, &mut out),
            }
        }
        out
    }

    /// A clock that stepped backwards pulls both timelines onto `now_ms`.
    fn rebase(&mut self, now_ms: f64) {
        self.carousel.rebase(now_ms);
        self.autoplay.rebase(now_ms);
    }

    fn fire_tick(&mut self, now_ms: f64, out: &mut Poll) {
        if let Some(at_ms) = self.autoplay.poll(now_ms) {
            let outcome = self.carousel.request(Request::Advance, at_ms);
            out.auto_ticks.push(outcome);
        }
    }
}
