//! Carousel state machine.
//!
//! The carousel owns one position (`current_index`) and one guard
//! (`is_animating`). A navigation request accepted while idle starts a
//! [`TransitionPlan`]: three timed steps (deactivate, activate, unlock) whose
//! offsets are measured from the moment the request was accepted. Requests
//! arriving while a plan is in flight are dropped, never queued.
//!
//! The clock is supplied by the caller as milliseconds (`now_ms`), so the
//! whole machine runs on the host in tests without timers.

use crate::config::CarouselConfig;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one card")]
    NoCards,
    #[error("invalid carousel configuration: {0}")]
    Config(String),
}

/// A navigation request from any input channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Why a request did not start a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    Animating,
    AlreadyCurrent,
    OutOfRange,
    SingleCard,
}

/// Result of submitting a [`Request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Started { from: usize, to: usize },
    Dropped(DropReason),
}

impl Outcome {
    #[inline]
    pub fn started(&self) -> bool {
        matches!(self, Outcome::Started { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    /// Every card except the target is posed off to its side.
    Deactivate,
    /// The target card and its indicator become active.
    Activate,
    /// The guard is released.
    Unlock,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedStep {
    pub at_ms: f64,
    pub step: TransitionStep,
}

/// Ordered timeline for one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPlan {
    steps: [TimedStep; 3],
    next: usize,
}

impl TransitionPlan {
    pub fn new(started_at_ms: f64, config: &CarouselConfig) -> Self {
        Self {
            steps: [
                TimedStep {
                    at_ms: started_at_ms,
                    step: TransitionStep::Deactivate,
                },
                TimedStep {
                    at_ms: started_at_ms + config.activate_delay_ms,
                    step: TransitionStep::Activate,
                },
                TimedStep {
                    at_ms: started_at_ms + config.transition_total_ms(),
                    step: TransitionStep::Unlock,
                },
            ],
            next: 0,
        }
    }

    #[inline]
    pub fn steps(&self) -> &[TimedStep] {
        &self.steps
    }

    #[inline]
    pub fn started_at_ms(&self) -> f64 {
        self.steps[0].at_ms
    }

    /// Deadline of the first step that has not fired yet.
    #[inline]
    pub fn next_deadline(&self) -> Option<f64> {
        self.steps.get(self.next).map(|s| s.at_ms)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Shift the timeline so it starts at `now_ms` when the clock reads
    /// earlier than the recorded start. Offsets between steps are kept.
    fn rebase(&mut self, now_ms: f64) {
        let shift = now_ms - self.started_at_ms();
        if shift < 0.0 {
            for s in &mut self.steps {
                s.at_ms += shift;
            }
        }
    }

    /// Pop every step due at `now_ms`, in order.
    fn take_due(&mut self, now_ms: f64) -> SmallVec<[TransitionStep; 3]> {
        let mut due = SmallVec::new();
        while let Some(s) = self.steps.get(self.next) {
            if s.at_ms > now_ms {
                break;
            }
            due.push(s.step);
            self.next += 1;
        }
        due
    }
}

/// Carousel position, guard and in-flight transition.
#[derive(Clone, Debug)]
pub struct Carousel {
    card_count: usize,
    current_index: usize,
    previous_index: usize,
    is_animating: bool,
    target_shown: bool,
    plan: Option<TransitionPlan>,
    config: CarouselConfig,
}

impl Carousel {
    pub fn new(card_count: usize, config: CarouselConfig) -> Result<Self, CarouselError> {
        if card_count == 0 {
            return Err(CarouselError::NoCards);
        }
        config
            .validate()
            .map_err(|e| CarouselError::Config(e.to_string()))?;
        Ok(Self {
            card_count,
            current_index: 0,
            previous_index: 0,
            is_animating: false,
            target_shown: true,
            plan: None,
            config,
        })
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }
    /// Index that was current before the latest transition started.
    #[inline]
    pub fn previous_index(&self) -> usize {
        self.previous_index
    }
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }
    #[inline]
    pub fn plan(&self) -> Option<&TransitionPlan> {
        self.plan.as_ref()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.is_animating {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    /// Index of the card carrying the active flag, `None` inside the window
    /// between deactivation and activation.
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.target_shown.then_some(self.current_index)
    }

    /// Index of the indicator carrying the active flag. Indicators only move
    /// at the activation step, so the outgoing one stays lit until then.
    #[inline]
    pub fn active_indicator(&self) -> usize {
        if self.target_shown {
            self.current_index
        } else {
            self.previous_index
        }
    }

    /// Compute the target for `request` without touching state.
    pub fn resolve(&self, request: Request) -> Result<usize, DropReason> {
        if self.is_animating {
            return Err(DropReason::Animating);
        }
        let n = self.card_count;
        let to = match request {
            Request::Advance | Request::Retreat if n < 2 => return Err(DropReason::SingleCard),
            Request::Advance => (self.current_index + 1) % n,
            Request::Retreat => (self.current_index + n - 1) % n,
            Request::JumpTo(i) if i >= n => return Err(DropReason::OutOfRange),
            Request::JumpTo(i) if i == self.current_index => {
                return Err(DropReason::AlreadyCurrent)
            }
            Request::JumpTo(i) => i,
        };
        Ok(to)
    }

    /// Submit a request at `now_ms`. An accepted request fires the
    /// deactivation step immediately.
    pub fn request(&mut self, request: Request, now_ms: f64) -> Outcome {
        let to = match self.resolve(request) {
            Ok(to) => to,
            Err(reason) => {
                log::debug!("[carousel] dropped {:?}: {:?}", request, reason);
                return Outcome::Dropped(reason);
            }
        };
        let from = self.current_index;
        self.is_animating = true;
        self.previous_index = from;
        self.current_index = to;
        self.plan = Some(TransitionPlan::new(now_ms, &self.config));
        self.poll(now_ms);
        Outcome::Started { from, to }
    }

    /// Pull the in-flight timeline back to `now_ms` if the clock has gone
    /// backwards since the transition started. The guard is then released
    /// no later than one transition total from `now_ms`.
    pub fn rebase(&mut self, now_ms: f64) {
        if let Some(plan) = self.plan.as_mut() {
            plan.rebase(now_ms);
        }
    }

    /// Fire every transition step due at `now_ms` and return them in order.
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[TransitionStep; 3]> {
        let due = match self.plan.as_mut() {
            Some(plan) => plan.take_due(now_ms),
            None => return SmallVec::new(),
        };
        for step in &due {
            match step {
                TransitionStep::Deactivate => self.target_shown = false,
                TransitionStep::Activate => self.target_shown = true,
                TransitionStep::Unlock => {
                    self.is_animating = false;
                    self.plan = None;
                }
            }
        }
        due
    }

    #[inline]
    pub fn next_deadline(&self) -> Option<f64> {
        self.plan.as_ref().and_then(TransitionPlan::next_deadline)
    }
}
