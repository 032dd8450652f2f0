/// Repeating auto-advance timer, modelled on deadlines.
///
/// At most one schedule is live: `start` always replaces the previous one,
/// and `stop` discards it. Restarting never resumes partially elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoAdvance {
    interval_ms: f64,
    next_fire_ms: Option<f64>,
}

impl AutoAdvance {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_fire_ms: None,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_fire_ms.is_some()
    }

    #[inline]
    pub fn next_deadline(&self) -> Option<f64> {
        self.next_fire_ms
    }

    pub fn start(&mut self, now_ms: f64) {
        self.next_fire_ms = Some(now_ms + self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.next_fire_ms = None;
    }

    /// Re-arm from `now_ms` when the clock reads earlier than the start of
    /// the current period, so the next tick is never more than one interval
    /// away.
    pub fn rebase(&mut self, now_ms: f64) {
        if let Some(next) = self.next_fire_ms {
            if now_ms < next - self.interval_ms {
                self.next_fire_ms = Some(now_ms + self.interval_ms);
            }
        }
    }

    /// Fire at most one tick due by `now_ms` and return the time it counts
    /// as fired.
    ///
    /// A tick polled within one interval of its deadline keeps the cadence.
    /// A later poll (a throttled background tab) fires once at `now_ms` and
    /// re-arms a full interval from there; missed ticks are not replayed.
    pub fn poll(&mut self, now_ms: f64) -> Option<f64> {
        let next = self.next_fire_ms?;
        if next > now_ms {
            return None;
        }
        if now_ms < next + self.interval_ms {
            self.next_fire_ms = Some(next + self.interval_ms);
            Some(next)
        } else {
            self.next_fire_ms = Some(now_ms + self.interval_ms);
            Some(now_ms)
        }
    }
}
