//! Runtime carousel tuning.
//!
//! Defaults come from [`crate::constants`]. A page may override individual
//! values through `data-*` attributes on the slider element; the web front-end
//! feeds each attribute through [`CarouselConfig::apply_attribute`] and keeps
//! the default when a value is rejected.

use crate::constants::{
    ACTIVATE_DELAY_MS, AUTO_ADVANCE_INTERVAL_MS, CARD_TRANSITION_MS, SWIPE_THRESHOLD_PX,
};
use thiserror::Error;

/// Data attribute names understood by [`CarouselConfig::apply_attribute`].
pub const ATTR_AUTO_INTERVAL: &str = "data-auto-interval-ms";
pub const ATTR_TRANSITION: &str = "data-transition-ms";
pub const ATTR_ACTIVATE_DELAY: &str = "data-activate-delay-ms";
pub const ATTR_SWIPE_THRESHOLD: &str = "data-swipe-threshold";
pub const ATTR_AUTOPLAY: &str = "data-autoplay";

pub const CONFIG_ATTRIBUTES: [&str; 5] = [
    ATTR_AUTO_INTERVAL,
    ATTR_TRANSITION,
    ATTR_ACTIVATE_DELAY,
    ATTR_SWIPE_THRESHOLD,
    ATTR_AUTOPLAY,
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown carousel attribute `{0}`")]
    UnknownKey(String),
    #[error("`{key}`: cannot parse `{value}`")]
    Parse { key: String, value: String },
    #[error("`{key}` must be positive, got {value}")]
    NotPositive { key: String, value: f64 },
    #[error("activation delay {delay_ms}ms must be shorter than the transition total {total_ms}ms")]
    DelayNotShorterThanTotal { delay_ms: f64, total_ms: f64 },
}

/// Timings and gesture thresholds for one carousel instance.
///
/// - `activate_delay_ms`: offset of the activation step from transition start
/// - `card_transition_ms`: CSS transition length; the unlock step lands at
///   `activate_delay_ms + card_transition_ms`
/// - `auto_interval_ms`: auto-advance period
/// - `swipe_threshold_px`: minimum horizontal displacement for a swipe
/// - `autoplay`: whether the auto-advance timer runs at all
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub activate_delay_ms: f64,
    pub card_transition_ms: f64,
    pub auto_interval_ms: f64,
    pub swipe_threshold_px: f64,
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            activate_delay_ms: ACTIVATE_DELAY_MS,
            card_transition_ms: CARD_TRANSITION_MS,
            auto_interval_ms: AUTO_ADVANCE_INTERVAL_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            autoplay: true,
        }
    }
}

impl CarouselConfig {
    /// Full transition length measured from the deactivation step.
    #[inline]
    pub fn transition_total_ms(&self) -> f64 {
        self.activate_delay_ms + self.card_transition_ms
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive(ATTR_TRANSITION, self.card_transition_ms)?;
        positive(ATTR_AUTO_INTERVAL, self.auto_interval_ms)?;
        positive(ATTR_SWIPE_THRESHOLD, self.swipe_threshold_px)?;
        if self.activate_delay_ms < 0.0 || self.activate_delay_ms >= self.transition_total_ms() {
            return Err(ConfigError::DelayNotShorterThanTotal {
                delay_ms: self.activate_delay_ms,
                total_ms: self.transition_total_ms(),
            });
        }
        Ok(())
    }

    /// Apply one `data-*` override. On error `self` is left unchanged.
    pub fn apply_attribute(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            ATTR_AUTO_INTERVAL => next.auto_interval_ms = parse_number(key, value)?,
            ATTR_TRANSITION => next.card_transition_ms = parse_number(key, value)?,
            ATTR_ACTIVATE_DELAY => next.activate_delay_ms = parse_number(key, value)?,
            ATTR_SWIPE_THRESHOLD => next.swipe_threshold_px = parse_number(key, value)?,
            ATTR_AUTOPLAY => {
                next.autoplay = match value.trim() {
                    "" | "true" | "1" | "on" => true,
                    "false" | "0" | "off" => false,
                    _ => {
                        return Err(ConfigError::Parse {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive {
            key: key.to_string(),
            value,
        })
    }
}
