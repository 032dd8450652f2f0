//! Pure rendering of carousel state into a full visual description.
//!
//! [`render`] is idempotent: the same [`Carousel`] always yields the same
//! [`CarouselView`], and applying a view twice leaves the page unchanged.

use crate::carousel::Carousel;
use crate::constants::{
    CARD_OFFSET_PX, CARD_ROTATE_DEG, CARD_Z_ACTIVE, CARD_Z_INACTIVE, INDICATOR_PULSE_SCALE,
};

/// Resting pose of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardPose {
    /// Centred and fully visible.
    Neutral,
    /// Parked left of the stage; used for cards before the current one.
    FromLeft,
    /// Parked right of the stage; used for cards after the current one.
    FromRight,
}

impl CardPose {
    /// Pose of `index` relative to `anchor`. The anchor itself is neutral.
    #[inline]
    pub fn relative(index: usize, anchor: usize) -> Self {
        use std::cmp::Ordering::*;
        match index.cmp(&anchor) {
            Less => CardPose::FromLeft,
            Greater => CardPose::FromRight,
            Equal => CardPose::Neutral,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardView {
    pub active: bool,
    pub pose: CardPose,
    pub offset_px: f32,
    pub rotate_deg: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl CardView {
    fn active() -> Self {
        Self {
            active: true,
            pose: CardPose::Neutral,
            offset_px: 0.0,
            rotate_deg: 0.0,
            opacity: 1.0,
            z_index: CARD_Z_ACTIVE,
        }
    }

    fn parked(pose: CardPose) -> Self {
        let sign = match pose {
            CardPose::FromLeft => -1.0,
            CardPose::FromRight => 1.0,
            CardPose::Neutral => 0.0,
        };
        Self {
            active: false,
            pose,
            offset_px: sign * CARD_OFFSET_PX,
            rotate_deg: sign * CARD_ROTATE_DEG,
            opacity: 0.0,
            z_index: CARD_Z_INACTIVE,
        }
    }

    /// Inline `transform` value, e.g. `translateX(-100px) rotateY(-10deg)`.
    pub fn transform_css(&self) -> String {
        format!(
            "translateX({}px) rotateY({}deg)",
            self.offset_px, self.rotate_deg
        )
    }

    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorView {
    pub active: bool,
    pub scale: f32,
}

impl IndicatorView {
    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView {
    pub animating: bool,
    pub cards: Vec<CardView>,
    pub indicators: Vec<IndicatorView>,
}

impl CarouselView {
    pub fn active_cards(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.active)
            .map(|(i, _)| i)
    }

    pub fn active_indicators(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, d)| d.active)
            .map(|(i, _)| i)
    }
}

/// Produce the full view for the current state.
///
/// Non-target cards are posed relative to the current index. Until the
/// activation step the incoming card keeps the pose it was parked in, which
/// is relative to the index it is replacing.
pub fn render(carousel: &Carousel) -> CarouselView {
    let current = carousel.current_index();
    let shown = carousel.active_index();
    let cards = (0..carousel.card_count())
        .map(|i| match (i == current, shown) {
            (true, Some(_)) => CardView::active(),
            (true, None) => CardView::parked(CardPose::relative(i, carousel.previous_index())),
            (false, _) => CardView::parked(CardPose::relative(i, current)),
        })
        .collect();
    let lit = carousel.active_indicator();
    let indicators = (0..carousel.card_count())
        .map(|i| IndicatorView {
            active: i == lit,
            scale: if i == lit { INDICATOR_PULSE_SCALE } else { 1.0 },
        })
        .collect();
    CarouselView {
        animating: carousel.is_animating(),
        cards,
        indicators,
    }
}
