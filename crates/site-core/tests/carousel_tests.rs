// Host-side tests for the carousel state machine and its rendered view.

use site_core::*;

const TOTAL: f64 = ACTIVATE_DELAY + TRANSITION;
const ACTIVATE_DELAY: f64 = 50.0;
const TRANSITION: f64 = 800.0;

fn make_carousel(n: usize) -> Carousel {
    Carousel::new(n, CarouselConfig::default()).unwrap()
}

/// Submit `request` at `now` and run the whole transition to completion.
fn settle(c: &mut Carousel, request: Request, now: f64) -> Outcome {
    let outcome = c.request(request, now);
    c.poll(now + TOTAL);
    outcome
}

fn assert_single_active(c: &Carousel) {
    let view = render(c);
    let cards: Vec<usize> = view.active_cards().collect();
    let dots: Vec<usize> = view.active_indicators().collect();
    assert_eq!(cards, vec![c.current_index()], "exactly one active card");
    assert_eq!(dots, vec![c.current_index()], "exactly one active indicator");
}

#[test]
fn default_timings_match_constants() {
    let cfg = CarouselConfig::default();
    assert_eq!(cfg.activate_delay_ms, ACTIVATE_DELAY);
    assert_eq!(cfg.card_transition_ms, TRANSITION);
    assert_eq!(cfg.transition_total_ms(), TOTAL);
}

#[test]
fn rejects_empty_carousel() {
    assert_eq!(
        Carousel::new(0, CarouselConfig::default()).unwrap_err(),
        CarouselError::NoCards
    );
}

#[test]
fn rejects_invalid_config() {
    let cfg = CarouselConfig {
        activate_delay_ms: 900.0,
        card_transition_ms: 0.0,
        ..CarouselConfig::default()
    };
    assert!(matches!(
        Carousel::new(3, cfg),
        Err(CarouselError::Config(_))
    ));
}

#[test]
fn initial_state_shows_first_card() {
    let c = make_carousel(4);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.phase(), Phase::Idle);
    assert_single_active(&c);
    let view = render(&c);
    assert!(!view.animating);
    assert_eq!(view.cards[0].pose, CardPose::Neutral);
    for card in &view.cards[1..] {
        assert_eq!(card.pose, CardPose::FromRight);
        assert_eq!(card.opacity, 0.0);
    }
}

#[test]
fn five_card_scenario_wraps_both_ways() {
    let mut c = make_carousel(5);
    let mut now = 0.0;
    settle(&mut c, Request::Advance, now);
    assert_eq!(c.current_index(), 1);
    for _ in 0..4 {
        now += 1000.0;
        settle(&mut c, Request::Advance, now);
    }
    assert_eq!(c.current_index(), 0);
    now += 1000.0;
    settle(&mut c, Request::Retreat, now);
    assert_eq!(c.current_index(), 4);
}

#[test]
fn advancing_card_count_times_is_cyclic() {
    for n in 2..=9 {
        let mut c = make_carousel(n);
        settle(&mut c, Request::JumpTo(n / 2), 0.0);
        let start = c.current_index();
        for k in 0..n {
            settle(&mut c, Request::Advance, 1000.0 * (k + 1) as f64);
            assert_single_active(&c);
        }
        assert_eq!(c.current_index(), start, "n={n}");
    }
}

#[test]
fn request_while_animating_is_dropped() {
    let mut c = make_carousel(5);
    assert!(c.request(Request::Advance, 0.0).started());
    let deadline_before = c.next_deadline();
    let plan_start = c.plan().map(TransitionPlan::started_at_ms);

    for (t, r) in [
        (10.0, Request::Advance),
        (60.0, Request::Retreat),
        (400.0, Request::JumpTo(3)),
    ] {
        c.poll(t);
        assert_eq!(c.request(r, t), Outcome::Dropped(DropReason::Animating));
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.plan().map(TransitionPlan::started_at_ms), plan_start);
    }
    assert!(deadline_before.is_some());

    c.poll(TOTAL);
    assert!(!c.is_animating());
    assert!(c.request(Request::Advance, TOTAL).started());
    assert_eq!(c.current_index(), 2);
}

#[test]
fn jump_to_current_is_always_a_noop() {
    let mut c = make_carousel(3);
    assert_eq!(
        c.request(Request::JumpTo(0), 0.0),
        Outcome::Dropped(DropReason::AlreadyCurrent)
    );
    assert!(!c.is_animating());
    c.request(Request::JumpTo(2), 0.0);
    // mid-transition the guard reports first
    assert!(!c.request(Request::JumpTo(2), 10.0).started());
    c.poll(TOTAL);
    assert_eq!(
        c.request(Request::JumpTo(2), TOTAL),
        Outcome::Dropped(DropReason::AlreadyCurrent)
    );
}

#[test]
fn jump_out_of_range_is_dropped() {
    let mut c = make_carousel(3);
    assert_eq!(
        c.request(Request::JumpTo(3), 0.0),
        Outcome::Dropped(DropReason::OutOfRange)
    );
    assert_eq!(c.current_index(), 0);
}

#[test]
fn single_card_never_moves() {
    let mut c = make_carousel(1);
    assert_eq!(
        c.request(Request::Advance, 0.0),
        Outcome::Dropped(DropReason::SingleCard)
    );
    assert_eq!(
        c.request(Request::Retreat, 0.0),
        Outcome::Dropped(DropReason::SingleCard)
    );
    assert_single_active(&c);
}

#[test]
fn plan_steps_are_ordered_and_measured_from_start() {
    let plan = TransitionPlan::new(1000.0, &CarouselConfig::default());
    let steps = plan.steps();
    assert_eq!(steps[0].step, TransitionStep::Deactivate);
    assert_eq!(steps[1].step, TransitionStep::Activate);
    assert_eq!(steps[2].step, TransitionStep::Unlock);
    assert_eq!(steps[0].at_ms, 1000.0);
    assert_eq!(steps[1].at_ms, 1000.0 + ACTIVATE_DELAY);
    assert_eq!(steps[2].at_ms, 1000.0 + TOTAL);
    assert!(steps[1].at_ms < steps[2].at_ms);
}

#[test]
fn transition_window_has_no_active_card() {
    let mut c = make_carousel(4);
    c.request(Request::Advance, 0.0);
    assert_eq!(c.phase(), Phase::Transitioning);
    assert_eq!(c.active_index(), None);

    let view = render(&c);
    assert!(view.animating);
    assert_eq!(view.active_cards().count(), 0);
    // indicators move at activation, so the outgoing one is still lit
    assert_eq!(view.active_indicators().collect::<Vec<_>>(), vec![0]);

    let fired = c.poll(ACTIVATE_DELAY - 1.0);
    assert!(fired.is_empty());
    let fired = c.poll(ACTIVATE_DELAY);
    assert_eq!(fired.as_slice(), &[TransitionStep::Activate]);
    assert_eq!(c.active_index(), Some(1));
    assert!(c.is_animating(), "unlock waits for the full duration");
    assert_single_active(&c);

    let fired = c.poll(TOTAL);
    assert_eq!(fired.as_slice(), &[TransitionStep::Unlock]);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn late_poll_fires_remaining_steps_in_order() {
    let mut c = make_carousel(3);
    c.request(Request::Retreat, 0.0);
    let fired = c.poll(10_000.0);
    assert_eq!(
        fired.as_slice(),
        &[TransitionStep::Activate, TransitionStep::Unlock]
    );
    assert_eq!(c.current_index(), 2);
    assert_single_active(&c);
}

#[test]
fn parked_pose_depends_on_relative_index_only() {
    // Retreat 0 -> 4 and jump 0 -> 4 must pose the other cards identically.
    let mut a = make_carousel(5);
    let mut b = make_carousel(5);
    settle(&mut a, Request::Retreat, 0.0);
    settle(&mut b, Request::JumpTo(4), 0.0);
    assert_eq!(render(&a), render(&b));

    let view = render(&a);
    for (i, card) in view.cards.iter().enumerate() {
        if i < 4 {
            assert_eq!(card.pose, CardPose::FromLeft, "card {i}");
            assert_eq!(card.transform_css(), "translateX(-100px) rotateY(-10deg)");
            assert_eq!(card.z_index, 1);
        }
    }
    assert_eq!(view.cards[4].transform_css(), "translateX(0px) rotateY(0deg)");
    assert_eq!(view.cards[4].opacity_css(), "1");
    assert_eq!(view.cards[4].z_index, 5);
}

#[test]
fn incoming_card_keeps_pose_relative_to_outgoing_until_activation() {
    let mut c = make_carousel(5);
    settle(&mut c, Request::JumpTo(3), 0.0);
    c.request(Request::JumpTo(1), 2000.0);
    let view = render(&c);
    assert_eq!(view.cards[1].pose, CardPose::FromLeft);
    assert!(!view.cards[1].active);
    assert_eq!(view.cards[3].pose, CardPose::FromRight);
    assert_eq!(view.cards[0].pose, CardPose::FromLeft);
}

#[test]
fn indicator_scale_pulses_on_active_only() {
    let mut c = make_carousel(3);
    settle(&mut c, Request::Advance, 0.0);
    let view = render(&c);
    assert_eq!(view.indicators[1].scale, 1.2);
    assert_eq!(view.indicators[1].transform_css(), "scale(1.2)");
    assert_eq!(view.indicators[0].scale, 1.0);
    assert_eq!(view.indicators[2].transform_css(), "scale(1)");
}

#[test]
fn render_is_idempotent() {
    let mut c = make_carousel(4);
    c.request(Request::Advance, 0.0);
    assert_eq!(render(&c), render(&c));
    c.poll(ACTIVATE_DELAY);
    assert_eq!(render(&c), render(&c));
}
