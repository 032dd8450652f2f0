// Host-side tests for the controller: auto-advance, hover suspension, keys
// and swipe gestures.

use site_core::*;

const INTERVAL: f64 = 7000.0;
const TOTAL: f64 = 850.0;

fn make_controller(n: usize) -> CarouselController {
    let mut c = CarouselController::new(n, CarouselConfig::default()).unwrap();
    c.start(0.0);
    c
}

#[test]
fn timer_advances_once_per_interval() {
    let mut c = make_controller(5);
    assert_eq!(c.next_deadline(), Some(INTERVAL));
    let p = c.poll(INTERVAL - 1.0);
    assert!(!p.changed());
    let p = c.poll(INTERVAL);
    assert!(p.changed());
    assert_eq!(p.auto_ticks.len(), 1);
    assert_eq!(c.carousel().current_index(), 1);
    c.poll(INTERVAL + TOTAL);
    assert!(!c.carousel().is_animating());
    assert_eq!(c.next_deadline(), Some(2.0 * INTERVAL));
}

#[test]
fn timer_tick_while_animating_is_a_noop() {
    let mut c = make_controller(5);
    // manual transition started just before the tick
    assert!(c.next(INTERVAL - 100.0).started());
    let p = c.poll(INTERVAL);
    assert_eq!(
        p.auto_ticks.as_slice(),
        &[Outcome::Dropped(DropReason::Animating)]
    );
    assert_eq!(c.carousel().current_index(), 1);
    // the timer keeps its cadence rather than resyncing
    assert_eq!(c.autoplay().next_deadline(), Some(2.0 * INTERVAL));

    c.poll(2.0 * INTERVAL);
    assert_eq!(c.carousel().current_index(), 2, "next idle tick advances");
}

#[test]
fn unlock_due_at_tick_time_frees_the_guard_first() {
    let mut c = make_controller(4);
    c.next(INTERVAL - TOTAL);
    let p = c.poll(INTERVAL);
    assert!(p.steps.contains(&TransitionStep::Unlock));
    assert!(p.auto_ticks[0].started());
    assert_eq!(c.carousel().current_index(), 2);
}

#[test]
fn hover_suspends_timer_until_leave() {
    let mut c = make_controller(5);
    c.pointer_enter();
    assert!(c.is_hovered());
    assert!(!c.autoplay().is_running());
    for k in 1..5 {
        c.poll(k as f64 * INTERVAL);
    }
    assert_eq!(c.carousel().current_index(), 0);

    let leave_at = 30_000.0;
    c.pointer_leave(leave_at);
    assert_eq!(c.autoplay().next_deadline(), Some(leave_at + INTERVAL));
    c.poll(leave_at + INTERVAL - 1.0);
    assert_eq!(c.carousel().current_index(), 0, "fresh interval after leave");
    c.poll(leave_at + INTERVAL);
    assert_eq!(c.carousel().current_index(), 1);
}

#[test]
fn start_does_not_rearm_while_hovered() {
    let mut c = make_controller(3);
    c.pointer_enter();
    c.start(100.0);
    assert!(!c.autoplay().is_running());
}

#[test]
fn autoplay_disabled_by_config() {
    let cfg = CarouselConfig {
        autoplay: false,
        ..CarouselConfig::default()
    };
    let mut c = CarouselController::new(3, cfg).unwrap();
    c.start(0.0);
    assert_eq!(c.next_deadline(), None);
    c.pointer_leave(10.0);
    assert!(!c.autoplay().is_running());
}

#[test]
fn teardown_stops_timer() {
    let mut c = make_controller(3);
    c.teardown();
    assert_eq!(c.next_deadline(), None);
    assert!(!c.poll(100_000.0).changed());
}

#[test]
fn next_deadline_prefers_earliest() {
    let mut c = make_controller(3);
    c.next(0.0);
    assert_eq!(c.next_deadline(), Some(50.0));
    c.poll(50.0);
    assert_eq!(c.next_deadline(), Some(TOTAL));
    c.poll(TOTAL);
    assert_eq!(c.next_deadline(), Some(INTERVAL));
}

#[test]
fn arrow_keys_map_to_advance_and_retreat() {
    let mut c = make_controller(3);
    assert_eq!(
        c.key("ArrowRight", 0.0),
        Some(Outcome::Started { from: 0, to: 1 })
    );
    c.poll(TOTAL);
    assert_eq!(
        c.key("ArrowLeft", 1000.0),
        Some(Outcome::Started { from: 1, to: 0 })
    );
    assert_eq!(c.key("Enter", 5000.0), None);
    assert_eq!(c.key("ArrowUp", 5000.0), None);
}

#[test]
fn swipe_below_threshold_is_ignored() {
    let mut c = make_controller(3);
    c.touch_start(200.0);
    assert_eq!(c.touch_end(151.0, 0.0), None);
    c.touch_start(200.0);
    assert_eq!(c.touch_end(249.0, 0.0), None);
    assert_eq!(c.carousel().current_index(), 0);
}

#[test]
fn swipe_at_threshold_moves_once() {
    let mut c = make_controller(4);
    c.touch_start(300.0);
    assert_eq!(
        c.touch_end(250.0, 0.0),
        Some(Outcome::Started { from: 0, to: 1 })
    );
    c.poll(TOTAL);
    c.touch_start(100.0);
    assert_eq!(
        c.touch_end(400.0, 1000.0),
        Some(Outcome::Started { from: 1, to: 0 })
    );
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut c = make_controller(3);
    assert_eq!(c.touch_end(0.0, 0.0), None);
    c.touch_start(300.0);
    c.touch_end(0.0, 0.0);
    // the start is consumed by the first end
    assert_eq!(c.touch_end(0.0, 5000.0), None);
}

#[test]
fn swipe_request_classifies_direction() {
    assert_eq!(swipe_request(100.0, 50.0, 50.0), Some(Request::Advance));
    assert_eq!(swipe_request(100.0, 150.0, 50.0), Some(Request::Retreat));
    assert_eq!(swipe_request(100.0, 100.0, 50.0), None);
    assert_eq!(request_for_key("ArrowRight"), Some(Request::Advance));
    assert_eq!(request_for_key("ArrowLeft"), Some(Request::Retreat));
    assert_eq!(request_for_key("a"), None);
}

#[test]
fn indicator_jump_ignored_when_current() {
    let mut c = make_controller(4);
    assert_eq!(
        c.indicator(0, 0.0),
        Outcome::Dropped(DropReason::AlreadyCurrent)
    );
    assert!(c.indicator(3, 0.0).started());
    assert_eq!(c.view().cards.len(), 4);
}

#[test]
fn auto_advance_model_keeps_cadence() {
    let mut a = AutoAdvance::new(100.0);
    assert_eq!(a.poll(1000.0), None, "stopped timer never ticks");
    a.start(0.0);
    assert_eq!(a.poll(99.0), None);
    // slightly late but inside the next period: fires at its deadline
    assert_eq!(a.poll(150.0), Some(100.0));
    assert_eq!(a.next_deadline(), Some(200.0));
    // a whole period missed: one tick now, re-armed from now
    assert_eq!(a.poll(350.0), Some(350.0));
    assert_eq!(a.next_deadline(), Some(450.0));
    assert_eq!(a.poll(350.0), None);
    a.start(500.0);
    assert_eq!(a.next_deadline(), Some(600.0));
    a.stop();
    assert!(!a.is_running());
}

#[test]
fn late_wakeup_advances_only_once() {
    let mut c = make_controller(5);
    // a throttled background tab wakes up long after several intervals
    let p = c.poll(60_000.0);
    assert_eq!(p.auto_ticks.len(), 1);
    assert!(p.auto_ticks[0].started());
    assert_eq!(c.carousel().current_index(), 1);
    assert_eq!(c.next_deadline(), Some(60_000.0 + 50.0));
    assert_eq!(c.autoplay().next_deadline(), Some(60_000.0 + INTERVAL));

    c.poll(60_000.0 + TOTAL);
    assert!(!c.carousel().is_animating());
    assert_eq!(c.carousel().current_index(), 1);
}

#[test]
fn clock_stepping_back_does_not_hold_the_guard() {
    let t0 = 1_700_000_000_000.0;
    let mut c = CarouselController::new(4, CarouselConfig::default()).unwrap();
    c.start(t0);
    assert!(c.next(t0).started());

    // wall clock set back one hour mid-transition
    let back = t0 - 3_600_000.0;
    c.poll(back);
    let deadline = c.next_deadline().unwrap();
    assert!(deadline - back <= TOTAL, "guard released within one transition");
    assert!(c.autoplay().next_deadline().unwrap() - back <= INTERVAL);

    c.poll(back + TOTAL);
    assert!(!c.carousel().is_animating());
    assert!(c.next(back + TOTAL + 1.0).started());
    assert_eq!(c.carousel().current_index(), 2);
}

#[test]
fn request_after_clock_step_back_rearms_a_near_deadline() {
    let t0 = 10_000_000.0;
    let mut c = CarouselController::new(3, CarouselConfig::default()).unwrap();
    c.start(t0);
    assert!(c.next(t0).started());
    let back = t0 - 3_600_000.0;
    assert_eq!(
        c.next(back),
        Outcome::Dropped(DropReason::Animating),
        "still inside the transition"
    );
    let deadline = c.next_deadline().unwrap();
    assert!(deadline >= back && deadline - back <= TOTAL);
}
