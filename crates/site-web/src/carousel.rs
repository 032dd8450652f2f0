//! Browser side of the case-study carousel.
//!
//! Looks up the slider collaborators, funnels every DOM input into the
//! [`CarouselController`], and applies the rendered [`CarouselView`] back to
//! the page. A single timeout is kept armed for the controller's next
//! deadline, whether that is a transition step or an auto-advance tick.

use crate::constants::*;
use crate::dom;
use site_core::constants::CLICK_FEEDBACK_MS;
use site_core::{
    CarouselConfig, CarouselController, CarouselView, Outcome, TransitionStep, CONFIG_ATTRIBUTES,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page elements the carousel reads from and writes to.
struct CarouselDom {
    slider: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    indicators: Vec<web::HtmlElement>,
    prev: Option<web::HtmlElement>,
    next: Option<web::HtmlElement>,
}

#[derive(Clone, Copy, Debug)]
enum Control {
    Prev,
    Next,
}

struct Shared {
    controller: RefCell<CarouselController>,
    dom: CarouselDom,
    timer: Cell<Option<i32>>,
    timer_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    torn_down: Cell<bool>,
}

/// Page-lifetime owner of the carousel. Dropping it stops every timer.
pub struct CarouselHandle {
    shared: Rc<Shared>,
}

impl CarouselHandle {
    pub fn teardown(&self) {
        if self.shared.torn_down.replace(true) {
            return;
        }
        self.shared.controller.borrow_mut().teardown();
        self.shared.disarm();
        log::info!("[carousel] torn down");
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<CarouselHandle> {
    let slider = dom::query_one(document, SLIDER_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", SLIDER_SELECTOR))?;
    let cards = dom::query_all(document, CARD_SELECTOR);
    let indicators = dom::query_all(document, INDICATOR_SELECTOR);
    if indicators.len() != cards.len() {
        log::warn!(
            "[carousel] {} cards but {} indicators; extra elements are ignored",
            cards.len(),
            indicators.len()
        );
    }
    let prev = dom::query_one(document, PREV_SELECTOR);
    let next = dom::query_one(document, NEXT_SELECTOR);
    if prev.is_none() || next.is_none() {
        log::warn!("[carousel] navigation controls missing; keys and swipes still work");
    }

    let config = read_config(&slider);
    let controller = CarouselController::new(cards.len(), config)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let shared = Rc::new(Shared {
        controller: RefCell::new(controller),
        dom: CarouselDom {
            slider,
            cards,
            indicators,
            prev,
            next,
        },
        timer: Cell::new(None),
        timer_cb: RefCell::new(None),
        torn_down: Cell::new(false),
    });

    let weak = Rc::downgrade(&shared);
    *shared.timer_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(s) = weak.upgrade() {
            s.on_timer();
        }
    }) as Box<dyn FnMut()>));

    shared.apply_view();
    wire_controls(&shared);
    wire_indicators(&shared);
    wire_keys(&shared);
    wire_swipe(&shared);
    wire_hover(&shared);
    wire_card_lift(&shared);

    shared.controller.borrow_mut().start(dom::now_ms());
    shared.arm();
    log::info!(
        "[carousel] ready with {} cards",
        shared.controller.borrow().carousel().card_count()
    );
    Ok(CarouselHandle { shared })
}

/// Defaults overridden by whatever `data-*` attributes the slider carries.
fn read_config(slider: &web::HtmlElement) -> CarouselConfig {
    let mut config = CarouselConfig::default();
    for key in CONFIG_ATTRIBUTES {
        if let Some(value) = slider.get_attribute(key) {
            if let Err(e) = config.apply_attribute(key, &value) {
                log::warn!("[carousel] ignoring override: {}", e);
            }
        }
    }
    config
}

impl Shared {
    fn live(&self) -> bool {
        !self.torn_down.get()
    }

    fn control(&self, which: Control) -> Option<&web::HtmlElement> {
        match which {
            Control::Prev => self.dom.prev.as_ref(),
            Control::Next => self.dom.next.as_ref(),
        }
    }

    /// Activate a navigation control, as if it had been clicked.
    fn press(&self, which: Control) {
        if !self.live() {
            return;
        }
        let now = dom::now_ms();
        let outcome = {
            let mut c = self.controller.borrow_mut();
            match which {
                Control::Prev => c.prev(now),
                Control::Next => c.next(now),
            }
        };
        if outcome.started() {
            if let Some(el) = self.control(which) {
                dom::flash_class(el, CLICKED_CLASS, CLICK_FEEDBACK_MS);
                dom::spawn_ripple(el);
            }
            log::debug!("[carousel] {:?} -> {:?}", which, outcome);
        }
        self.after_input(outcome);
    }

    fn after_input(&self, outcome: Outcome) {
        if outcome.started() {
            self.apply_view();
            self.arm();
        }
    }

    fn on_timer(&self) {
        self.timer.set(None);
        if !self.live() {
            return;
        }
        let poll = self.controller.borrow_mut().poll(dom::now_ms());
        if poll.changed() {
            self.apply_view();
        }
        if poll.steps.contains(&TransitionStep::Activate) {
            self.on_activated();
        }
        self.arm();
    }

    fn on_activated(&self) {
        let current = self.controller.borrow().carousel().current_index();
        if current > 0 {
            if let Some(prev) = &self.dom.prev {
                dom::spawn_ripple(prev);
            }
        }
    }

    /// Re-arm the single timeout for the controller's next deadline.
    fn arm(&self) {
        self.disarm();
        if !self.live() {
            return;
        }
        let Some(deadline) = self.controller.borrow().next_deadline() else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let delay = (deadline - dom::now_ms()).max(0.0).ceil() as i32;
        let cb = self.timer_cb.borrow();
        if let Some(cb) = cb.as_ref() {
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay,
            ) {
                Ok(handle) => self.timer.set(Some(handle)),
                Err(e) => log::error!("[carousel] setTimeout failed: {:?}", e),
            }
        }
    }

    fn disarm(&self) {
        if let Some(handle) = self.timer.take() {
            dom::clear_timeout(handle);
        }
    }

    fn apply_view(&self) {
        let view = self.controller.borrow().view();
        apply_view(&self.dom, &view);
    }
}

fn apply_view(els: &CarouselDom, view: &CarouselView) {
    dom::set_class(&els.slider, ANIMATING_CLASS, view.animating);
    for (el, card) in els.cards.iter().zip(&view.cards) {
        dom::set_class(el, ACTIVE_CLASS, card.active);
        dom::set_style(el, "transform", &card.transform_css());
        dom::set_style(el, "opacity", &card.opacity_css());
        dom::set_style(el, "z-index", &card.z_index.to_string());
    }
    for (el, dot) in els.indicators.iter().zip(&view.indicators) {
        dom::set_class(el, ACTIVE_CLASS, dot.active);
        dom::set_style(el, "transform", &dot.transform_css());
    }
}

// ---------------- Input wiring ----------------

fn wire_controls(shared: &Rc<Shared>) {
    for which in [Control::Prev, Control::Next] {
        let Some(el) = shared.control(which) else {
            continue;
        };
        let s = shared.clone();
        dom::on(el, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            s.press(which);
        });
    }
}

fn wire_indicators(shared: &Rc<Shared>) {
    for (i, dot) in shared.dom.indicators.iter().enumerate() {
        let s = shared.clone();
        let el = dot.clone();
        dom::on(dot, "click", move |_ev: web::MouseEvent| {
            if !s.live() {
                return;
            }
            let outcome = s.controller.borrow_mut().indicator(i, dom::now_ms());
            if outcome.started() {
                dom::flash_class(&el, CLICKED_CLASS, CLICK_FEEDBACK_MS);
                log::debug!("[carousel] indicator {} -> {:?}", i, outcome);
            }
            s.after_input(outcome);
        });
    }
}

fn wire_keys(shared: &Rc<Shared>) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shared.clone();
    dom::on(&window, "keydown", move |ev: web::KeyboardEvent| {
        match site_core::request_for_key(&ev.key()) {
            Some(site_core::Request::Advance) => s.press(Control::Next),
            Some(site_core::Request::Retreat) => s.press(Control::Prev),
            _ => {}
        }
    });
}

fn touch_screen_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

fn wire_swipe(shared: &Rc<Shared>) {
    let s = shared.clone();
    dom::on(&shared.dom.slider, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = touch_screen_x(&ev) {
            s.controller.borrow_mut().touch_start(x);
        }
    });
    let s = shared.clone();
    dom::on(&shared.dom.slider, "touchend", move |ev: web::TouchEvent| {
        let Some(x) = touch_screen_x(&ev) else {
            return;
        };
        let gesture = s.controller.borrow_mut().swipe_gesture(x);
        match gesture {
            Some(site_core::Request::Advance) => s.press(Control::Next),
            Some(site_core::Request::Retreat) => s.press(Control::Prev),
            _ => {}
        }
    });
}

fn wire_hover(shared: &Rc<Shared>) {
    let s = shared.clone();
    dom::on(&shared.dom.slider, "mouseenter", move |_ev: web::MouseEvent| {
        if !s.live() {
            return;
        }
        s.controller.borrow_mut().pointer_enter();
        s.arm();
    });
    let s = shared.clone();
    dom::on(&shared.dom.slider, "mouseleave", move |_ev: web::MouseEvent| {
        if !s.live() {
            return;
        }
        s.controller.borrow_mut().pointer_leave(dom::now_ms());
        s.arm();
    });
}

fn wire_card_lift(shared: &Rc<Shared>) {
    for card in &shared.dom.cards {
        let el = card.clone();
        dom::on(card, "mouseenter", move |_ev: web::MouseEvent| {
            if el.class_list().contains(ACTIVE_CLASS) {
                dom::set_style(&el, "box-shadow", CARD_LIFT_SHADOW);
                dom::set_style(&el, "transform", CARD_LIFT_TRANSFORM);
            }
        });
        let el = card.clone();
        dom::on(card, "mouseleave", move |_ev: web::MouseEvent| {
            if el.class_list().contains(ACTIVE_CLASS) {
                dom::set_style(&el, "box-shadow", CARD_REST_SHADOW);
                dom::set_style(&el, "transform", CARD_REST_TRANSFORM);
            }
        });
    }
}
