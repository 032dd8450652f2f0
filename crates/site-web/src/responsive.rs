//! Page-wide helpers that sit beside the carousel: the mobile menu, scroll
//! reveal, the debounced layout class, parallax and pointer tilt.

use crate::constants::*;
use crate::dom;
use site_core::constants::{
    PARALLAX_DEFAULT_SPEED, RESIZE_DEBOUNCE_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use site_core::{parallax_offset, parse_parallax_speed, tilt_angles, tilt_transform_css, LayoutBucket};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn init_menu(document: &web::Document) -> anyhow::Result<()> {
    let button = dom::query_one(document, MENU_BUTTON_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", MENU_BUTTON_SELECTOR))?;
    let nav = dom::query_one(document, NAV_MENU_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", NAV_MENU_SELECTOR))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let overlay = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("overlay: {:?}", e))?;
    _ = overlay.class_list().add_1(MENU_OVERLAY_CLASS);
    body.append_child(&overlay)
        .map_err(|e| anyhow::anyhow!("overlay: {:?}", e))?;

    let menu = Rc::new(Menu {
        button: button.clone(),
        nav: nav.clone(),
        overlay: overlay.clone(),
        body,
    });

    let m = menu.clone();
    dom::on(&button, "click", move |_ev: web::MouseEvent| m.toggle());
    let m = menu.clone();
    dom::on(&overlay, "click", move |_ev: web::MouseEvent| m.close());
    for link in dom::query_all_in(&nav, "a") {
        let m = menu.clone();
        dom::on(&link, "click", move |_ev: web::MouseEvent| m.close());
    }
    log::info!("[menu] ready");
    Ok(())
}

struct Menu {
    button: web::HtmlElement,
    nav: web::HtmlElement,
    overlay: web::Element,
    body: web::HtmlElement,
}

impl Menu {
    fn toggle(&self) {
        _ = self.nav.class_list().toggle(ACTIVE_CLASS);
        _ = self.button.class_list().toggle(ACTIVE_CLASS);
        _ = self.overlay.class_list().toggle(ACTIVE_CLASS);
        _ = self.body.class_list().toggle(MENU_OPEN_BODY_CLASS);
    }

    fn close(&self) {
        dom::set_class(&self.nav, ACTIVE_CLASS, false);
        dom::set_class(&self.button, ACTIVE_CLASS, false);
        dom::set_class(&self.overlay, ACTIVE_CLASS, false);
        dom::set_class(&self.body, MENU_OPEN_BODY_CLASS, false);
    }
}

/// Add the reveal class to each marked element the first time it scrolls
/// into view.
pub fn init_reveal(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::set_class(&target, REVEALED_CLASS, true);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", targets.len());
    Ok(())
}

/// Keep exactly one `layout-*` class on `<body>`, recomputed 250 ms after
/// the last resize event.
pub fn init_layout(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    apply_layout(&body);

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    dom::on(&window, "resize", move |_ev: web::Event| {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(handle);
        }
        let body = body.clone();
        let slot = pending.clone();
        let handle = dom::set_timeout(RESIZE_DEBOUNCE_MS, move || {
            slot.set(None);
            apply_layout(&body);
        });
        pending.set(handle);
    });
    Ok(())
}

fn apply_layout(body: &web::HtmlElement) {
    let (width, _) = dom::viewport_size();
    let bucket = LayoutBucket::for_width(width);
    for b in LayoutBucket::ALL {
        dom::set_class(body, b.class_name(), b == bucket);
    }
    log::debug!("[resize] {:?} at {}px", bucket, width);
}

pub fn init_parallax(document: &web::Document) -> anyhow::Result<()> {
    let elements: Vec<(web::HtmlElement, f64)> = dom::query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let speed = parse_parallax_speed(
                el.get_attribute(PARALLAX_ATTR).as_deref(),
                PARALLAX_DEFAULT_SPEED,
            );
            (el, speed)
        })
        .collect();
    if elements.is_empty() {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let count = elements.len();
    let w = window.clone();
    dom::on(&window, "scroll", move |_ev: web::Event| {
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        let (_, viewport_h) = dom::viewport_size();
        for (el, speed) in &elements {
            let rect = el.get_bounding_client_rect();
            let top = rect.top() + scroll_y;
            if let Some(offset) = parallax_offset(scroll_y, top, rect.height(), viewport_h, *speed)
            {
                dom::set_style(el, "transform", &format!("translateY({}px)", offset));
            }
        }
    });
    log::info!("[parallax] {} elements", count);
    Ok(())
}

pub fn init_tilt(document: &web::Document) {
    for el in dom::query_all(document, TILT_SELECTOR) {
        let target = el.clone();
        dom::on(&el, "mousemove", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let (rx, ry) = tilt_angles(x, y, rect.width(), rect.height());
            dom::set_style(&target, "transform", &tilt_transform_css(rx, ry));
        });
        let target = el.clone();
        dom::on(&el, "mouseleave", move |_ev: web::MouseEvent| {
            dom::set_style(&target, "transform", &tilt_transform_css(0.0, 0.0));
        });
    }
}
