use crate::constants::RIPPLE_CLASS;
use site_core::constants::RIPPLE_LIFETIME_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Monotonic milliseconds (`performance.now()`); the carousel's time base.
#[inline]
pub fn now_ms() -> f64 {
    instant::now()
}

fn collect_html(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect_html(document.query_selector_all(selector))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect_html(root.query_selector_all(selector))
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn on<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms`; returns the timeout handle.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .ok()
}

#[inline]
pub fn clear_timeout(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(handle);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Add `class` to `el` and take it off again after `ms`.
pub fn flash_class(el: &web::HtmlElement, class: &'static str, ms: i32) {
    set_class(el, class, true);
    let el = el.clone();
    set_timeout(ms, move || set_class(&el, class, false));
}

/// Append a short-lived ripple span to `el`.
pub fn spawn_ripple(el: &web::HtmlElement) {
    let Some(document) = window_document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    _ = ripple.class_list().add_1(RIPPLE_CLASS);
    if el.append_child(&ripple).is_err() {
        return;
    }
    set_timeout(RIPPLE_LIFETIME_MS, move || ripple.remove());
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
