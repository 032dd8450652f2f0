#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod frame;
mod render;
mod responsive;

thread_local! {
    static CAROUSEL: RefCell<Option<carousel::CarouselHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the carousel timers. Listeners stay registered but become inert.
#[wasm_bindgen]
pub fn teardown() {
    CAROUSEL.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.teardown();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // each feature degrades on its own; one failing never blocks the rest
    match carousel::init(&document) {
        Ok(handle) => CAROUSEL.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::error!("[carousel] disabled: {:?}", e),
    }
    if let Err(e) = responsive::init_menu(&document) {
        log::warn!("[menu] disabled: {:?}", e);
    }
    if let Err(e) = responsive::init_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    if let Err(e) = responsive::init_layout(&document) {
        log::warn!("[resize] disabled: {:?}", e);
    }
    if let Err(e) = responsive::init_parallax(&document) {
        log::warn!("[parallax] disabled: {:?}", e);
    }
    responsive::init_tilt(&document);

    spawn_local(frame::init_scene(document));
    Ok(())
}
