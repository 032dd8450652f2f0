use crate::constants::{HERO_SELECTOR, SCENE_CANVAS_STYLE};
use crate::dom;
use crate::render;
use instant::Instant;
use site_core::{pointer_ndc, Camera, Scene, SceneVertex};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub vertices: Vec<SceneVertex>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        {
            let mut scene = self.scene.borrow_mut();
            scene.advance(dt_sec);
            scene.write_vertices(&mut self.vertices);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let camera = Camera::hero(g.aspect());
            if let Err(e) = g.render(&camera, &self.vertices) {
                log::error!("[scene] render error: {:?}", e);
            }
        }
    }
}

/// Mount the hero canvas and start the render loop. A missing host element
/// or an unavailable GPU disables the scene only.
pub async fn init_scene(document: web::Document) {
    let Some(host) = dom::query_one(&document, HERO_SELECTOR) else {
        log::error!("[scene] {} not found; scene disabled", HERO_SELECTOR);
        return;
    };
    let canvas = match create_canvas(&document, &host) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[scene] canvas setup failed: {:?}", e);
            return;
        }
    };
    dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(Scene::default()));
    wire_resize(&canvas);
    wire_pointer(&document, scene.clone());

    let Some(gpu) = init_gpu(&canvas).await else {
        return;
    };
    let ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        canvas,
        gpu: Some(gpu),
        vertices: Vec::new(),
        last_instant: Instant::now(),
    }));
    start_loop(ctx);
    log::info!("[scene] running");
}

fn create_canvas(
    document: &web::Document,
    host: &web::HtmlElement,
) -> Result<web::HtmlCanvasElement, wasm_bindgen::JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web::HtmlCanvasElement>()?;
    canvas.set_attribute("style", SCENE_CANVAS_STYLE)?;
    host.append_child(&canvas)?;
    Ok(canvas)
}

fn wire_resize(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::on(&window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    });
}

fn wire_pointer(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    dom::on(document, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport_size();
        let ndc = pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, w as f32, h as f32);
        scene.borrow_mut().set_pointer(ndc);
    });
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // the surface borrows the canvas for the rest of the page's life
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[scene] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
