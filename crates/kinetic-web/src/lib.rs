#![cfg(target_arch = "wasm32")]
use instant::Instant;
use kinetic_core::{LegCycle, RigConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod frame;
mod input;
mod overlay;
mod render;

const CANVAS_ID: &str = "leg-canvas";
const HOLD_BUTTON_ID: &str = "hold-button";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kinetic-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let config = RigConfig::default();
    config.validate()?;
    let cycle = Rc::new(RefCell::new(LegCycle::new()));
    let running = Rc::new(Cell::new(true));

    // Both the hold button and the scene itself accept the gesture
    input::wire_press_handlers(&canvas, cycle.clone());
    match document.get_element_by_id(HOLD_BUTTON_ID) {
        Some(button) => input::wire_press_handlers(&button, cycle.clone()),
        None => log::warn!("missing #{}; only the canvas accepts presses", HOLD_BUTTON_ID),
    }

    wire_teardown(cycle.clone(), running.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        cycle,
        config,
        canvas,
        ctx,
        document,
        running,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

// Cancel the animation and hold timer when the page goes away so nothing
// fires after disposal.
fn wire_teardown(cycle: Rc<RefCell<LegCycle>>, running: Rc<Cell<bool>>) {
    let closure = Closure::wrap(Box::new(move || {
        running.set(false);
        cycle.borrow_mut().teardown();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
