use kinetic_core::{Gesture, LegCycle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PRESS_EVENTS: [&str; 4] = ["pointerdown", "pointerup", "pointerleave", "pointercancel"];

pub fn wire_press_handlers(target: &web::Element, cycle: Rc<RefCell<LegCycle>>) {
    for event_type in PRESS_EVENTS {
        wire_press_event(target, event_type, cycle.clone());
    }
}

fn wire_press_event(target: &web::Element, event_type: &'static str, cycle: Rc<RefCell<LegCycle>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        ev.prevent_default();
        let Some(gesture) = Gesture::from_pointer_event(event_type) else {
            return;
        };
        if let Some(t) = cycle.borrow_mut().handle(gesture) {
            log::info!("[press] {} {:?} -> {:?}", event_type, t.from, t.to);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
    closure.forget();
}
