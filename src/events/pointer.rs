use super::Wiring;
use crate::dom;
use web_sys as web;

pub(super) fn wire_pointermove(w: &Wiring) {
    let engine = w.engine.clone();
    dom::add_listener(&w.window, "pointermove", move |ev: web::PointerEvent| {
        engine
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}
