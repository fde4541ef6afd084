use super::Wiring;
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Images and fonts shift sections after first paint; measure again once
/// the page has loaded.
pub(super) fn wire_load(w: &Wiring) {
    let w2 = w.clone();
    dom::add_listener(&w.window, "load", move |_: web::Event| {
        let layout = dom::measure_layout(&w2.window, &w2.document);
        w2.engine.borrow_mut().on_layout(layout);
    });
}

pub(super) fn wire_pagehide(w: &Wiring, frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    dom::add_listener(&w.window, "pagehide", move |_: web::Event| {
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.shutdown(),
            Err(_) => log::warn!("[frame] pagehide during a frame; shutdown skipped"),
        }
    });
}
