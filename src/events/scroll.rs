use super::Wiring;
use crate::dom;

pub(super) fn wire_scroll(w: &Wiring) {
    let w2 = w.clone();
    dom::add_listener(&w.window, "scroll", move |_: web_sys::Event| {
        let fraction = dom::scroll_fraction(&w2.window, &w2.document);
        w2.engine.borrow_mut().on_scroll(fraction);
    });
}

/// Resize re-measures every section. Bands move; trigger phases do not.
pub(super) fn wire_resize(w: &Wiring) {
    let w2 = w.clone();
    dom::add_listener(&w.window, "resize", move |_: web_sys::Event| {
        dom::sync_canvas_backing_size(&w2.canvas);
        let (vw, vh) = dom::viewport_size(&w2.window);
        let layout = dom::measure_layout(&w2.window, &w2.document);
        let mut engine = w2.engine.borrow_mut();
        engine.on_resize(vw, vh);
        engine.on_layout(layout);
    });
}
