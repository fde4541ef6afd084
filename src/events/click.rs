use super::Wiring;
use crate::dom;
use story_core::ClickTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First ancestor (or self) whose id names a control.
fn click_target(start: web::Element) -> Option<ClickTarget> {
    let mut node = Some(start);
    while let Some(el) = node {
        if let Some(target) = ClickTarget::parse(&el.id()) {
            return Some(target);
        }
        node = el.parent_element();
    }
    None
}

/// One delegated listener for every page control.
pub(super) fn wire_clicks(w: &Wiring) {
    let engine = w.engine.clone();
    dom::add_listener(&w.document, "click", move |ev: web::MouseEvent| {
        let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        if let Some(target) = click_target(el) {
            log::debug!("[dom] click {:?}", target);
            engine.borrow_mut().on_click(target);
        }
    });
}
