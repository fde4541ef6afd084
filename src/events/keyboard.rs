use super::Wiring;
use crate::dom;
use story_core::Key;
use web_sys as web;

pub(super) fn wire_keydown(w: &Wiring) {
    let engine = w.engine.clone();
    dom::add_listener(&w.document, "keydown", move |ev: web::KeyboardEvent| {
        let key = Key::from_dom(&ev.key());
        if key != Key::Other {
            engine.borrow_mut().on_key(key);
        }
    });
}
