//! Browser listeners. Each one translates a DOM event into engine input and
//! leaves all state changes to the next frame.

use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::StoryEngine;
use web_sys as web;

mod click;
mod keyboard;
mod lifecycle;
mod pointer;
mod scroll;

#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<StoryEngine>>,
}

pub fn wire_all(w: &Wiring, frame_ctx: &Rc<RefCell<FrameContext<'static>>>) {
    scroll::wire_scroll(w);
    scroll::wire_resize(w);
    pointer::wire_pointermove(w);
    keyboard::wire_keydown(w);
    click::wire_clicks(w);
    lifecycle::wire_load(w);
    lifecycle::wire_pagehide(w, frame_ctx.clone());
}
