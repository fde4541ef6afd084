#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use story_core::StoryConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod viewport;

use constants::CANVAS_SELECTOR;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("story-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CANVAS_SELECTOR))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let (slide_count, hero_count) = dom::tag_click_targets(&document);
    let engine = StoryConfig {
        slide_count,
        hero_count,
        ..StoryConfig::default()
    }
    .build()?;
    let engine = Rc::new(RefCell::new(engine));
    {
        let (vw, vh) = dom::viewport_size(&window);
        let mut e = engine.borrow_mut();
        e.on_resize(vw, vh);
        e.on_scroll(dom::scroll_fraction(&window, &document));
        e.on_layout(dom::measure_layout(&window, &document));
    }

    let audio = match audio::SectionPlayer::new() {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("[audio] init error: {:?}", e);
            None
        }
    };
    let bridge = dom::DomBridge::new(window.clone(), document.clone());
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine.clone(),
        canvas.clone(),
        gpu,
        audio,
        bridge,
    )));
    frame_ctx.borrow_mut().start();

    events::wire_all(
        &events::Wiring {
            window,
            document,
            canvas,
            engine,
        },
        &frame_ctx,
    );
    frame::start_loop(frame_ctx);
    Ok(())
}
