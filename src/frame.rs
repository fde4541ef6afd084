use crate::audio::SectionPlayer;
use crate::dom::DomBridge;
use crate::render;
use glam::{Vec3, Vec4};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use story_core::{
    AudioSink, Chapter, Collaborators, ElementId, RenderSink, StoryEngine, Transform, Uniform,
    UniformValue,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stand-in renderer when WebGPU is unavailable; the page still scrolls,
/// plays and reacts.
struct Headless;

impl RenderSink for Headless {
    fn set_uniform(&mut self, _uniform: Uniform, _value: UniformValue) {}
    fn set_visible(&mut self, _element: ElementId, _visible: bool) {}
    fn set_camera_pose(&mut self, _position: Vec3, _rotation: Vec3) {}
    fn set_transform(&mut self, _element: ElementId, _transform: Transform) {}
    fn upload_points(&mut self, _element: ElementId, _points: &[Vec4]) {}
}

/// Stand-in when no AudioContext could be created.
struct Silent;

impl AudioSink for Silent {
    fn play_section(&mut self, chapter: Chapter) {
        log::debug!("[audio] no context; {:?} stays silent", chapter);
    }
    fn mute_all(&mut self) {}
}

pub struct FrameContext<'a> {
    pub engine: Rc<RefCell<StoryEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub audio: Option<SectionPlayer>,
    pub dom: DomBridge,
    pub last_instant: Instant,
    headless: Headless,
    silent: Silent,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        engine: Rc<RefCell<StoryEngine>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
        audio: Option<SectionPlayer>,
        dom: DomBridge,
    ) -> Self {
        Self {
            engine,
            canvas,
            gpu,
            audio,
            dom,
            last_instant: Instant::now(),
            headless: Headless,
            silent: Silent,
        }
    }

    fn with_collaborators(&mut self, f: impl FnOnce(&mut StoryEngine, &mut Collaborators<'_>)) {
        let render: &mut dyn RenderSink = match self.gpu.as_mut() {
            Some(g) => g,
            None => &mut self.headless,
        };
        let audio: &mut dyn AudioSink = match self.audio.as_mut() {
            Some(a) => a,
            None => &mut self.silent,
        };
        let mut c = Collaborators {
            render,
            audio,
            dom: &mut self.dom,
        };
        f(&mut self.engine.borrow_mut(), &mut c);
    }

    /// Push the initial scene to the collaborators.
    pub fn start(&mut self) {
        self.last_instant = Instant::now();
        self.with_collaborators(|engine, c| engine.start(c));
    }

    pub fn shutdown(&mut self) {
        self.with_collaborators(|engine, c| engine.shutdown(c));
    }

    /// One display frame. Returns false once the session has ended.
    pub fn frame(&mut self) -> bool {
        if !self.engine.borrow().is_running() {
            return false;
        }
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        self.with_collaborators(|engine, c| engine.tick(dt_sec, c));
        self.dom.step(dt_sec);
        if let Some(a) = &mut self.audio {
            a.step();
        }

        let mut lost_device = false;
        if let Some(g) = &mut self.gpu {
            match g.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => lost_device = true,
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        if lost_device {
            log::error!("[gpu] out of memory; renderer disabled");
            self.gpu = None;
        }
        true
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive frames from requestAnimationFrame until the session ends.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx_tick.borrow_mut().frame() {
            request_frame(&tick_clone);
        } else {
            log::info!("[frame] loop stopped");
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
