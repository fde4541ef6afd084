//! The scroll-to-scene engine: owns every piece of runtime state and pushes
//! changes out through the collaborator traits.
//!
//! One call to [`StoryEngine::tick`] is one frame:
//! 1. queued input is applied in arrival order (scroll samples fire trigger
//!    crossings and their effects before anything reads visibility),
//! 2. the pointer and scroll followers step,
//! 3. the timeline is evaluated at the displayed cursor and any change is
//!    pushed to the renderer,
//! 4. fog transitions advance,
//! 5. visible props animate.

use crate::animator::{Animator, FrameClock};
use crate::audio::AudioDirector;
use crate::boundary::{Collaborators, RenderSink, Uniform, UniformValue};
use crate::chapter::Chapter;
use crate::constants::FOG_TWEEN_SEC;
use crate::easing::Easing;
use crate::error::{Result, StoryError};
use crate::input::{normalize_pointer, ClickTarget, InputEvent, PointerSmoother, ScrubCursor};
use crate::layout::PageLayout;
use crate::params::SceneParams;
use crate::props;
use crate::registry::SceneRegistry;
use crate::slider::{HeroGallery, ModalSlider};
use crate::story::{Story, StoryConfig};
use crate::timeline::ParameterTimeline;
use crate::trigger::{Effect, Effects, Firings, TriggerTable};
use crate::tween::Tweened;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

/// Scene-wide mutable state shared by triggers, timeline and animator.
pub struct SceneContext {
    pub registry: SceneRegistry,
    pub fog_density: Tweened<f32>,
    pub fog_color: Tweened<Vec3>,
    pub params: Option<SceneParams>,
    pushed_fog: Option<(f32, Vec3)>,
}

impl SceneContext {
    fn new(registry: SceneRegistry, fog_density: f32, fog_color: Vec3) -> Self {
        Self {
            registry,
            fog_density: Tweened::new(fog_density),
            fog_color: Tweened::new(fog_color),
            params: None,
            pushed_fog: None,
        }
    }

    fn push_params(&mut self, params: SceneParams, cursor: f32, render: &mut dyn RenderSink) {
        if self.params == Some(params) {
            return;
        }
        if !params.color.is_finite()
            || !params.form_factor.is_finite()
            || !params.camera_position.is_finite()
            || !params.camera_rotation.is_finite()
        {
            log::warn!("[timeline] non-finite state at cursor {}; skipped", cursor);
            return;
        }
        render.set_uniform(Uniform::Color, UniformValue::Vec3(params.color));
        render.set_uniform(Uniform::FormFactor, UniformValue::Float(params.form_factor));
        render.set_uniform(Uniform::ScrollProgress, UniformValue::Float(cursor));
        render.set_camera_pose(params.camera_position, params.camera_rotation);
        self.params = Some(params);
    }

    fn push_fog(&mut self, render: &mut dyn RenderSink) {
        let fog = (self.fog_density.value(), self.fog_color.value());
        if self.pushed_fog == Some(fog) {
            return;
        }
        render.set_uniform(Uniform::FogDensity, UniformValue::Float(fog.0));
        render.set_uniform(Uniform::FogColor, UniformValue::Vec3(fog.1));
        self.pushed_fog = Some(fog);
    }
}

pub struct StoryEngine {
    chapters: Vec<Chapter>,
    timeline: ParameterTimeline,
    triggers: TriggerTable,
    scene: SceneContext,
    animator: Animator,
    clock: FrameClock,
    layout: Option<PageLayout>,
    viewport: Vec2,
    scroll: ScrubCursor,
    pointer: PointerSmoother,
    audio: AudioDirector,
    slider: ModalSlider,
    heroes: HeroGallery,
    queue: VecDeque<InputEvent>,
    firings: Firings,
    running: bool,
}

impl StoryEngine {
    pub fn new(config: StoryConfig, story: Story) -> Result<Self> {
        if story.chapters.is_empty() {
            return Err(StoryError::NoChapters);
        }
        let timeline = ParameterTimeline::new(story.base, story.steps)?;
        let triggers = TriggerTable::new(story.triggers)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut registry = SceneRegistry::new();
        props::populate(&mut registry, &mut rng);

        log::info!(
            "[story] {} chapters, {} steps, {} triggers, {} props",
            story.chapters.len(),
            timeline.len(),
            triggers.len(),
            registry.len()
        );
        Ok(Self {
            chapters: story.chapters,
            timeline,
            triggers,
            scene: SceneContext::new(registry, config.fog_density, config.fog_color),
            animator: Animator::new(config.seed.wrapping_add(1)),
            clock: FrameClock::new(),
            layout: None,
            viewport: Vec2::ZERO,
            scroll: ScrubCursor::new(config.scrub_lag_sec),
            pointer: PointerSmoother::new(),
            audio: AudioDirector::new(),
            slider: ModalSlider::new(config.slide_count),
            heroes: HeroGallery::new(config.hero_count),
            queue: VecDeque::new(),
            firings: Firings::new(),
            running: true,
        })
    }

    /// Hand every prop and the initial scene state to fresh collaborators.
    pub fn start(&mut self, c: &mut Collaborators<'_>) {
        self.scene.registry.sync_all(c.render);
        self.scene.params = None;
        self.scene.pushed_fog = None;
        self.scene.push_fog(c.render);
        let cursor = self.scroll.value();
        self.scene
            .push_params(self.timeline.evaluate(cursor), cursor, c.render);
        c.dom.set_sound_indicator(!self.audio.is_muted());
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn on_scroll(&mut self, fraction: f32) {
        self.push(InputEvent::Scroll(fraction));
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.push(InputEvent::PointerMove { x, y });
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.push(InputEvent::Resize { width, height });
    }

    pub fn on_layout(&mut self, layout: PageLayout) {
        self.push(InputEvent::Layout(layout));
    }

    pub fn on_key(&mut self, key: crate::input::Key) {
        self.push(InputEvent::Key(key));
    }

    pub fn on_click(&mut self, target: ClickTarget) {
        self.push(InputEvent::Click(target));
    }

    /// Advance one frame by `dt` seconds. Never fails: bad input degrades
    /// the affected effect and the frame carries on.
    pub fn tick(&mut self, dt: f32, c: &mut Collaborators<'_>) {
        if !self.running {
            return;
        }
        let dt = self.clock.advance(dt);

        while let Some(event) = self.queue.pop_front() {
            self.handle(event, c);
        }

        let pointer = self.pointer.step(dt);
        let cursor = self.scroll.step(dt);
        let params = self.timeline.evaluate(cursor);
        self.scene.push_params(params, cursor, c.render);

        self.scene.fog_density.advance(dt);
        self.scene.fog_color.advance(dt);
        self.scene.push_fog(c.render);

        let retired = self.animator.run(
            &mut self.scene.registry,
            &self.clock,
            dt,
            cursor,
            pointer,
            c.render,
        );
        for id in retired {
            self.scene.registry.finish_exit(id, c.render);
        }
    }

    /// End the session: fade audio and stop ticking.
    pub fn shutdown(&mut self, c: &mut Collaborators<'_>) {
        if !self.running {
            return;
        }
        self.running = false;
        self.queue.clear();
        self.audio.silence(c.audio);
        log::info!("[story] session ended after {:.1}s", self.clock.elapsed());
    }

    fn handle(&mut self, event: InputEvent, c: &mut Collaborators<'_>) {
        match event {
            InputEvent::Scroll(fraction) => {
                if !fraction.is_finite() {
                    log::warn!("[input] dropped non-finite scroll fraction");
                    return;
                }
                self.scroll.set_target(fraction);
                self.evaluate_triggers(c);
            }
            InputEvent::PointerMove { x, y } => {
                let p = normalize_pointer(x, y, self.viewport.x, self.viewport.y);
                self.pointer.set_target(p);
            }
            InputEvent::Resize { width, height } => {
                if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
                    log::warn!("[input] ignoring resize to {}x{}", width, height);
                    return;
                }
                self.viewport = Vec2::new(width, height);
                c.render.set_viewport(width, height);
                if let Some(layout) = self.layout.as_mut() {
                    layout.viewport_width = width;
                    layout.viewport_height = height;
                    self.triggers.relayout(layout);
                }
            }
            InputEvent::Layout(layout) => {
                self.viewport = Vec2::new(layout.viewport_width, layout.viewport_height);
                c.render
                    .set_viewport(layout.viewport_width, layout.viewport_height);
                self.triggers.relayout(&layout);
                self.layout = Some(layout);
                if !self.triggers.is_primed() {
                    self.evaluate_triggers(c);
                }
            }
            InputEvent::Key(key) => {
                self.slider.key(key, c.dom);
            }
            InputEvent::Click(target) => self.click(target, c),
        }
    }

    fn click(&mut self, target: ClickTarget, c: &mut Collaborators<'_>) {
        match target {
            ClickTarget::KnowledgeCard(i) => self.slider.open_at(i, c.dom),
            ClickTarget::ModalClose => self.slider.close(c.dom),
            ClickTarget::SlidePrev => self.slider.prev(c.dom),
            ClickTarget::SlideNext => self.slider.next(c.dom),
            ClickTarget::SlideDot(i) => self.slider.go_to(i as isize, c.dom),
            ClickTarget::TimelineItem(i) => match self.chapters.get(i) {
                Some(&chapter) => c.dom.scroll_to_chapter(chapter),
                None => log::warn!("[input] no chapter at timeline index {}", i),
            },
            ClickTarget::HeroCard(i) => self.heroes.activate(i, c.dom),
            ClickTarget::SoundToggle => self.audio.toggle(c.audio, c.dom),
        }
    }

    fn evaluate_triggers(&mut self, c: &mut Collaborators<'_>) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let px = layout.scroll_px(self.scroll.target());
        let mut firings = std::mem::take(&mut self.firings);
        firings.clear();
        self.triggers.evaluate(px, &mut firings);
        for firing in &firings {
            let effects = Effects::from_slice(self.triggers.effects(*firing));
            for effect in effects {
                self.apply(effect, c);
            }
        }
        self.firings = firings;
    }

    fn apply(&mut self, effect: Effect, c: &mut Collaborators<'_>) {
        match effect {
            Effect::Show(id) => {
                self.scene.registry.show(id, c.render);
            }
            Effect::Hide(id) => {
                self.scene.registry.hide(id, c.render);
            }
            Effect::FogDensity(d) => {
                self.scene
                    .fog_density
                    .retarget(d, FOG_TWEEN_SEC, Easing::Power1Out);
            }
            Effect::FogColor(rgb) => {
                self.scene
                    .fog_color
                    .retarget(rgb, FOG_TWEEN_SEC, Easing::Power1Out);
            }
            Effect::PlayAudio(chapter) => self.audio.enter(chapter, c.audio),
            Effect::Highlight(index) => c.dom.highlight_chapter(index),
            Effect::RevealTitle(chapter) => c.dom.reveal_title(chapter),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn cursor(&self) -> f32 {
        self.scroll.value()
    }

    pub fn params(&self) -> SceneParams {
        self.timeline.evaluate(self.scroll.value())
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.value()
    }

    pub fn fog_density(&self) -> f32 {
        self.scene.fog_density.value()
    }

    pub fn fog_color(&self) -> Vec3 {
        self.scene.fog_color.value()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn scene(&self) -> &SceneContext {
        &self.scene
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.scene.registry
    }

    pub fn timeline(&self) -> &ParameterTimeline {
        &self.timeline
    }

    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.layout.as_ref()
    }

    pub fn audio(&self) -> &AudioDirector {
        &self.audio
    }

    pub fn slider(&self) -> &ModalSlider {
        &self.slider
    }

    pub fn heroes(&self) -> &HeroGallery {
        &self.heroes
    }
}
