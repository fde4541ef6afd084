#![allow(dead_code)]

use glam::{Vec3, Vec4};
use story_core::{
    AudioSink, Chapter, Collaborators, DomSink, ElementId, RenderSink, SlideDirection, Transform,
    Uniform, UniformValue,
};

#[derive(Default)]
pub struct RecordingRender {
    pub uniforms: Vec<(Uniform, UniformValue)>,
    pub visibility: Vec<(ElementId, bool)>,
    pub camera: Vec<(Vec3, Vec3)>,
    pub transforms: Vec<(ElementId, Transform)>,
    pub uploads: Vec<(ElementId, usize)>,
    pub viewport: Option<(f32, f32)>,
}

impl RecordingRender {
    pub fn count(&self, uniform: Uniform) -> usize {
        self.uniforms.iter().filter(|(u, _)| *u == uniform).count()
    }

    pub fn last(&self, uniform: Uniform) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .rev()
            .find(|(u, _)| *u == uniform)
            .map(|(_, v)| *v)
    }

    pub fn shown(&self, id: ElementId) -> usize {
        self.visibility
            .iter()
            .filter(|(e, v)| *e == id && *v)
            .count()
    }
}

impl RenderSink for RecordingRender {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        self.uniforms.push((uniform, value));
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        self.visibility.push((element, visible));
    }

    fn set_camera_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.camera.push((position, rotation));
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        self.transforms.push((element, transform));
    }

    fn upload_points(&mut self, element: ElementId, points: &[Vec4]) {
        self.uploads.push((element, points.len()));
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Some((width, height));
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<Chapter>,
    pub mutes: usize,
}

impl AudioSink for RecordingAudio {
    fn play_section(&mut self, chapter: Chapter) {
        self.played.push(chapter);
    }

    fn mute_all(&mut self) {
        self.mutes += 1;
    }
}

#[derive(Default)]
pub struct RecordingDom {
    pub highlighted: Vec<usize>,
    pub opened: Vec<usize>,
    pub closed: usize,
    pub slides: Vec<(usize, SlideDirection)>,
    pub revealed: Vec<Chapter>,
    pub indicator: Vec<bool>,
    pub scrolled_to: Vec<Chapter>,
    pub heroes: Vec<usize>,
}

impl DomSink for RecordingDom {
    fn highlight_chapter(&mut self, index: usize) {
        self.highlighted.push(index);
    }

    fn open_modal(&mut self, slide: usize) {
        self.opened.push(slide);
    }

    fn close_modal(&mut self) {
        self.closed += 1;
    }

    fn set_slide(&mut self, index: usize, direction: SlideDirection) {
        self.slides.push((index, direction));
    }

    fn reveal_title(&mut self, chapter: Chapter) {
        self.revealed.push(chapter);
    }

    fn set_sound_indicator(&mut self, on: bool) {
        self.indicator.push(on);
    }

    fn scroll_to_chapter(&mut self, chapter: Chapter) {
        self.scrolled_to.push(chapter);
    }

    fn activate_hero(&mut self, index: usize) {
        self.heroes.push(index);
    }
}

#[derive(Default)]
pub struct Sinks {
    pub render: RecordingRender,
    pub audio: RecordingAudio,
    pub dom: RecordingDom,
}

impl Sinks {
    pub fn collab(&mut self) -> Collaborators<'_> {
        Collaborators {
            render: &mut self.render,
            audio: &mut self.audio,
            dom: &mut self.dom,
        }
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

pub fn approx_vec(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
