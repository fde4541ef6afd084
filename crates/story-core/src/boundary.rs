//! Interfaces to the collaborators the engine drives: renderer, section audio
//! player and DOM layer. The engine only ever pushes state through these.

use crate::chapter::Chapter;
use crate::registry::ElementId;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Uniform {
    Time,
    Color,
    FormFactor,
    ScrollProgress,
    FogDensity,
    FogColor,
    ScanHeight,
}

impl Uniform {
    pub fn name(self) -> &'static str {
        match self {
            Uniform::Time => "uTime",
            Uniform::Color => "uColor",
            Uniform::FormFactor => "uFormFactor",
            Uniform::ScrollProgress => "uScrollProgress",
            Uniform::FogDensity => "uFogDensity",
            Uniform::FogColor => "uFogColor",
            Uniform::ScanHeight => "uScanHeight",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec3(Vec3),
}

/// Placement of a scene element. Rotation is Euler XYZ in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }
}

pub trait RenderSink {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue);
    fn set_visible(&mut self, element: ElementId, visible: bool);
    fn set_camera_pose(&mut self, position: Vec3, rotation: Vec3);
    fn set_transform(&mut self, element: ElementId, transform: Transform);
    /// Point positions (xyz) with a per-point random seed in w.
    fn upload_points(&mut self, element: ElementId, points: &[Vec4]);
    fn set_viewport(&mut self, _width: f32, _height: f32) {}
}

/// Section audio. Implementations own file loading, fade curves and playback
/// errors; nothing they do may fail back into the engine.
pub trait AudioSink {
    /// Cross-fade from whatever is playing to this section's track.
    fn play_section(&mut self, chapter: Chapter);
    fn mute_all(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

pub trait DomSink {
    fn highlight_chapter(&mut self, index: usize);
    fn open_modal(&mut self, slide: usize);
    fn close_modal(&mut self);
    fn set_slide(&mut self, index: usize, direction: SlideDirection);
    fn reveal_title(&mut self, _chapter: Chapter) {}
    fn set_sound_indicator(&mut self, _on: bool) {}
    fn scroll_to_chapter(&mut self, _chapter: Chapter) {}
    fn activate_hero(&mut self, _index: usize) {}
}

pub struct Collaborators<'a> {
    pub render: &'a mut dyn RenderSink,
    pub audio: &'a mut dyn AudioSink,
    pub dom: &'a mut dyn DomSink,
}
