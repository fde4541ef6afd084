//! Scroll-animated scene parameters and the closed set of tracks that can be
//! keyframed on them.

use crate::constants::{CAMERA_START, COLOR_ORIGIN};
use crate::easing::Easing;
use glam::Vec3;

/// Every value the scroll timeline drives. Rotation is Euler XYZ, radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    pub color: Vec3,
    pub form_factor: f32,
    pub camera_position: Vec3,
    pub camera_rotation: Vec3,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            color: Vec3::from_array(COLOR_ORIGIN),
            form_factor: 0.0,
            camera_position: Vec3::from_array(CAMERA_START),
            camera_rotation: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    ColorR,
    ColorG,
    ColorB,
    FormFactor,
    CameraX,
    CameraY,
    CameraZ,
    CameraRotX,
    CameraRotY,
    CameraRotZ,
}

impl Track {
    pub const ALL: [Track; 10] = [
        Track::ColorR,
        Track::ColorG,
        Track::ColorB,
        Track::FormFactor,
        Track::CameraX,
        Track::CameraY,
        Track::CameraZ,
        Track::CameraRotX,
        Track::CameraRotY,
        Track::CameraRotZ,
    ];

    pub fn get(self, p: &SceneParams) -> f32 {
        match self {
            Track::ColorR => p.color.x,
            Track::ColorG => p.color.y,
            Track::ColorB => p.color.z,
            Track::FormFactor => p.form_factor,
            Track::CameraX => p.camera_position.x,
            Track::CameraY => p.camera_position.y,
            Track::CameraZ => p.camera_position.z,
            Track::CameraRotX => p.camera_rotation.x,
            Track::CameraRotY => p.camera_rotation.y,
            Track::CameraRotZ => p.camera_rotation.z,
        }
    }

    pub fn set(self, p: &mut SceneParams, v: f32) {
        match self {
            Track::ColorR => p.color.x = v,
            Track::ColorG => p.color.y = v,
            Track::ColorB => p.color.z = v,
            Track::FormFactor => p.form_factor = v,
            Track::CameraX => p.camera_position.x = v,
            Track::CameraY => p.camera_position.y = v,
            Track::CameraZ => p.camera_position.z = v,
            Track::CameraRotX => p.camera_rotation.x = v,
            Track::CameraRotY => p.camera_rotation.y = v,
            Track::CameraRotZ => p.camera_rotation.z = v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub track: Track,
    pub target: f32,
    pub easing: Easing,
    pub duration: f32,
}

impl Keyframe {
    pub fn new(track: Track, target: f32) -> Self {
        Self {
            track,
            target,
            easing: Easing::Linear,
            duration: 1.0,
        }
    }

    pub fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }
}

/// Builder for one labeled step. Mirrors how the page authored its scrub
/// timeline: a color, a form factor and a camera pose per step.
#[derive(Clone, Debug)]
pub struct KeyframeGroup {
    pub label: String,
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            keyframes: Vec::new(),
        }
    }

    pub fn key(mut self, kf: Keyframe) -> Self {
        self.keyframes.push(kf);
        self
    }

    pub fn color(self, rgb: [f32; 3]) -> Self {
        self.key(Keyframe::new(Track::ColorR, rgb[0]))
            .key(Keyframe::new(Track::ColorG, rgb[1]))
            .key(Keyframe::new(Track::ColorB, rgb[2]))
    }

    pub fn form_factor(self, v: f32) -> Self {
        self.key(Keyframe::new(Track::FormFactor, v))
    }

    /// Camera height and distance; x is never animated by the story.
    pub fn camera(self, y: f32, z: f32) -> Self {
        self.key(Keyframe::new(Track::CameraY, y))
            .key(Keyframe::new(Track::CameraZ, z))
    }

    pub fn tilt(self, x: f32) -> Self {
        self.key(Keyframe::new(Track::CameraRotX, x))
    }

    /// Scroll weight of this step: its longest keyframe.
    pub fn span(&self) -> f32 {
        self.keyframes
            .iter()
            .map(|k| k.duration)
            .fold(0.0_f32, f32::max)
    }
}
