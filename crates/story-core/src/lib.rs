//! Platform-free scroll-to-scene engine for the chapter narrative.
//!
//! The host feeds scroll, pointer, resize, key and click events into a
//! [`StoryEngine`] and calls [`StoryEngine::tick`] once per display frame.
//! The engine answers by pushing uniforms, camera poses and visibility flags
//! to a [`RenderSink`], section changes to an [`AudioSink`], and discrete UI
//! state to a [`DomSink`].

pub mod animator;
pub mod audio;
pub mod boundary;
pub mod chapter;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod params;
pub mod props;
pub mod registry;
pub mod scramble;
pub mod slider;
pub mod story;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use animator::{Animator, FrameClock};
pub use audio::AudioDirector;
pub use boundary::{
    AudioSink, Collaborators, DomSink, RenderSink, SlideDirection, Transform, Uniform,
    UniformValue,
};
pub use chapter::Chapter;
pub use easing::Easing;
pub use engine::{SceneContext, StoryEngine};
pub use error::{Result, StoryError};
pub use input::{ClickTarget, InputEvent, Key, PointerSmoother, ScrubCursor};
pub use layout::{Anchor, PageLayout, SectionRect};
pub use params::{Keyframe, KeyframeGroup, SceneParams, Track};
pub use registry::{ElementId, PropStatus, SceneProp, SceneRegistry, TickContext};
pub use scramble::Scrambler;
pub use slider::{HeroGallery, ModalSlider};
pub use story::{Story, StoryConfig};
pub use timeline::ParameterTimeline;
pub use trigger::{Crossing, Effect, Phase, TriggerSpec, TriggerTable};
pub use tween::Tweened;
