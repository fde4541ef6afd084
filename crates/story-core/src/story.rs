//! The narrative itself: chapter order, scroll timeline and trigger table,
//! plus the knobs a host may tune before building the engine.

use crate::chapter::Chapter;
use crate::constants::*;
use crate::engine::StoryEngine;
use crate::error::Result;
use crate::params::{KeyframeGroup, SceneParams};
use crate::registry::ElementId;
use crate::trigger::{Crossing, Effect, TriggerSpec};
use glam::Vec3;

/// Chapter bands run while the section covers the middle of the viewport.
pub const CHAPTER_START: &str = "top center";
pub const CHAPTER_END: &str = "bottom center";
/// The knowledge stack is pinned while it fills the viewport.
pub const PIN_START: &str = "top top";
pub const PIN_END: &str = "bottom bottom";
/// Titles reveal as they rise past 80% of the viewport.
pub const TITLE_START: &str = "top 80%";
pub const TITLE_END: &str = "bottom top";

#[derive(Clone, Debug)]
pub struct StoryConfig {
    pub seed: u64,
    /// Seconds for the displayed cursor to catch up with the scroll
    /// position. Zero tracks it exactly.
    pub scrub_lag_sec: f32,
    pub fog_density: f32,
    pub fog_color: Vec3,
    pub slide_count: usize,
    pub hero_count: usize,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_0f_0a1d,
            scrub_lag_sec: 0.0,
            fog_density: FOG_DENSITY_DEFAULT,
            fog_color: rgb(FOG_COLOR_START),
            slide_count: 0,
            hero_count: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Story {
    pub chapters: Vec<Chapter>,
    pub base: SceneParams,
    pub steps: Vec<KeyframeGroup>,
    pub triggers: Vec<TriggerSpec>,
}

impl StoryConfig {
    pub fn story(&self) -> Story {
        Story {
            chapters: Chapter::ALL.to_vec(),
            base: SceneParams::default(),
            steps: default_steps(),
            triggers: default_triggers(),
        }
    }

    pub fn build(self) -> Result<StoryEngine> {
        let story = self.story();
        StoryEngine::new(self, story)
    }
}

/// The first step blends from the base state (origin palette, camera at
/// (0, 2, 5)) to the connection state.
fn default_steps() -> Vec<KeyframeGroup> {
    vec![
        KeyframeGroup::new("connection")
            .color(COLOR_CONNECTION)
            .form_factor(1.0)
            .camera(1.0, 4.0),
        KeyframeGroup::new("territory")
            .color(COLOR_TERRITORY)
            .form_factor(0.5)
            .camera(0.8, 3.5),
        KeyframeGroup::new("artifacts")
            .color(COLOR_ARTIFACTS)
            .form_factor(1.5)
            .camera(0.5, 3.0),
        KeyframeGroup::new("resistance")
            .color(COLOR_RESISTANCE)
            .form_factor(2.0)
            .camera(0.5, 3.0),
        KeyframeGroup::new("fire")
            .color(COLOR_FIRE)
            .camera(0.2, 2.0),
        KeyframeGroup::new("cosmology")
            .color(COLOR_COSMOLOGY)
            .form_factor(0.0)
            .camera(5.0, 2.0)
            .tilt(0.5),
        KeyframeGroup::new("reset-camera").tilt(0.0),
        KeyframeGroup::new("heroes")
            .color(COLOR_HEROES)
            .form_factor(1.0)
            .camera(1.0, 4.0),
        KeyframeGroup::new("celebration")
            .color(COLOR_CELEBRATION)
            .form_factor(1.5)
            .camera(2.0, 5.0),
        KeyframeGroup::new("future")
            .color(COLOR_FUTURE)
            .form_factor(0.5)
            .camera(3.0, 6.0),
    ]
}

fn chapter_scene(chapter: Chapter) -> (Vec<Effect>, Vec<Effect>) {
    use Effect::*;
    let fog_back = FogDensity(FOG_DENSITY_DEFAULT);
    match chapter {
        Chapter::Artifacts => (vec![Show(ElementId::Pottery)], vec![Hide(ElementId::Pottery)]),
        Chapter::Resistance => (
            vec![
                Show(ElementId::Rain),
                FogDensity(FOG_DENSITY_RESISTANCE),
                FogColor(rgb(FOG_COLOR_RESISTANCE)),
            ],
            vec![
                Hide(ElementId::Rain),
                fog_back,
                FogColor(rgb(FOG_COLOR_DEFAULT)),
            ],
        ),
        Chapter::Fire => (
            vec![
                Show(ElementId::Forest),
                Show(ElementId::Sparks),
                FogDensity(FOG_DENSITY_FIRE),
            ],
            vec![Hide(ElementId::Forest), Hide(ElementId::Sparks), fog_back],
        ),
        Chapter::Cosmology => (
            vec![
                Show(ElementId::Constellation),
                FogDensity(FOG_DENSITY_COSMOLOGY),
            ],
            vec![Hide(ElementId::Constellation), fog_back],
        ),
        _ => (Vec::new(), Vec::new()),
    }
}

fn default_triggers() -> Vec<TriggerSpec> {
    let mut specs = Vec::new();
    for chapter in Chapter::ALL {
        let id = chapter.dom_id();
        if chapter != Chapter::Knowledge {
            specs.push(
                TriggerSpec::new(format!("{id}/title"), chapter, TITLE_START, TITLE_END)
                    .on(Crossing::Enter, &[Effect::RevealTitle(chapter)]),
            );
        }

        let (active, inactive) = chapter_scene(chapter);
        let mut on_active = vec![
            Effect::PlayAudio(chapter),
            Effect::Highlight(chapter.index()),
        ];
        on_active.extend(active);
        specs.push(
            TriggerSpec::new(id, chapter, CHAPTER_START, CHAPTER_END)
                .on_active(&on_active)
                .on_inactive(&inactive),
        );

        if chapter == Chapter::Knowledge {
            specs.push(
                TriggerSpec::new(format!("{id}/pin"), chapter, PIN_START, PIN_END)
                    .on_active(&[Effect::Show(ElementId::Cocar)])
                    .on_inactive(&[Effect::Hide(ElementId::Cocar)]),
            );
        }
    }
    specs
}
