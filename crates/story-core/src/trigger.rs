//! Chapter triggers: scroll bands that fire enter / leave / enter-back /
//! leave-back crossings.
//!
//! Each trigger keeps an explicit phase (before, inside or after its band).
//! Every scroll sample moves each trigger to the phase of the new position
//! and reports the crossings between the old and new phase, so a jump over a
//! whole band still reports both edges in order. The initial phase is
//! `Before`; the first evaluation after a layout therefore fires `Enter` for
//! a band that already contains the scroll position.

use crate::chapter::Chapter;
use crate::error::{Result, StoryError};
use crate::layout::{always_inverted, Anchor, PageLayout};
use crate::registry::ElementId;
use glam::Vec3;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    Show(ElementId),
    Hide(ElementId),
    FogDensity(f32),
    FogColor(Vec3),
    PlayAudio(Chapter),
    Highlight(usize),
    RevealTitle(Chapter),
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crossing {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

impl Crossing {
    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    Active,
    After,
}

/// Crossings between two phases, in the order they happen.
pub fn crossings(from: Phase, to: Phase) -> SmallVec<[Crossing; 2]> {
    use Crossing::*;
    use Phase::*;
    match (from, to) {
        (Before, Active) => smallvec![Enter],
        (Before, After) => smallvec![Enter, Leave],
        (Active, After) => smallvec![Leave],
        (After, Active) => smallvec![EnterBack],
        (After, Before) => smallvec![EnterBack, LeaveBack],
        (Active, Before) => smallvec![LeaveBack],
        _ => SmallVec::new(),
    }
}

#[derive(Clone, Debug)]
pub struct TriggerSpec {
    pub name: String,
    pub chapter: Chapter,
    pub start: String,
    pub end: String,
    pub effects: [Effects; 4],
}

impl TriggerSpec {
    pub fn new(
        name: impl Into<String>,
        chapter: Chapter,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            chapter,
            start: start.into(),
            end: end.into(),
            effects: Default::default(),
        }
    }

    pub fn on(mut self, crossing: Crossing, effects: &[Effect]) -> Self {
        self.effects[crossing.slot()].extend_from_slice(effects);
        self
    }

    pub fn on_active(self, effects: &[Effect]) -> Self {
        self.on(Crossing::Enter, effects)
            .on(Crossing::EnterBack, effects)
    }

    pub fn on_inactive(self, effects: &[Effect]) -> Self {
        self.on(Crossing::Leave, effects)
            .on(Crossing::LeaveBack, effects)
    }
}

#[derive(Clone, Debug)]
struct Trigger {
    name: String,
    chapter: Chapter,
    start: Anchor,
    end: Anchor,
    effects: [Effects; 4],
    band: Option<(f32, f32)>,
    phase: Phase,
}

impl Trigger {
    fn phase_at(&self, px: f32) -> Option<Phase> {
        let (start, end) = self.band?;
        Some(if px < start {
            Phase::Before
        } else if px < end {
            Phase::Active
        } else {
            Phase::After
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Firing {
    pub trigger: usize,
    pub crossing: Crossing,
}

pub type Firings = SmallVec<[Firing; 8]>;

/// Triggers in document order. Within one sample, triggers that end up
/// outside their band fire first and triggers that end up inside fire last,
/// each group in table order. A chapter entered by the sample therefore owns
/// shared state such as fog over chapters left by it.
#[derive(Clone, Debug, Default)]
pub struct TriggerTable {
    triggers: Vec<Trigger>,
    primed: bool,
}

impl TriggerTable {
    /// Parse and validate every spec. Anchors that cannot produce a
    /// non-empty band under any layout are rejected.
    pub fn new(specs: Vec<TriggerSpec>) -> Result<Self> {
        let mut triggers = Vec::with_capacity(specs.len());
        for spec in specs {
            let start = Anchor::parse(&spec.start)?;
            let end = Anchor::parse(&spec.end)?;
            if always_inverted(start, end) {
                return Err(StoryError::InvertedBand {
                    name: spec.name,
                    start: spec.start,
                    end: spec.end,
                });
            }
            if spec.effects.iter().all(|e| e.is_empty()) {
                return Err(StoryError::InertTrigger(spec.name));
            }
            triggers.push(Trigger {
                name: spec.name,
                chapter: spec.chapter,
                start,
                end,
                effects: spec.effects,
                band: None,
                phase: Phase::Before,
            });
        }
        Ok(Self {
            triggers,
            primed: false,
        })
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.triggers.iter().position(|t| t.name == name)
    }

    pub fn name(&self, trigger: usize) -> &str {
        &self.triggers[trigger].name
    }

    pub fn phase(&self, name: &str) -> Option<Phase> {
        self.index_of(name).map(|i| self.triggers[i].phase)
    }

    pub fn band(&self, name: &str) -> Option<(f32, f32)> {
        self.index_of(name).and_then(|i| self.triggers[i].band)
    }

    pub fn effects(&self, firing: Firing) -> &[Effect] {
        &self.triggers[firing.trigger].effects[firing.crossing.slot()]
    }

    /// Recompute bands for a new layout. Phases are left untouched; the next
    /// scroll sample reconciles them.
    pub fn relayout(&mut self, layout: &PageLayout) {
        let vh = layout.viewport_height;
        for t in &mut self.triggers {
            let Some(rect) = layout.section(t.chapter) else {
                log::debug!("[trigger] {} has no measured section; inert", t.name);
                t.band = None;
                continue;
            };
            let start = t.start.resolve(rect, vh);
            let mut end = t.end.resolve(rect, vh);
            if end < start {
                log::warn!(
                    "[trigger] {} resolves inverted ({} .. {}); collapsing",
                    t.name,
                    start,
                    end
                );
                end = start;
            }
            t.band = Some((start, end));
        }
    }

    /// Move every trigger to the phase of `scroll_px`, appending crossings:
    /// settling triggers first, then entered ones.
    pub fn evaluate(&mut self, scroll_px: f32, out: &mut Firings) {
        if !scroll_px.is_finite() {
            log::warn!("[trigger] ignoring non-finite scroll sample");
            return;
        }
        self.primed = true;
        for entering in [false, true] {
            for (i, t) in self.triggers.iter_mut().enumerate() {
                let Some(next) = t.phase_at(scroll_px) else {
                    continue;
                };
                if next == t.phase || (next == Phase::Active) != entering {
                    continue;
                }
                for crossing in crossings(t.phase, next) {
                    log::debug!("[trigger] {} {:?}", t.name, crossing);
                    out.push(Firing {
                        trigger: i,
                        crossing,
                    });
                }
                t.phase = next;
            }
        }
    }
}
