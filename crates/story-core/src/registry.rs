use crate::boundary::{RenderSink, Transform};
use crate::error::Result;
use fnv::FnvHashMap;
use glam::{Vec2, Vec4};
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    ParticleField,
    Forest,
    Sparks,
    Rain,
    Fireflies,
    Cocar,
    Pottery,
    Constellation,
}

pub struct TickContext<'a> {
    pub elapsed: f32,
    pub dt: f32,
    /// Displayed scroll cursor in \[0, 1\].
    pub cursor: f32,
    /// Smoothed pointer offset in \[-0.5, 0.5\].
    pub pointer: Vec2,
    pub rng: &'a mut StdRng,
    pub render: &'a mut dyn RenderSink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropStatus {
    Running,
    /// The prop finished an exit transition and should now be hidden.
    Retire,
}

/// A pre-built scene element. Geometry is baked at construction; runtime
/// only moves it and flips its visibility.
pub trait SceneProp {
    fn id(&self) -> ElementId;
    fn points(&self) -> &[Vec4];
    fn transform(&self) -> Transform;
    fn on_show(&mut self) {}
    fn on_hide(&mut self) {}
    /// Start an exit transition instead of hiding immediately. Props that
    /// return true stay visible until they report [`PropStatus::Retire`].
    fn begin_exit(&mut self) -> bool {
        false
    }
    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus>;
}

struct Entry {
    prop: Box<dyn SceneProp>,
    visible: bool,
    exiting: bool,
}

/// Id-keyed store of scene props and their visibility flags.
///
/// `show` and `hide` are idempotent: only real transitions reach the
/// renderer.
#[derive(Default)]
pub struct SceneRegistry {
    entries: Vec<Entry>,
    index: FnvHashMap<ElementId, usize>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, prop: Box<dyn SceneProp>, visible: bool) {
        let id = prop.id();
        if self.index.contains_key(&id) {
            log::warn!("[registry] {:?} registered twice; keeping the first", id);
            return;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(Entry {
            prop,
            visible,
            exiting: false,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: ElementId) -> Option<&Entry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    fn entry_mut(&mut self, id: ElementId) -> Option<&mut Entry> {
        self.index.get(&id).map(|&i| &mut self.entries[i])
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.entry(id).map(|e| e.visible).unwrap_or(false)
    }

    pub fn is_exiting(&self, id: ElementId) -> bool {
        self.entry(id).map(|e| e.exiting).unwrap_or(false)
    }

    pub fn get(&self, id: ElementId) -> Option<&dyn SceneProp> {
        self.entry(id).map(|e| e.prop.as_ref())
    }

    /// Make an element visible. Returns true when visibility changed. Showing
    /// an element that is mid-exit cancels the exit without a new transition.
    pub fn show(&mut self, id: ElementId, render: &mut dyn RenderSink) -> bool {
        let Some(e) = self.entry_mut(id) else {
            log::warn!("[registry] show of unregistered {:?}", id);
            return false;
        };
        if e.visible {
            if e.exiting {
                e.exiting = false;
                e.prop.on_show();
            }
            return false;
        }
        e.visible = true;
        e.prop.on_show();
        render.set_visible(id, true);
        true
    }

    /// Hide an element, or start its exit transition. Returns true when
    /// visibility changed immediately.
    pub fn hide(&mut self, id: ElementId, render: &mut dyn RenderSink) -> bool {
        let Some(e) = self.entry_mut(id) else {
            log::warn!("[registry] hide of unregistered {:?}", id);
            return false;
        };
        if !e.visible || e.exiting {
            return false;
        }
        if e.prop.begin_exit() {
            e.exiting = true;
            return false;
        }
        e.visible = false;
        e.prop.on_hide();
        render.set_visible(id, false);
        true
    }

    /// Complete an exit transition started by [`SceneRegistry::hide`].
    pub fn finish_exit(&mut self, id: ElementId, render: &mut dyn RenderSink) {
        if let Some(e) = self.entry_mut(id) {
            if e.visible && e.exiting {
                e.exiting = false;
                e.visible = false;
                e.prop.on_hide();
                render.set_visible(id, false);
            }
        }
    }

    /// Push every element's geometry, placement and visibility to a fresh
    /// renderer.
    pub fn sync_all(&self, render: &mut dyn RenderSink) {
        for e in &self.entries {
            let id = e.prop.id();
            render.upload_points(id, e.prop.points());
            render.set_transform(id, e.prop.transform());
            render.set_visible(id, e.visible);
        }
    }

    pub(crate) fn visible_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn SceneProp>> {
        self.entries
            .iter_mut()
            .filter(|e| e.visible)
            .map(|e| &mut e.prop)
    }
}
