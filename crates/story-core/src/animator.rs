//! Continuous per-frame motion, independent of scroll.

use crate::boundary::RenderSink;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::registry::{ElementId, PropStatus, SceneRegistry, TickContext};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Session clock fed by host frame deltas. Elapsed time never decreases.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a host delta to [0, MAX_FRAME_DT_SEC]; non-finite deltas count
    /// as zero.
    #[inline]
    pub fn sanitize(dt: f32) -> f32 {
        if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        }
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = Self::sanitize(dt);
        self.elapsed += dt;
        dt
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

pub struct Animator {
    rng: StdRng,
}

impl Animator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Tick visible props in registration order. A prop that fails is logged
    /// and skipped for this frame. Props that finish an exit are returned so
    /// the caller can hide them.
    pub fn run(
        &mut self,
        registry: &mut SceneRegistry,
        clock: &FrameClock,
        dt: f32,
        cursor: f32,
        pointer: Vec2,
        render: &mut dyn RenderSink,
    ) -> SmallVec<[ElementId; 2]> {
        let mut retired = SmallVec::new();
        let mut ctx = TickContext {
            elapsed: clock.elapsed(),
            dt,
            cursor,
            pointer,
            rng: &mut self.rng,
            render,
        };
        for prop in registry.visible_mut() {
            match prop.on_tick(&mut ctx) {
                Ok(PropStatus::Running) => {}
                Ok(PropStatus::Retire) => retired.push(prop.id()),
                Err(e) => log::warn!("[frame] {:?} skipped this tick: {}", prop.id(), e),
            }
        }
        retired
    }
}
