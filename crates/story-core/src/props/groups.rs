use super::{sample_segment, scatter};
use crate::boundary::{Transform, Uniform, UniformValue};
use crate::constants::*;
use crate::easing::Easing;
use crate::error::{Result, StoryError};
use crate::registry::{ElementId, PropStatus, SceneProp, TickContext};
use crate::tween::Tweened;
use glam::{Vec3, Vec4};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const EDGE_SAMPLES: usize = 8;

/// Wireframe cone forest lit by a sweeping scan line.
pub struct Forest {
    points: Vec<Vec4>,
}

impl Forest {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(TREE_COUNT * EDGE_SAMPLES * 8);
        for _ in 0..TREE_COUNT {
            let height = 1.0 + rng.gen::<f32>() * 2.0;
            let radius = 0.2 + rng.gen::<f32>() * 0.3;
            let base = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 20.0,
                0.0,
                (rng.gen::<f32>() - 0.5) * 10.0 - 5.0,
            );
            let apex = base + Vec3::Y * height;
            let corners: [Vec3; 4] = std::array::from_fn(|i| {
                let a = i as f32 * FRAC_PI_2;
                base + Vec3::new(a.cos() * radius, 0.0, a.sin() * radius)
            });
            for (i, c) in corners.iter().enumerate() {
                sample_segment(&mut points, rng, apex, *c, EDGE_SAMPLES);
                sample_segment(&mut points, rng, *c, corners[(i + 1) % 4], EDGE_SAMPLES / 2);
            }
        }
        Self { points }
    }

    pub fn scan_height(elapsed: f32) -> f32 {
        elapsed.sin() * FOREST_SCAN_AMPLITUDE + FOREST_SCAN_CENTER
    }
}

impl SceneProp for Forest {
    fn id(&self) -> ElementId {
        ElementId::Forest
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform::default()
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        ctx.render.set_uniform(
            Uniform::ScanHeight,
            UniformValue::Float(Self::scan_height(ctx.elapsed)),
        );
        Ok(PropStatus::Running)
    }
}

/// Feather crown that slides in from depth while the knowledge stack is
/// pinned, and slides back out before hiding.
pub struct Cocar {
    points: Vec<Vec4>,
    depth: Tweened<f32>,
    sway: Vec3,
    bob: f32,
    exiting: bool,
}

impl Cocar {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(FEATHER_COUNT * EDGE_SAMPLES);
        for i in 0..FEATHER_COUNT {
            let angle = i as f32 / (FEATHER_COUNT - 1) as f32 * PI - FRAC_PI_2;
            let dir = Vec3::new(angle.cos(), angle.sin(), 0.0);
            let center = dir * COCAR_RADIUS;
            sample_segment(
                &mut points,
                rng,
                center - dir * 0.75,
                center + dir * 0.75,
                EDGE_SAMPLES,
            );
        }
        Self {
            points,
            depth: Tweened::new(COCAR_FAR_Z),
            sway: Vec3::ZERO,
            bob: 1.0,
            exiting: false,
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth.value()
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }
}

impl SceneProp for Cocar {
    fn id(&self) -> ElementId {
        ElementId::Cocar
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform {
            position: Vec3::new(0.0, self.bob, self.depth.value()),
            rotation: self.sway,
        }
    }

    fn on_show(&mut self) {
        self.exiting = false;
        self.depth
            .retarget(COCAR_NEAR_Z, COCAR_SLIDE_SEC, Easing::Power1Out);
    }

    fn on_hide(&mut self) {
        self.exiting = false;
        self.depth.set(COCAR_FAR_Z);
    }

    fn begin_exit(&mut self) -> bool {
        self.exiting = true;
        self.depth
            .retarget(COCAR_FAR_Z, COCAR_SLIDE_SEC, Easing::Power1Out);
        true
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        let done = self.depth.advance(ctx.dt);
        self.sway = Vec3::new(0.0, (ctx.elapsed * 0.5).sin() * 0.2, 0.0);
        self.bob = 1.0 + ctx.elapsed.sin() * 0.1;
        ctx.render.set_transform(ElementId::Cocar, self.transform());
        if self.exiting && (done || !self.depth.is_animating()) {
            return Ok(PropStatus::Retire);
        }
        Ok(PropStatus::Running)
    }
}

/// Lathe-turned pot spinning slowly on a tilted axis.
pub struct Pottery {
    points: Vec<Vec4>,
    spin: f32,
    wobble: f32,
}

impl Pottery {
    const PROFILE_POINTS: usize = 10;
    const LATHE_SEGMENTS: usize = 20;

    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(Self::PROFILE_POINTS * Self::LATHE_SEGMENTS);
        for i in 0..Self::PROFILE_POINTS {
            let radius = (i as f32 * 0.2).sin() + 0.5;
            let y = (i as f32 - 5.0) * 0.5;
            for s in 0..Self::LATHE_SEGMENTS {
                let phi = s as f32 / Self::LATHE_SEGMENTS as f32 * TAU;
                let p = Vec3::new(phi.sin() * radius, y, phi.cos() * radius);
                points.push(p.extend(rng.gen()));
            }
        }
        Self {
            points,
            spin: 0.0,
            wobble: 0.0,
        }
    }
}

impl SceneProp for Pottery {
    fn id(&self) -> ElementId {
        ElementId::Pottery
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(PI / 6.0, self.spin, self.wobble),
        }
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        if !ctx.dt.is_finite() {
            return Err(StoryError::NonFinite("tick dt"));
        }
        self.spin = (self.spin + POTTERY_SPIN_PER_SEC * ctx.dt.max(0.0)) % TAU;
        self.wobble = (ctx.elapsed * 0.5).sin() * 0.1;
        ctx.render.set_transform(ElementId::Pottery, self.transform());
        Ok(PropStatus::Running)
    }
}

/// Star field with the jaguar constellation traced through it.
pub struct Constellation {
    points: Vec<Vec4>,
    roll: f32,
}

impl Constellation {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(STAR_COUNT + JAGUAR_OUTLINE.len() * EDGE_SAMPLES);
        let extent = Vec3::new(50.0, 30.0, 20.0);
        let center = Vec3::new(0.0, 10.0, -10.0);
        for _ in 0..STAR_COUNT {
            points.push(scatter(rng, center, extent));
        }
        for pair in JAGUAR_OUTLINE.windows(2) {
            sample_segment(
                &mut points,
                rng,
                Vec3::from_array(pair[0]),
                Vec3::from_array(pair[1]),
                EDGE_SAMPLES,
            );
        }
        Self { points, roll: 0.0 }
    }
}

impl SceneProp for Constellation {
    fn id(&self) -> ElementId {
        ElementId::Constellation
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(0.0, 0.0, self.roll),
        }
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        self.roll = (ctx.elapsed * 0.1).sin() * 0.05;
        ctx.render
            .set_transform(ElementId::Constellation, self.transform());
        Ok(PropStatus::Running)
    }
}
