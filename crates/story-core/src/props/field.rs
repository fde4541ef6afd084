use crate::boundary::{Transform, Uniform, UniformValue};
use crate::constants::*;
use crate::error::{Result, StoryError};
use crate::registry::{ElementId, PropStatus, SceneProp, TickContext};
use glam::{Vec3, Vec4};
use rand::Rng;

/// The primary wave field. Its shape comes from the form factor uniform; this
/// prop only drives time and rotation.
pub struct ParticleField {
    points: Vec<Vec4>,
    rotation: Vec3,
}

impl ParticleField {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let extent = Vec3::new(FIELD_SPREAD, FIELD_HEIGHT, FIELD_SPREAD);
        let points = (0..FIELD_COUNT)
            .map(|_| super::scatter(rng, Vec3::ZERO, extent))
            .collect();
        Self {
            points,
            rotation: Vec3::ZERO,
        }
    }

    /// Time spin plus scroll spin as the base angle, pointer tilt around it.
    pub fn rotation_for(elapsed: f32, cursor: f32, pointer: glam::Vec2) -> Vec3 {
        Vec3::new(
            pointer.y * POINTER_ROTATION_GAIN,
            elapsed * FIELD_SPIN_PER_SEC
                + cursor * FIELD_SCROLL_SPIN
                + pointer.x * POINTER_ROTATION_GAIN,
            0.0,
        )
    }
}

impl SceneProp for ParticleField {
    fn id(&self) -> ElementId {
        ElementId::ParticleField
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform {
            position: Vec3::ZERO,
            rotation: self.rotation,
        }
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        let rotation = Self::rotation_for(ctx.elapsed, ctx.cursor, ctx.pointer);
        if !rotation.is_finite() {
            return Err(StoryError::NonFinite("field rotation"));
        }
        self.rotation = rotation;
        ctx.render
            .set_uniform(Uniform::Time, UniformValue::Float(ctx.elapsed));
        ctx.render.set_transform(ElementId::ParticleField, self.transform());
        Ok(PropStatus::Running)
    }
}
