use crate::boundary::Transform;
use crate::constants::*;
use crate::error::{Result, StoryError};
use crate::registry::{ElementId, PropStatus, SceneProp, TickContext};
use glam::{Vec3, Vec4};
use rand::Rng;

/// New height for a rising particle that passed `ceiling`, carrying the
/// overshoot past the floor. `None` while still in range.
#[inline]
pub fn recycle_rising(y: f32, floor: f32, ceiling: f32) -> Option<f32> {
    if y <= ceiling {
        return None;
    }
    let span = (ceiling - floor).max(f32::EPSILON);
    Some(floor + (y - ceiling) % span)
}

/// New height for a falling particle that dropped below `floor`, carrying
/// the overshoot down from the top. `None` while still in range.
#[inline]
pub fn recycle_falling(y: f32, floor: f32, top: f32) -> Option<f32> {
    if y >= floor {
        return None;
    }
    let span = (top - floor).max(f32::EPSILON);
    Some(top - (floor - y) % span)
}

fn check_dt(dt: f32) -> Result<f32> {
    if dt.is_finite() {
        Ok(dt.max(0.0))
    } else {
        Err(StoryError::NonFinite("tick dt"))
    }
}

pub struct Sparks {
    points: Vec<Vec4>,
    speeds: Vec<f32>,
}

impl Sparks {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(SPARK_COUNT);
        let mut speeds = Vec::with_capacity(SPARK_COUNT);
        for _ in 0..SPARK_COUNT {
            points.push(Vec4::new(
                (rng.gen::<f32>() - 0.5) * SPARK_SPREAD_X,
                SPARK_FLOOR + rng.gen::<f32>() * (SPARK_CEILING - SPARK_FLOOR),
                (rng.gen::<f32>() - 0.5) * SPARK_SPREAD_Z,
                rng.gen(),
            ));
            speeds.push(SPARK_SPEED_MIN + rng.gen::<f32>() * SPARK_SPEED_SPAN);
        }
        Self { points, speeds }
    }

    pub fn from_parts(points: Vec<Vec4>, speeds: Vec<f32>) -> Self {
        debug_assert_eq!(points.len(), speeds.len());
        Self { points, speeds }
    }
}

impl SceneProp for Sparks {
    fn id(&self) -> ElementId {
        ElementId::Sparks
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform::default()
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        let dt = check_dt(ctx.dt)?;
        for (p, speed) in self.points.iter_mut().zip(&self.speeds) {
            p.y += speed * dt;
            if let Some(y) = recycle_rising(p.y, SPARK_FLOOR, SPARK_CEILING) {
                p.y = y;
                p.x = (ctx.rng.gen::<f32>() - 0.5) * SPARK_SPREAD_X;
            }
        }
        ctx.render.upload_points(ElementId::Sparks, &self.points);
        Ok(PropStatus::Running)
    }
}

pub struct Rain {
    points: Vec<Vec4>,
    speeds: Vec<f32>,
}

impl Rain {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(RAIN_COUNT);
        let mut speeds = Vec::with_capacity(RAIN_COUNT);
        for _ in 0..RAIN_COUNT {
            points.push(Vec4::new(
                (rng.gen::<f32>() - 0.5) * RAIN_SPREAD_X,
                RAIN_FLOOR + rng.gen::<f32>() * (RAIN_TOP - RAIN_FLOOR),
                (rng.gen::<f32>() - 0.5) * RAIN_SPREAD_Z,
                rng.gen(),
            ));
            speeds.push(RAIN_SPEED_MIN + rng.gen::<f32>() * RAIN_SPEED_SPAN);
        }
        Self { points, speeds }
    }

    pub fn from_parts(points: Vec<Vec4>, speeds: Vec<f32>) -> Self {
        debug_assert_eq!(points.len(), speeds.len());
        Self { points, speeds }
    }
}

impl SceneProp for Rain {
    fn id(&self) -> ElementId {
        ElementId::Rain
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform::default()
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        let dt = check_dt(ctx.dt)?;
        for (p, speed) in self.points.iter_mut().zip(&self.speeds) {
            p.y -= speed * dt;
            if let Some(y) = recycle_falling(p.y, RAIN_FLOOR, RAIN_TOP) {
                p.y = y;
                p.x = (ctx.rng.gen::<f32>() - 0.5) * RAIN_SPREAD_X;
            }
        }
        ctx.render.upload_points(ElementId::Rain, &self.points);
        Ok(PropStatus::Running)
    }
}

/// Fireflies wander on independent per-axis sine paths.
pub struct Fireflies {
    points: Vec<Vec4>,
    phases: Vec<Vec3>,
}

impl Fireflies {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let extent = Vec3::new(20.0, 10.0, 10.0);
        let points = (0..FIREFLY_COUNT)
            .map(|_| super::scatter(rng, Vec3::ZERO, extent))
            .collect();
        let phases = (0..FIREFLY_COUNT)
            .map(|_| Vec3::new(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        Self { points, phases }
    }

    /// Velocity of a firefly with phase `r` at time `t`.
    pub fn drift(t: f32, r: Vec3) -> Vec3 {
        Vec3::new(
            (t + r.x * 10.0).sin(),
            (t * 0.8 + r.y * 10.0).cos(),
            (t * 0.5 + r.z * 10.0).sin(),
        ) * FIREFLY_DRIFT_PER_SEC
    }
}

impl SceneProp for Fireflies {
    fn id(&self) -> ElementId {
        ElementId::Fireflies
    }

    fn points(&self) -> &[Vec4] {
        &self.points
    }

    fn transform(&self) -> Transform {
        Transform::default()
    }

    fn on_tick(&mut self, ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        let dt = check_dt(ctx.dt)?;
        for (p, r) in self.points.iter_mut().zip(&self.phases) {
            let step = Self::drift(ctx.elapsed, *r) * dt;
            *p += step.extend(0.0);
        }
        ctx.render.upload_points(ElementId::Fireflies, &self.points);
        Ok(PropStatus::Running)
    }
}
