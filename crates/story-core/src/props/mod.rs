//! Concrete scene props. Geometry is generated once from a seeded RNG; the
//! renderer receives it as point sets.

mod field;
mod groups;
mod particles;

pub use field::ParticleField;
pub use groups::{Cocar, Constellation, Forest, Pottery};
pub use particles::{recycle_falling, recycle_rising, Fireflies, Rain, Sparks};

use crate::registry::SceneRegistry;
use glam::{Vec3, Vec4};
use rand::Rng;

/// Build every prop and register it with its starting visibility: the
/// particle field and fireflies are always on, the rest wait for triggers.
pub fn populate(registry: &mut SceneRegistry, rng: &mut impl Rng) {
    registry.register(Box::new(ParticleField::generate(rng)), true);
    registry.register(Box::new(Fireflies::generate(rng)), true);
    registry.register(Box::new(Forest::generate(rng)), false);
    registry.register(Box::new(Sparks::generate(rng)), false);
    registry.register(Box::new(Rain::generate(rng)), false);
    registry.register(Box::new(Cocar::generate(rng)), false);
    registry.register(Box::new(Pottery::generate(rng)), false);
    registry.register(Box::new(Constellation::generate(rng)), false);
}

/// Uniform point in a box centred on `center`, with a random seed in w.
pub(crate) fn scatter(rng: &mut impl Rng, center: Vec3, extent: Vec3) -> Vec4 {
    let p = center
        + Vec3::new(
            (rng.gen::<f32>() - 0.5) * extent.x,
            (rng.gen::<f32>() - 0.5) * extent.y,
            (rng.gen::<f32>() - 0.5) * extent.z,
        );
    p.extend(rng.gen())
}

pub(crate) fn sample_segment(out: &mut Vec<Vec4>, rng: &mut impl Rng, a: Vec3, b: Vec3, n: usize) {
    let n = n.max(2);
    for i in 0..n {
        let t = i as f32 / (n - 1) as f32;
        out.push(a.lerp(b, t).extend(rng.gen()));
    }
}
