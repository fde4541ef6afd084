// Scene element registry: idempotent show/hide and exit transitions.

mod common;

use common::RecordingRender;
use glam::Vec4;
use rand::rngs::StdRng;
use rand::SeedableRng;
use story_core::props::Cocar;
use story_core::{
    ElementId, PropStatus, Result, SceneProp, SceneRegistry, TickContext, Transform,
};

struct Dummy(ElementId);

impl SceneProp for Dummy {
    fn id(&self) -> ElementId {
        self.0
    }

    fn points(&self) -> &[Vec4] {
        &[]
    }

    fn transform(&self) -> Transform {
        Transform::default()
    }

    fn on_tick(&mut self, _ctx: &mut TickContext<'_>) -> Result<PropStatus> {
        Ok(PropStatus::Running)
    }
}

#[test]
fn show_twice_is_one_transition() {
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    reg.register(Box::new(Dummy(ElementId::Rain)), false);

    assert!(reg.show(ElementId::Rain, &mut render));
    assert!(!reg.show(ElementId::Rain, &mut render));
    assert!(reg.is_visible(ElementId::Rain));
    assert_eq!(render.visibility, vec![(ElementId::Rain, true)]);
}

#[test]
fn hiding_an_invisible_element_is_a_no_op() {
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    reg.register(Box::new(Dummy(ElementId::Forest)), false);

    assert!(!reg.hide(ElementId::Forest, &mut render));
    assert!(render.visibility.is_empty());

    reg.show(ElementId::Forest, &mut render);
    assert!(reg.hide(ElementId::Forest, &mut render));
    assert!(!reg.hide(ElementId::Forest, &mut render));
    assert_eq!(
        render.visibility,
        vec![(ElementId::Forest, true), (ElementId::Forest, false)]
    );
}

#[test]
fn unknown_ids_are_ignored() {
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    assert!(!reg.show(ElementId::Pottery, &mut render));
    assert!(!reg.hide(ElementId::Pottery, &mut render));
    assert!(!reg.is_visible(ElementId::Pottery));
}

#[test]
fn duplicate_registration_keeps_the_first() {
    let mut reg = SceneRegistry::new();
    reg.register(Box::new(Dummy(ElementId::Sparks)), true);
    reg.register(Box::new(Dummy(ElementId::Sparks)), false);
    assert_eq!(reg.len(), 1);
    assert!(reg.is_visible(ElementId::Sparks));
}

#[test]
fn exiting_element_stays_visible_until_finished() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    reg.register(Box::new(Cocar::generate(&mut rng)), false);

    reg.show(ElementId::Cocar, &mut render);
    assert!(!reg.hide(ElementId::Cocar, &mut render));
    assert!(reg.is_visible(ElementId::Cocar));
    assert!(reg.is_exiting(ElementId::Cocar));

    // a second hide while exiting changes nothing
    assert!(!reg.hide(ElementId::Cocar, &mut render));

    reg.finish_exit(ElementId::Cocar, &mut render);
    assert!(!reg.is_visible(ElementId::Cocar));
    assert!(!reg.is_exiting(ElementId::Cocar));
    assert_eq!(
        render.visibility,
        vec![(ElementId::Cocar, true), (ElementId::Cocar, false)]
    );
}

#[test]
fn showing_during_exit_cancels_it_without_a_new_transition() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    reg.register(Box::new(Cocar::generate(&mut rng)), false);

    reg.show(ElementId::Cocar, &mut render);
    reg.hide(ElementId::Cocar, &mut render);
    assert!(!reg.show(ElementId::Cocar, &mut render));
    assert!(!reg.is_exiting(ElementId::Cocar));

    // a stale finish after the cancel leaves it visible
    reg.finish_exit(ElementId::Cocar, &mut render);
    assert!(reg.is_visible(ElementId::Cocar));
    assert_eq!(render.shown(ElementId::Cocar), 1);
}

#[test]
fn sync_all_pushes_every_element() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut reg = SceneRegistry::new();
    let mut render = RecordingRender::default();
    story_core::props::populate(&mut reg, &mut rng);
    reg.sync_all(&mut render);

    assert_eq!(reg.len(), 8);
    assert_eq!(render.uploads.len(), 8);
    assert!(reg.is_visible(ElementId::ParticleField));
    assert!(reg.is_visible(ElementId::Fireflies));
    assert!(!reg.is_visible(ElementId::Forest));
    let field = render
        .uploads
        .iter()
        .find(|(id, _)| *id == ElementId::ParticleField)
        .map(|(_, n)| *n);
    assert_eq!(field, Some(story_core::constants::FIELD_COUNT));
}
