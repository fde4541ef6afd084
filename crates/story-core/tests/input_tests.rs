// Input normalization: pointer offset, smoothing, scroll cursor, key and
// click parsing.

mod common;

use common::approx;
use glam::Vec2;
use story_core::input::normalize_pointer;
use story_core::{ClickTarget, Key, PointerSmoother, ScrubCursor};

#[test]
fn pointer_maps_to_centred_half_unit_square() {
    assert_eq!(normalize_pointer(0.0, 0.0, 1000.0, 500.0), Vec2::new(-0.5, -0.5));
    assert_eq!(normalize_pointer(500.0, 250.0, 1000.0, 500.0), Vec2::ZERO);
    assert_eq!(normalize_pointer(1000.0, 500.0, 1000.0, 500.0), Vec2::new(0.5, 0.5));
    // outside the viewport clamps
    assert_eq!(normalize_pointer(-50.0, 900.0, 1000.0, 500.0), Vec2::new(-0.5, 0.5));
}

#[test]
fn degenerate_pointer_input_maps_to_centre() {
    assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    assert_eq!(normalize_pointer(f32::NAN, 10.0, 100.0, 100.0).x, 0.0);
}

#[test]
fn pointer_smoother_settles_in_about_a_second_without_overshoot() {
    let mut s = PointerSmoother::new();
    s.set_target(Vec2::new(0.4, -0.3));
    let dt = 1.0 / 60.0;
    let mut prev = s.value();
    for _ in 0..60 {
        let v = s.step(dt);
        assert!(v.x <= 0.4 + 1e-3 && v.y >= -0.3 - 1e-3);
        assert!(v.x >= prev.x - 1e-6, "x moved away from target");
        prev = v;
    }
    assert!((s.value() - s.target()).length() < 0.02);
    for _ in 0..120 {
        s.step(dt);
    }
    assert!((s.value() - s.target()).length() < 1e-3);
}

#[test]
fn pointer_smoother_ignores_zero_dt() {
    let mut s = PointerSmoother::new();
    s.set_target(Vec2::splat(0.5));
    assert_eq!(s.step(0.0), Vec2::ZERO);
}

#[test]
fn zero_lag_cursor_tracks_exactly() {
    let mut c = ScrubCursor::new(0.0);
    c.set_target(0.42);
    assert_eq!(c.value(), 0.42);
    assert_eq!(c.step(0.016), 0.42);
    c.set_target(1.7);
    assert_eq!(c.value(), 1.0);
    c.set_target(f32::NAN);
    assert_eq!(c.value(), 0.0);
}

#[test]
fn lagged_cursor_eases_toward_target() {
    let mut c = ScrubCursor::new(0.5);
    c.set_target(1.0);
    assert_eq!(c.value(), 0.0);
    let first = c.step(0.1);
    assert!(first > 0.0 && first < 1.0);
    let mut last = first;
    for _ in 0..100 {
        let v = c.step(0.1);
        assert!(v >= last);
        last = v;
    }
    assert!(approx(last, 1.0, 1e-5));
}

#[test]
fn keys_parse_from_dom_names() {
    assert_eq!(Key::from_dom("Escape"), Key::Escape);
    assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
    assert_eq!(Key::from_dom("a"), Key::Other);
}

#[test]
fn click_targets_parse_from_ids() {
    assert_eq!(ClickTarget::parse("sound-toggle"), Some(ClickTarget::SoundToggle));
    assert_eq!(ClickTarget::parse("close-modal"), Some(ClickTarget::ModalClose));
    assert_eq!(ClickTarget::parse("prev-btn"), Some(ClickTarget::SlidePrev));
    assert_eq!(ClickTarget::parse("next-btn"), Some(ClickTarget::SlideNext));
    assert_eq!(
        ClickTarget::parse("knowledge-card-2"),
        Some(ClickTarget::KnowledgeCard(2))
    );
    assert_eq!(ClickTarget::parse("slide-dot-0"), Some(ClickTarget::SlideDot(0)));
    assert_eq!(
        ClickTarget::parse("timeline-item-10"),
        Some(ClickTarget::TimelineItem(10))
    );
    assert_eq!(ClickTarget::parse("hero-card-3"), Some(ClickTarget::HeroCard(3)));
    assert_eq!(ClickTarget::parse("hero-card-x"), None);
    assert_eq!(ClickTarget::parse("nothing"), None);
}
