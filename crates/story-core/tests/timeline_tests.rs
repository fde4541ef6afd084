// Scroll-scrubbed parameter timeline: clamping, purity and validation.

mod common;

use common::{approx, approx_vec};
use glam::Vec3;
use story_core::constants::*;
use story_core::{
    Keyframe, KeyframeGroup, ParameterTimeline, SceneParams, StoryConfig, StoryError, Track,
};

fn story_timeline() -> ParameterTimeline {
    let story = StoryConfig::default().story();
    ParameterTimeline::new(story.base, story.steps).expect("default story timeline")
}

#[test]
fn cursor_zero_matches_origin_step() {
    let tl = story_timeline();
    let p = tl.evaluate(0.0);
    assert!(approx_vec(p.color, rgb(COLOR_ORIGIN), 1e-6));
    assert_eq!(p.form_factor, 0.0);
    assert!(approx_vec(p.camera_position, Vec3::new(0.0, 2.0, 5.0), 1e-6));
    assert_eq!(p.camera_rotation, Vec3::ZERO);
}

#[test]
fn first_step_blends_from_origin_to_connection() {
    let tl = story_timeline();
    assert_eq!(tl.len(), 10);
    let (start, end) = tl.range_of("connection").unwrap();
    assert_eq!(start, 0.0);
    assert!(approx(end, 0.1, 1e-6));
    assert_eq!(tl.range_of("origin"), None);

    let p = tl.evaluate(0.1);
    assert!(approx_vec(p.color, rgb(COLOR_CONNECTION), 1e-5));
    assert!(approx(p.form_factor, 1.0, 1e-5));
    assert!(approx_vec(p.camera_position, Vec3::new(0.0, 1.0, 4.0), 1e-5));

    let half = tl.evaluate(0.05);
    assert!(approx(half.form_factor, 0.5, 1e-4));
}

#[test]
fn out_of_range_cursors_clamp() {
    let tl = story_timeline();
    assert_eq!(tl.evaluate(-3.0), tl.evaluate(0.0));
    assert_eq!(tl.evaluate(f32::NAN), tl.evaluate(0.0));
    assert_eq!(tl.evaluate(7.0), tl.final_state());
    assert_eq!(tl.evaluate(1.0), tl.final_state());
    let end = tl.final_state();
    assert!(approx_vec(end.color, rgb(COLOR_FUTURE), 1e-6));
    assert!(approx(end.form_factor, 0.5, 1e-6));
    assert!(approx_vec(end.camera_position, Vec3::new(0.0, 3.0, 6.0), 1e-6));
}

#[test]
fn mid_document_blends_between_neighbouring_steps() {
    let tl = story_timeline();
    // ten equal steps: 0.45 sits halfway through the fifth ("fire")
    let (label, local) = tl.step_at(0.45);
    assert_eq!(label, "fire");
    assert!(approx(local, 0.5, 1e-4));

    let p = tl.evaluate(0.45);
    let expected = rgb(COLOR_RESISTANCE).lerp(rgb(COLOR_FIRE), 0.5);
    assert!(approx_vec(p.color, expected, 1e-4));
    // fire leaves the form factor where resistance put it
    assert!(approx(p.form_factor, 2.0, 1e-5));
    assert!(approx(p.camera_position.y, 0.35, 1e-4));
    assert!(approx(p.camera_position.z, 2.5, 1e-4));
}

#[test]
fn values_stay_between_step_boundaries() {
    let tl = story_timeline();
    let labels = [
        "connection",
        "territory",
        "artifacts",
        "resistance",
        "fire",
        "cosmology",
        "reset-camera",
        "heroes",
        "celebration",
        "future",
    ];
    for label in labels {
        let (start, end) = tl.range_of(label).expect("step exists");
        let from = tl.evaluate(start);
        let to = tl.evaluate(end);
        for i in 0..=20 {
            let c = start + (end - start) * i as f32 / 20.0;
            let p = tl.evaluate(c);
            for track in Track::ALL {
                let (a, b) = (track.get(&from), track.get(&to));
                let v = track.get(&p);
                assert!(
                    v >= a.min(b) - 1e-5 && v <= a.max(b) + 1e-5,
                    "{label} {track:?} = {v} outside [{a}, {b}] at {c}"
                );
            }
        }
    }
}

#[test]
fn scrubbing_down_and_back_up_restores_every_value() {
    let tl = story_timeline();
    let samples: Vec<f32> = (0..=200).map(|i| i as f32 / 200.0).collect();
    let down: Vec<SceneParams> = samples.iter().map(|&c| tl.evaluate(c)).collect();
    let up: Vec<SceneParams> = samples.iter().rev().map(|&c| tl.evaluate(c)).collect();
    for (a, b) in down.iter().zip(up.iter().rev()) {
        assert_eq!(a, b);
    }
    assert_eq!(tl.evaluate(0.0), down[0]);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let tl = story_timeline();
    let first = tl.evaluate(0.37);
    for _ in 0..10 {
        assert_eq!(tl.evaluate(0.37), first);
    }
}

#[test]
fn steps_take_space_in_proportion_to_their_length() {
    let base = SceneParams::default();
    let tl = ParameterTimeline::new(
        base,
        vec![
            KeyframeGroup::new("short").form_factor(1.0),
            KeyframeGroup::new("long").key(Keyframe::new(Track::FormFactor, 3.0).lasting(3.0)),
        ],
    )
    .unwrap();
    let (s0, e0) = tl.range_of("short").unwrap();
    let (s1, e1) = tl.range_of("long").unwrap();
    assert!(approx(s0, 0.0, 1e-6) && approx(e0, 0.25, 1e-6));
    assert!(approx(s1, 0.25, 1e-6) && approx(e1, 1.0, 1e-6));
    assert!(approx(tl.evaluate(0.25).form_factor, 1.0, 1e-5));
    assert!(approx(tl.evaluate(0.625).form_factor, 2.0, 1e-5));
}

#[test]
fn shorter_keyframes_finish_early_within_their_step() {
    let base = SceneParams::default();
    let tl = ParameterTimeline::new(
        base,
        vec![KeyframeGroup::new("mixed")
            .key(Keyframe::new(Track::FormFactor, 1.0).lasting(2.0))
            .key(Keyframe::new(Track::CameraY, 4.0).lasting(1.0))],
    )
    .unwrap();
    let p = tl.evaluate(0.5);
    assert!(approx(p.form_factor, 0.5, 1e-5));
    assert!(approx(p.camera_position.y, 4.0, 1e-5));
}

#[test]
fn invalid_timelines_are_rejected() {
    let base = SceneParams::default();
    assert_eq!(
        ParameterTimeline::new(base, vec![]).unwrap_err(),
        StoryError::EmptyTimeline
    );
    assert!(matches!(
        ParameterTimeline::new(base, vec![KeyframeGroup::new("empty")]),
        Err(StoryError::EmptyStep { .. })
    ));
    assert_eq!(
        ParameterTimeline::new(
            base,
            vec![
                KeyframeGroup::new("a").form_factor(1.0),
                KeyframeGroup::new("a").form_factor(2.0),
            ]
        )
        .unwrap_err(),
        StoryError::DuplicateStep("a".into())
    );
    assert!(matches!(
        ParameterTimeline::new(
            base,
            vec![KeyframeGroup::new("z").key(Keyframe::new(Track::CameraZ, 1.0).lasting(0.0))]
        ),
        Err(StoryError::InvalidDuration { .. })
    ));
    assert!(matches!(
        ParameterTimeline::new(
            base,
            vec![KeyframeGroup::new("n").key(Keyframe::new(Track::ColorR, f32::NAN))]
        ),
        Err(StoryError::NonFiniteTarget {
            track: Track::ColorR,
            ..
        })
    ));
}
