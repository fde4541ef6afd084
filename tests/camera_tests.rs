// Host-side tests for camera and viewport arithmetic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}

use camera::*;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;
use viewport::*;

fn near(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn view_moves_camera_to_origin() {
    let pos = Vec3::new(0.0, 2.0, 5.0);
    let view = view_matrix(pos, Vec3::ZERO);
    assert!(near(view.transform_point3(pos), Vec3::ZERO));
    // A point straight ahead lands on the negative z axis.
    let ahead = view.transform_point3(Vec3::new(0.0, 2.0, 0.0));
    assert!(near(ahead, Vec3::new(0.0, 0.0, -5.0)));
}

#[test]
fn yaw_turns_forward_to_negative_x() {
    let view = view_matrix(Vec3::ZERO, Vec3::new(0.0, FRAC_PI_2, 0.0));
    let p = view.transform_point3(Vec3::new(-5.0, 0.0, 0.0));
    assert!(near(p, Vec3::new(0.0, 0.0, -5.0)), "{:?}", p);
}

#[test]
fn point_ahead_projects_to_screen_center() {
    let pos = Vec3::new(0.0, 2.0, 5.0);
    let clip = projection(16.0 / 9.0) * view_matrix(pos, Vec3::ZERO);
    let ndc = clip.project_point3(Vec3::new(0.0, 2.0, -3.0));
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn degenerate_aspect_falls_back_to_square() {
    let square = projection(1.0);
    assert_eq!(projection(0.0), square);
    assert_eq!(projection(f32::NAN), square);
    assert_eq!(projection(-2.0), square);
}

#[test]
fn model_matrix_places_points() {
    let m = model_matrix(Vec3::new(0.0, 1.0, -10.0), Vec3::ZERO);
    assert!(near(m.transform_point3(Vec3::ZERO), Vec3::new(0.0, 1.0, -10.0)));
}

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(1000.0, 500.0, 3.0, 2.0), (2000, 1000));
    assert_eq!(backing_size(1000.0, 500.0, 1.5, 2.0), (1500, 750));
    assert_eq!(backing_size(1000.0, 500.0, f64::NAN, 2.0), (1000, 500));
    assert_eq!(backing_size(0.0, -10.0, 2.0, 2.0), (1, 1));
}

#[test]
fn scroll_fraction_clamps_to_document() {
    assert_eq!(scroll_fraction(0.0, 5000.0, 1000.0), 0.0);
    assert!((scroll_fraction(2000.0, 5000.0, 1000.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_fraction(9000.0, 5000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-50.0, 5000.0, 1000.0), 0.0);
    // Page shorter than the viewport cannot scroll.
    assert_eq!(scroll_fraction(100.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(f64::NAN, 5000.0, 1000.0), 0.0);
}

#[test]
fn progress_bar_spans_first_to_last_chapter() {
    assert_eq!(progress_percent(0, 11), 0.0);
    assert!((progress_percent(5, 11) - 50.0).abs() < 1e-9);
    assert_eq!(progress_percent(10, 11), 100.0);
    assert_eq!(progress_percent(42, 11), 100.0);
    assert_eq!(progress_percent(0, 1), 0.0);
}
