use glam::{EulerRot, Mat4, Quat, Vec3};
use story_core::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};

/// World transform of the camera. Rotation is Euler XYZ in radians.
#[inline]
pub fn camera_world(position: Vec3, rotation: Vec3) -> Mat4 {
    let q = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_rotation_translation(q, position)
}

#[inline]
pub fn view_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    camera_world(position, rotation).inverse()
}

/// Perspective projection; degenerate aspect ratios fall back to square.
pub fn projection(aspect: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
}

/// Model matrix for an element placement (Euler XYZ, no scale).
#[inline]
pub fn model_matrix(position: Vec3, rotation: Vec3) -> Mat4 {
    camera_world(position, rotation)
}
