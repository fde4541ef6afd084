use glam::Vec3;

// Shared scene tuning constants. Per-frame speeds from the page were authored
// at 60 fps; they are expressed here per second.

// Palette (sRGB, 0..1)
pub const COLOR_ORIGIN: [f32; 3] = [0.831373, 0.639216, 0.450980]; // #d4a373 earthy
pub const COLOR_CONNECTION: [f32; 3] = [0.164706, 0.615686, 0.560784]; // #2a9d8f nature green
pub const COLOR_TERRITORY: [f32; 3] = [0.345098, 0.505882, 0.341176]; // #588157 deep forest green
pub const COLOR_ARTIFACTS: [f32; 3] = [0.545, 0.27, 0.074]; // clay
pub const COLOR_RESISTANCE: [f32; 3] = [0.905882, 0.435294, 0.317647]; // #e76f51 fiery red
pub const COLOR_FIRE: [f32; 3] = [1.0, 0.270588, 0.0]; // #ff4500 burning orange
pub const COLOR_COSMOLOGY: [f32; 3] = [0.0, 0.0, 0.2]; // night sky
pub const COLOR_HEROES: [f32; 3] = [0.2, 0.1, 0.05]; // deep earth
pub const COLOR_CELEBRATION: [f32; 3] = [0.956863, 0.635294, 0.380392]; // #f4a261 joyful orange
pub const COLOR_FUTURE: [f32; 3] = [0.658824, 0.854902, 0.862745]; // #a8dadc ethereal blue

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 2.0, 5.0];
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Fog (exp2)
pub const FOG_DENSITY_DEFAULT: f32 = 0.02;
pub const FOG_DENSITY_RESISTANCE: f32 = 0.05;
pub const FOG_DENSITY_FIRE: f32 = 0.1;
pub const FOG_DENSITY_COSMOLOGY: f32 = 0.0;
pub const FOG_COLOR_START: [f32; 3] = [0.019608, 0.019608, 0.019608]; // #050505
pub const FOG_COLOR_RESISTANCE: [f32; 3] = [0.0, 0.0, 0.0];
pub const FOG_COLOR_DEFAULT: [f32; 3] = [0.02, 0.02, 0.02];
pub const FOG_TWEEN_SEC: f32 = 1.0;

// Particle field
pub const FIELD_COUNT: usize = 5000;
pub const FIELD_SPREAD: f32 = 15.0;
pub const FIELD_HEIGHT: f32 = 2.0;
pub const FIELD_SPIN_PER_SEC: f32 = 0.05; // base y-rotation over time
pub const FIELD_SCROLL_SPIN: f32 = 0.5; // extra y-rotation across the whole page
pub const POINTER_ROTATION_GAIN: f32 = 0.2;

// Pointer smoothing (critically damped, ~1 s settle)
pub const POINTER_OMEGA: f32 = 6.0;

// Sparks rise from the floor and wrap at the ceiling
pub const SPARK_COUNT: usize = 1000;
pub const SPARK_FLOOR: f32 = 0.0;
pub const SPARK_CEILING: f32 = 10.0;
pub const SPARK_SPEED_MIN: f32 = 1.2;
pub const SPARK_SPEED_SPAN: f32 = 3.0;
pub const SPARK_SPREAD_X: f32 = 20.0;
pub const SPARK_SPREAD_Z: f32 = 10.0;

// Rain falls to the floor and wraps at the top
pub const RAIN_COUNT: usize = 1500;
pub const RAIN_FLOOR: f32 = -5.0;
pub const RAIN_TOP: f32 = 15.0;
pub const RAIN_SPEED_MIN: f32 = 6.0;
pub const RAIN_SPEED_SPAN: f32 = 6.0;
pub const RAIN_SPREAD_X: f32 = 20.0;
pub const RAIN_SPREAD_Z: f32 = 10.0;

// Fireflies drift on per-axis sine paths
pub const FIREFLY_COUNT: usize = 50;
pub const FIREFLY_DRIFT_PER_SEC: f32 = 0.6;

// Forest
pub const TREE_COUNT: usize = 50;
pub const FOREST_SCAN_AMPLITUDE: f32 = 2.0;
pub const FOREST_SCAN_CENTER: f32 = 1.0;

// Cocar (feather crown)
pub const FEATHER_COUNT: usize = 20;
pub const COCAR_RADIUS: f32 = 2.0;
pub const COCAR_NEAR_Z: f32 = 0.0;
pub const COCAR_FAR_Z: f32 = -10.0;
pub const COCAR_SLIDE_SEC: f32 = 1.0;

// Pottery
pub const POTTERY_SPIN_PER_SEC: f32 = 0.3;

// Constellation
pub const STAR_COUNT: usize = 200;
pub const JAGUAR_OUTLINE: [[f32; 3]; 7] = [
    [-5.0, 12.0, -15.0],
    [-2.0, 14.0, -15.0],
    [2.0, 13.0, -15.0],
    [5.0, 10.0, -15.0],
    [3.0, 8.0, -15.0],
    [-1.0, 9.0, -15.0],
    [-4.0, 7.0, -15.0],
];

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Title scramble
pub const SCRAMBLE_SEC: f32 = 1.5;
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

#[inline]
pub fn rgb(c: [f32; 3]) -> Vec3 {
    Vec3::from_array(c)
}
