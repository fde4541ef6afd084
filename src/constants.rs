// Browser-side tuning: selectors, class names, canvas sizing, audio levels
// and sprite looks. Scene tuning lives in `story_core::constants`.

// Page markup
pub const CANVAS_SELECTOR: &str = "#bg-canvas";
pub const MODAL_SELECTOR: &str = ".modal-overlay";
pub const CLOSE_MODAL_SELECTOR: &str = ".close-modal";
pub const PREV_SELECTOR: &str = ".prev-btn";
pub const NEXT_SELECTOR: &str = ".next-btn";
pub const SOUND_TOGGLE_ID: &str = "sound-toggle";
pub const SOUND_ICON_SELECTOR: &str = ".sound-icon";
pub const KNOWLEDGE_CARD_SELECTOR: &str = ".knowledge-card";
pub const SLIDE_SELECTOR: &str = ".custom-slide";
pub const DOTS_CONTAINER_SELECTOR: &str = ".slider-dots";
pub const TIMELINE_ITEM_SELECTOR: &str = ".timeline-item";
pub const TIMELINE_PROGRESS_SELECTOR: &str = ".timeline-progress";
pub const HERO_CARD_SELECTOR: &str = ".hero-card";
pub const TITLE_SELECTOR: &str = ".chapter-title";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";

// Class names toggled by the DOM bridge
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DOT: &str = "dot";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_FROM_RIGHT: &str = "from-right";
pub const CLASS_FROM_LEFT: &str = "from-left";
pub const CLASS_PLAYING: &str = "playing";

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Section audio
pub const SECTION_VOLUME: f32 = 0.5;
pub const SECTION_FADE_SEC: f64 = 1.0;
pub const MASTER_GAIN: f32 = 1.0;

// Sprite kinds understood by points.wgsl
pub const KIND_FIELD: f32 = 0.0;
pub const KIND_SPRITE: f32 = 1.0;
pub const KIND_SCAN: f32 = 2.0;

// Sprite sizes (world units)
pub const SIZE_FIELD: f32 = 0.05;
pub const SIZE_SPARK: f32 = 0.1;
pub const SIZE_RAIN: f32 = 0.05;
pub const SIZE_FIREFLY: f32 = 0.08;
pub const SIZE_OUTLINE: f32 = 0.06;
pub const SIZE_STAR: f32 = 0.15;

// Per-element tints (sRGB, 0..1) and opacity
pub const TINT_FOREST: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const TINT_SPARK: [f32; 4] = [1.0, 0.270588, 0.0, 0.8];
pub const TINT_RAIN: [f32; 4] = [0.666667, 0.666667, 0.666667, 0.6];
pub const TINT_FIREFLY: [f32; 4] = [1.0, 1.0, 0.666667, 0.6];
pub const TINT_COCAR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const TINT_POTTERY: [f32; 4] = [0.545098, 0.270588, 0.074510, 0.8];
pub const TINT_STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// Scan line half-width (world units)
pub const SCAN_WIDTH: f32 = 0.5;
