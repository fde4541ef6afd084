// Host-side tests for browser constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sprite_sizes_are_positive() {
    for size in [
        SIZE_FIELD,
        SIZE_SPARK,
        SIZE_RAIN,
        SIZE_FIREFLY,
        SIZE_OUTLINE,
        SIZE_STAR,
    ] {
        assert!(size > 0.0);
    }
    assert!(SCAN_WIDTH > 0.0);
}

#[test]
fn tints_are_normalized() {
    for tint in [
        TINT_FOREST,
        TINT_SPARK,
        TINT_RAIN,
        TINT_FIREFLY,
        TINT_COCAR,
        TINT_POTTERY,
        TINT_STAR,
    ] {
        assert!(tint.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", tint);
        assert!(tint[3] > 0.0);
    }
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn sprite_kinds_are_distinct() {
    assert!(KIND_FIELD < KIND_SPRITE);
    assert!(KIND_SPRITE < KIND_SCAN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_levels_match_the_page() {
    assert_eq!(SECTION_VOLUME, 0.5);
    assert_eq!(SECTION_FADE_SEC, 1.0);
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
}

#[test]
fn selectors_are_css_selectors() {
    for s in [
        CANVAS_SELECTOR,
        MODAL_SELECTOR,
        CLOSE_MODAL_SELECTOR,
        PREV_SELECTOR,
        NEXT_SELECTOR,
        SOUND_ICON_SELECTOR,
        KNOWLEDGE_CARD_SELECTOR,
        SLIDE_SELECTOR,
        DOTS_CONTAINER_SELECTOR,
        TIMELINE_ITEM_SELECTOR,
        TIMELINE_PROGRESS_SELECTOR,
        HERO_CARD_SELECTOR,
        TITLE_SELECTOR,
    ] {
        assert!(s.starts_with('.') || s.starts_with('#'), "{}", s);
    }
    assert!(!SOUND_TOGGLE_ID.starts_with('#'));
    assert!(ORIGINAL_TEXT_ATTR.starts_with("data-"));
}
