//! Host input events and their normalization into scroll cursor and pointer
//! offset.

use crate::constants::POINTER_OMEGA;
use crate::layout::PageLayout;
use crate::timeline::clamp_cursor;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Key {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    KnowledgeCard(usize),
    ModalClose,
    SlidePrev,
    SlideNext,
    SlideDot(usize),
    TimelineItem(usize),
    HeroCard(usize),
    SoundToggle,
}

impl ClickTarget {
    /// Parse a target id such as `knowledge-card-2` or `sound-toggle`.
    pub fn parse(id: &str) -> Option<ClickTarget> {
        let indexed = |prefix: &str| id.strip_prefix(prefix).and_then(|n| n.parse().ok());
        match id {
            "close-modal" => Some(ClickTarget::ModalClose),
            "prev-btn" => Some(ClickTarget::SlidePrev),
            "next-btn" => Some(ClickTarget::SlideNext),
            "sound-toggle" => Some(ClickTarget::SoundToggle),
            _ => indexed("knowledge-card-")
                .map(ClickTarget::KnowledgeCard)
                .or_else(|| indexed("slide-dot-").map(ClickTarget::SlideDot))
                .or_else(|| indexed("timeline-item-").map(ClickTarget::TimelineItem))
                .or_else(|| indexed("hero-card-").map(ClickTarget::HeroCard)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Normalized document scroll fraction.
    Scroll(f32),
    /// Pointer position in viewport pixels.
    PointerMove { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
    Layout(PageLayout),
    Key(Key),
    Click(ClickTarget),
}

/// Pointer position mapped to \[-0.5, 0.5\] on each axis, origin at the
/// viewport centre. Degenerate viewports map to the centre.
pub fn normalize_pointer(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let axis = |v: f32, extent: f32| {
        if extent > 0.0 && v.is_finite() {
            (v / extent - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        }
    };
    Vec2::new(axis(x, width), axis(y, height))
}

/// Critically damped follower for the pointer offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSmoother {
    target: Vec2,
    pos: Vec2,
    vel: Vec2,
}

impl PointerSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn value(&self) -> Vec2 {
        self.pos
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        if dt_sec <= 0.0 {
            return self.pos;
        }
        let omega = POINTER_OMEGA;
        let k = omega * omega;
        let c = 2.0 * omega;
        let accel = k * (self.target - self.pos) - c * self.vel;
        self.vel += accel * dt_sec;
        self.pos = (self.pos + self.vel * dt_sec).clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
        self.pos
    }
}

/// Displayed scroll cursor. With zero lag it tracks the scroll position
/// exactly; otherwise it eases toward it exponentially.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrubCursor {
    target: f32,
    shown: f32,
    lag_sec: f32,
}

impl ScrubCursor {
    pub fn new(lag_sec: f32) -> Self {
        Self {
            target: 0.0,
            shown: 0.0,
            lag_sec: if lag_sec.is_finite() { lag_sec.max(0.0) } else { 0.0 },
        }
    }

    pub fn set_target(&mut self, fraction: f32) {
        self.target = clamp_cursor(fraction);
        if self.lag_sec == 0.0 {
            self.shown = self.target;
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.shown
    }

    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.lag_sec == 0.0 {
            self.shown = self.target;
        } else if dt_sec > 0.0 {
            let a = 1.0 - (-dt_sec / self.lag_sec).exp();
            self.shown += (self.target - self.shown) * a;
            if (self.target - self.shown).abs() < 1e-5 {
                self.shown = self.target;
            }
        }
        self.shown
    }
}
