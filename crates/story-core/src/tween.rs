//! Time-driven interpolation for values that chase a target (fog, cocar
//! depth, audio gain) as opposed to the scroll-driven timeline.

use crate::easing::Easing;
use glam::Vec3;

pub trait Lerp: Copy + PartialEq {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment<T> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

/// A value with at most one in-flight transition.
///
/// `retarget` always restarts from the current value, so a reversal midway
/// through a fade never snaps back to the old target.
#[derive(Clone, Copy, Debug)]
pub struct Tweened<T: Lerp> {
    value: T,
    segment: Option<Segment<T>>,
}

impl<T: Lerp> Tweened<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            segment: None,
        }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    pub fn target(&self) -> T {
        self.segment.map(|s| s.to).unwrap_or(self.value)
    }

    pub fn is_animating(&self) -> bool {
        self.segment.is_some()
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.segment = None;
    }

    /// Start a transition to `to` from wherever the value is now. A pending
    /// transition is replaced, never completed.
    pub fn retarget(&mut self, to: T, duration: f32, easing: Easing) {
        if duration.is_nan() || duration <= 0.0 {
            self.value = to;
            self.segment = None;
            return;
        }
        self.segment = Some(Segment {
            from: self.value,
            to,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    /// Step the transition. Returns true on the step that completes it.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(seg) = self.segment.as_mut() else {
            return false;
        };
        seg.elapsed += dt.max(0.0);
        let t = (seg.elapsed / seg.duration).min(1.0);
        self.value = T::lerp(seg.from, seg.to, seg.easing.apply(t));
        if t >= 1.0 {
            self.value = seg.to;
            self.segment = None;
            return true;
        }
        false
    }
}
