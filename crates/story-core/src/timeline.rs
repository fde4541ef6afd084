//! Scroll-scrubbed parameter timeline.
//!
//! Steps are laid end to end along a single progress axis from 0 (top of the
//! page) to 1 (bottom). Each step blends from the state the previous steps
//! left behind to its own targets. Evaluation is a pure function of the
//! cursor: scrubbing backwards retraces the exact same values.

use crate::error::{Result, StoryError};
use crate::params::{Keyframe, KeyframeGroup, SceneParams};
use fnv::FnvHashSet;

#[derive(Clone, Debug)]
struct Step {
    label: String,
    keyframes: Vec<Keyframe>,
    span: f32,
    start: f32,
    end: f32,
    entry: SceneParams,
}

impl Step {
    fn blend(&self, local: f32, out: &mut SceneParams) {
        let group_time = local * self.span;
        for kf in &self.keyframes {
            let t = (group_time / kf.duration).clamp(0.0, 1.0);
            let from = kf.track.get(&self.entry);
            let v = from + (kf.target - from) * kf.easing.apply(t);
            kf.track.set(out, v);
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParameterTimeline {
    steps: Vec<Step>,
    exit: SceneParams,
}

impl ParameterTimeline {
    pub fn new(base: SceneParams, groups: Vec<KeyframeGroup>) -> Result<Self> {
        if groups.is_empty() {
            return Err(StoryError::EmptyTimeline);
        }
        let mut seen = FnvHashSet::default();
        for g in &groups {
            if g.keyframes.is_empty() {
                return Err(StoryError::EmptyStep {
                    label: g.label.clone(),
                });
            }
            if !seen.insert(g.label.as_str()) {
                return Err(StoryError::DuplicateStep(g.label.clone()));
            }
            for kf in &g.keyframes {
                if !kf.duration.is_finite() || kf.duration <= 0.0 {
                    return Err(StoryError::InvalidDuration {
                        label: g.label.clone(),
                        duration: kf.duration,
                    });
                }
                if !kf.target.is_finite() {
                    return Err(StoryError::NonFiniteTarget {
                        label: g.label.clone(),
                        track: kf.track,
                    });
                }
            }
        }

        let total: f32 = groups.iter().map(KeyframeGroup::span).sum();
        let mut steps = Vec::with_capacity(groups.len());
        let mut state = base;
        let mut acc = 0.0_f32;
        for g in groups {
            let span = g.span();
            let start = acc / total;
            acc += span;
            let end = acc / total;
            let mut step = Step {
                label: g.label,
                keyframes: g.keyframes,
                span,
                start,
                end,
                entry: state,
            };
            step.blend(1.0, &mut state);
            // last step must land exactly on 1.0 despite rounding
            if step.end > 1.0 - 1e-6 {
                step.end = 1.0;
            }
            steps.push(step);
        }
        log::debug!("[timeline] built {} steps", steps.len());
        Ok(Self { steps, exit: state })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Scene state at a normalized scroll cursor. Out-of-range cursors clamp;
    /// NaN is treated as the top of the page.
    pub fn evaluate(&self, cursor: f32) -> SceneParams {
        let c = clamp_cursor(cursor);
        let idx = self.steps.partition_point(|s| s.end <= c);
        let Some(step) = self.steps.get(idx) else {
            return self.exit;
        };
        let mut out = step.entry;
        if c > step.start {
            let width = (step.end - step.start).max(f32::EPSILON);
            step.blend((c - step.start) / width, &mut out);
        }
        out
    }

    pub fn step_at(&self, cursor: f32) -> (&str, f32) {
        let c = clamp_cursor(cursor);
        let idx = self
            .steps
            .partition_point(|s| s.end <= c)
            .min(self.steps.len() - 1);
        let step = &self.steps[idx];
        let width = (step.end - step.start).max(f32::EPSILON);
        (&step.label, ((c - step.start) / width).clamp(0.0, 1.0))
    }

    pub fn range_of(&self, label: &str) -> Option<(f32, f32)> {
        self.steps
            .iter()
            .find(|s| s.label == label)
            .map(|s| (s.start, s.end))
    }

    pub fn entry_state(&self, label: &str) -> Option<SceneParams> {
        self.steps.iter().find(|s| s.label == label).map(|s| s.entry)
    }

    pub fn final_state(&self) -> SceneParams {
        self.exit
    }
}

#[inline]
pub fn clamp_cursor(c: f32) -> f32 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}
