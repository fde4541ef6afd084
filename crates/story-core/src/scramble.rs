use crate::constants::{SCRAMBLE_GLYPHS, SCRAMBLE_SEC};
use rand::Rng;

/// Text that resolves left to right while unresolved positions flicker
/// through random glyphs.
#[derive(Clone, Debug)]
pub struct Scrambler {
    text: Vec<char>,
    elapsed: f32,
    duration: f32,
}

impl Scrambler {
    pub fn new(text: &str) -> Self {
        Self::with_duration(text, SCRAMBLE_SEC)
    }

    pub fn with_duration(text: &str, duration: f32) -> Self {
        Self {
            text: text.chars().collect(),
            elapsed: 0.0,
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }

    pub fn resolved(&self) -> usize {
        let n = self.text.len();
        if self.is_done() {
            return n;
        }
        ((n as f32 * self.progress()).ceil() as usize).min(n)
    }

    /// Current text. Whitespace is never scrambled so words keep their
    /// shape.
    pub fn frame(&self, rng: &mut impl Rng) -> String {
        let glyphs = SCRAMBLE_GLYPHS.as_bytes();
        let resolved = self.resolved();
        self.text
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < resolved || c.is_whitespace() {
                    c
                } else {
                    glyphs[rng.gen_range(0..glyphs.len())] as char
                }
            })
            .collect()
    }
}
