/// Easing curves applied to a normalized progress value.
///
/// None of these overshoot: for `t` in \[0, 1\] every curve stays in \[0, 1\]
/// and is monotonically non-decreasing, so scrubbed values never leave the
/// range between their endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    Power1Out,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3InOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power2In => t * t * t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}
