use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoryError>;

/// Failures raised while building the story configuration or while a single
/// frame degrades. Configuration variants are only produced at build time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoryError {
    #[error("timeline has no steps")]
    EmptyTimeline,

    #[error("timeline step `{label}` has no keyframes")]
    EmptyStep { label: String },

    #[error("timeline step label `{0}` is used twice")]
    DuplicateStep(String),

    #[error("keyframe in step `{label}` has non-positive duration {duration}")]
    InvalidDuration { label: String, duration: f32 },

    #[error("keyframe in step `{label}` has non-finite target for {track:?}")]
    NonFiniteTarget {
        label: String,
        track: crate::params::Track,
    },

    #[error("malformed scroll anchor `{0}`")]
    MalformedAnchor(String),

    #[error("trigger `{name}` ends before it starts ({start} .. {end})")]
    InvertedBand {
        name: String,
        start: String,
        end: String,
    },

    #[error("trigger `{0}` has no effects")]
    InertTrigger(String),

    #[error("story has no chapters")]
    NoChapters,

    #[error("non-finite frame input: {0}")]
    NonFinite(&'static str),

    #[error("section `{0}` has not been measured")]
    Unmeasured(&'static str),
}
