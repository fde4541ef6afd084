use crate::boundary::{AudioSink, DomSink};
use crate::chapter::Chapter;

/// Which section should be audible. The sink does the actual fading; this
/// only decides when to ask for it.
#[derive(Clone, Copy, Debug)]
pub struct AudioDirector {
    current: Option<Chapter>,
    section: Option<Chapter>,
    muted: bool,
}

impl Default for AudioDirector {
    fn default() -> Self {
        Self {
            current: None,
            section: None,
            muted: true,
        }
    }
}

impl AudioDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn current(&self) -> Option<Chapter> {
        self.current
    }

    /// Most recently entered section, tracked while muted too.
    pub fn section(&self) -> Option<Chapter> {
        self.section
    }

    pub fn enter(&mut self, chapter: Chapter, sink: &mut dyn AudioSink) {
        self.section = Some(chapter);
        if self.muted || self.current == Some(chapter) {
            return;
        }
        self.current = Some(chapter);
        sink.play_section(chapter);
    }

    /// Flip mute. Unmuting resumes the last entered section.
    pub fn toggle(&mut self, sink: &mut dyn AudioSink, dom: &mut dyn DomSink) {
        self.muted = !self.muted;
        if self.muted {
            self.current = None;
            sink.mute_all();
        } else if let Some(chapter) = self.section {
            self.current = Some(chapter);
            sink.play_section(chapter);
        }
        log::info!("[audio] sound {}", if self.muted { "off" } else { "on" });
        dom.set_sound_indicator(!self.muted);
    }

    /// Fade everything out for teardown without touching the mute flag.
    pub fn silence(&mut self, sink: &mut dyn AudioSink) {
        if self.current.take().is_some() {
            sink.mute_all();
        }
    }
}
