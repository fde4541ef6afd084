use crate::constants::{MASTER_GAIN, SECTION_FADE_SEC, SECTION_VOLUME};
use fnv::FnvHashMap;
use story_core::{AudioSink, Chapter};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// One looping section track: media element -> source node -> gain -> master.
struct Track {
    element: web::HtmlAudioElement,
    gain: web::GainNode,
    // Keeps the source node alive with its element.
    _source: web::MediaElementAudioSourceNode,
    /// Context time after which a faded-out track is paused.
    pause_at: Option<f64>,
}

impl Track {
    fn open(
        ctx: &web::AudioContext,
        master: &web::GainNode,
        chapter: Chapter,
    ) -> Result<Self, ()> {
        let element = web::HtmlAudioElement::new_with_src(chapter.audio_path()).map_err(|e| {
            log::error!("[audio] {:?} element error: {:?}", chapter, e);
        })?;
        element.set_loop(true);
        let source = ctx.create_media_element_source(&element).map_err(|e| {
            log::error!("[audio] {:?} source error: {:?}", chapter, e);
        })?;
        let gain = create_gain(ctx, 0.0, chapter.dom_id())?;
        _ = source.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(master);
        Ok(Self {
            element,
            gain,
            _source: source,
            pause_at: None,
        })
    }

    /// Ramp linearly from the current gain to `target` over the fade time.
    fn ramp(&self, now: f64, target: f32) {
        let param = self.gain.gain();
        let current = param.value();
        _ = param.cancel_scheduled_values(now);
        _ = param.set_value_at_time(current, now);
        _ = param.linear_ramp_to_value_at_time(target, now + SECTION_FADE_SEC);
    }

    fn fade_in(&mut self, now: f64, label: &'static str) {
        self.pause_at = None;
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] {} play rejected: {:?}", label, e);
                }
            }),
            Err(e) => log::warn!("[audio] {} play error: {:?}", label, e),
        }
        self.ramp(now, SECTION_VOLUME);
    }

    fn fade_out(&mut self, now: f64) {
        self.ramp(now, 0.0);
        self.pause_at = Some(now + SECTION_FADE_SEC);
    }
}

/// Section audio player. Tracks are opened lazily on first play, since the
/// context may only start after a user gesture.
pub struct SectionPlayer {
    ctx: web::AudioContext,
    master: web::GainNode,
    tracks: FnvHashMap<Chapter, Track>,
    current: Option<Chapter>,
}

impl SectionPlayer {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master = create_gain(&ctx, MASTER_GAIN, "Master")
            .map_err(|_| anyhow::anyhow!("master gain unavailable"))?;
        _ = master.connect_with_audio_node(&ctx.destination());
        Ok(Self {
            ctx,
            master,
            tracks: FnvHashMap::default(),
            current: None,
        })
    }

    /// Pause tracks whose fade-out has completed. Called once per frame.
    pub fn step(&mut self) {
        let now = self.ctx.current_time();
        for track in self.tracks.values_mut() {
            if matches!(track.pause_at, Some(t) if now >= t) {
                _ = track.element.pause();
                track.pause_at = None;
            }
        }
    }

    fn track(&mut self, chapter: Chapter) -> Option<&mut Track> {
        if !self.tracks.contains_key(&chapter) {
            let track = Track::open(&self.ctx, &self.master, chapter).ok()?;
            self.tracks.insert(chapter, track);
        }
        self.tracks.get_mut(&chapter)
    }
}

impl AudioSink for SectionPlayer {
    fn play_section(&mut self, chapter: Chapter) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
        let now = self.ctx.current_time();
        if let Some(prev) = self.current.filter(|c| *c != chapter) {
            if let Some(track) = self.tracks.get_mut(&prev) {
                track.fade_out(now);
            }
        }
        let Some(track) = self.track(chapter) else {
            self.current = None;
            return;
        };
        track.fade_in(now, chapter.dom_id());
        self.current = Some(chapter);
        log::info!("[audio] playing {}", chapter.audio_path());
    }

    fn mute_all(&mut self) {
        let now = self.ctx.current_time();
        for track in self.tracks.values_mut() {
            if track.pause_at.is_none() && !track.element.paused() {
                track.fade_out(now);
            }
        }
        self.current = None;
    }
}
