//! Knowledge-card modal slider and the hero card gallery.

use crate::boundary::{DomSink, SlideDirection};
use crate::input::Key;

#[derive(Clone, Copy, Debug, Default)]
pub struct ModalSlider {
    open: bool,
    current: usize,
    count: usize,
}

impl ModalSlider {
    pub fn new(count: usize) -> Self {
        Self {
            open: false,
            current: 0,
            count,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn open_at(&mut self, index: usize, dom: &mut dyn DomSink) {
        if index >= self.count {
            log::warn!("[dom] no slide for card {} ({} slides)", index, self.count);
            return;
        }
        self.current = index;
        self.open = true;
        dom.open_modal(index);
    }

    pub fn close(&mut self, dom: &mut dyn DomSink) {
        if self.open {
            self.open = false;
            dom.close_modal();
        }
    }

    /// Move to `index`, wrapping at either end. Moving to the slide already
    /// shown does nothing.
    pub fn go_to(&mut self, index: isize, dom: &mut dyn DomSink) {
        if !self.open || self.count == 0 {
            return;
        }
        let n = self.count as isize;
        let next = index.rem_euclid(n) as usize;
        if next == self.current {
            return;
        }
        let direction = if next > self.current {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.current = next;
        dom.set_slide(next, direction);
    }

    pub fn next(&mut self, dom: &mut dyn DomSink) {
        self.go_to(self.current as isize + 1, dom);
    }

    pub fn prev(&mut self, dom: &mut dyn DomSink) {
        self.go_to(self.current as isize - 1, dom);
    }

    /// Keyboard navigation; keys are ignored while closed. Returns true when
    /// the key was consumed.
    pub fn key(&mut self, key: Key, dom: &mut dyn DomSink) -> bool {
        if !self.open {
            return false;
        }
        match key {
            Key::Escape => self.close(dom),
            Key::ArrowRight => self.next(dom),
            Key::ArrowLeft => self.prev(dom),
            Key::Other => return false,
        }
        true
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HeroGallery {
    active: Option<usize>,
    count: usize,
}

impl HeroGallery {
    pub fn new(count: usize) -> Self {
        Self {
            active: None,
            count,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn activate(&mut self, index: usize, dom: &mut dyn DomSink) {
        if index >= self.count || self.active == Some(index) {
            return;
        }
        self.active = Some(index);
        dom.activate_hero(index);
    }
}
