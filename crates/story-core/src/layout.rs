//! Page geometry: where each section sits in the document, and how trigger
//! anchors written as "top center" resolve against it.

use crate::chapter::Chapter;
use crate::error::{Result, StoryError};
use fnv::FnvHashMap;

/// A point on the element paired with a point on the viewport, both as
/// fractions (0 = top, 1 = bottom). The band edge is reached when the two
/// points line up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f32,
    pub viewport: f32,
}

impl Anchor {
    pub const TOP_TOP: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP_CENTER: Anchor = Anchor::new(0.0, 0.5);
    pub const BOTTOM_CENTER: Anchor = Anchor::new(1.0, 0.5);
    pub const BOTTOM_BOTTOM: Anchor = Anchor::new(1.0, 1.0);
    pub const BOTTOM_TOP: Anchor = Anchor::new(1.0, 0.0);

    pub const fn new(element: f32, viewport: f32) -> Self {
        Self { element, viewport }
    }

    /// Parse "<element> <viewport>" where each side is `top`, `center`,
    /// `bottom` or a percentage such as `80%`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = text.split_whitespace();
        let (Some(el), Some(vp), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(StoryError::MalformedAnchor(text.to_string()));
        };
        let element = edge(el).ok_or_else(|| StoryError::MalformedAnchor(text.to_string()))?;
        let viewport = edge(vp).ok_or_else(|| StoryError::MalformedAnchor(text.to_string()))?;
        Ok(Self { element, viewport })
    }

    /// Scroll offset (px) at which this anchor lines up.
    #[inline]
    pub fn resolve(&self, rect: SectionRect, viewport_height: f32) -> f32 {
        rect.top + self.element * rect.height - self.viewport * viewport_height
    }
}

fn edge(word: &str) -> Option<f32> {
    match word {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => {
            let pct: f32 = word.strip_suffix('%')?.parse().ok()?;
            pct.is_finite().then_some(pct / 100.0)
        }
    }
}

/// True when `end` lines up before `start` for every possible layout.
pub fn always_inverted(start: Anchor, end: Anchor) -> bool {
    let de = end.element - start.element;
    let dv = end.viewport - start.viewport;
    (de < 0.0 && dv >= 0.0) || (de <= 0.0 && dv > 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub document_height: f32,
    pub sections: FnvHashMap<Chapter, SectionRect>,
}

impl PageLayout {
    pub fn new(viewport_width: f32, viewport_height: f32, document_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            document_height,
            sections: FnvHashMap::default(),
        }
    }

    pub fn with_section(mut self, chapter: Chapter, top: f32, height: f32) -> Self {
        self.sections.insert(chapter, SectionRect { top, height });
        self
    }

    /// Sections stacked from `top` in document order, each `height` tall.
    pub fn stacked(viewport_width: f32, viewport_height: f32, top: f32, height: f32) -> Self {
        let mut layout = Self::new(viewport_width, viewport_height, 0.0);
        let mut y = top;
        for c in Chapter::ALL {
            layout.sections.insert(c, SectionRect { top: y, height });
            y += height;
        }
        layout.document_height = y + viewport_height;
        layout
    }

    #[inline]
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    #[inline]
    pub fn scroll_px(&self, fraction: f32) -> f32 {
        crate::timeline::clamp_cursor(fraction) * self.max_scroll()
    }

    pub fn fraction_at(&self, scroll_px: f32) -> f32 {
        let max = self.max_scroll();
        if max <= 0.0 || !scroll_px.is_finite() {
            return 0.0;
        }
        (scroll_px / max).clamp(0.0, 1.0)
    }

    pub fn section(&self, chapter: Chapter) -> Option<SectionRect> {
        self.sections.get(&chapter).copied()
    }
}
