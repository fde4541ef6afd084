use crate::constants::*;
use crate::viewport;
use rand::rngs::StdRng;
use rand::SeedableRng;
use story_core::{Chapter, DomSink, PageLayout, Scrambler, SlideDirection};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] {} listener error: {:?}", event, e);
    }
    closure.forget();
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Match the canvas backing store to its CSS box, ratio capped at 2.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) =
            viewport::backing_size(rect.width(), rect.height(), w.device_pixel_ratio(), MAX_PIXEL_RATIO);
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// Current document scroll fraction.
pub fn scroll_fraction(window: &web::Window, document: &web::Document) -> f32 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let (_, vh) = viewport_size(window);
    viewport::scroll_fraction(scroll_y, document_height(document), vh as f64)
}

/// Section bounds in document coordinates. Sections missing from the page
/// are left out and their triggers stay inert.
pub fn measure_layout(window: &web::Window, document: &web::Document) -> PageLayout {
    let (vw, vh) = viewport_size(window);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let mut layout = PageLayout::new(vw, vh, document_height(document) as f32);
    for chapter in Chapter::ALL {
        match document.get_element_by_id(chapter.dom_id()) {
            Some(el) => {
                let rect = el.get_bounding_client_rect();
                layout = layout.with_section(
                    chapter,
                    (rect.top() + scroll_y) as f32,
                    rect.height() as f32,
                );
            }
            None => log::warn!("[dom] missing section #{}", chapter.dom_id()),
        }
    }
    layout
}

/// Give every clickable control an id the engine understands and build the
/// slider dots. Returns (slide count, hero card count).
pub fn tag_click_targets(document: &web::Document) -> (usize, usize) {
    for (selector, id) in [
        (CLOSE_MODAL_SELECTOR, "close-modal"),
        (PREV_SELECTOR, "prev-btn"),
        (NEXT_SELECTOR, "next-btn"),
    ] {
        if let Some(el) = query(document, selector) {
            el.set_id(id);
        }
    }
    for (selector, prefix) in [
        (KNOWLEDGE_CARD_SELECTOR, "knowledge-card"),
        (TIMELINE_ITEM_SELECTOR, "timeline-item"),
        (HERO_CARD_SELECTOR, "hero-card"),
    ] {
        for (i, el) in query_all(document, selector).iter().enumerate() {
            el.set_id(&format!("{}-{}", prefix, i));
        }
    }
    let slides = query_all(document, SLIDE_SELECTOR).len();
    if let Some(container) = query(document, DOTS_CONTAINER_SELECTOR) {
        for i in 0..slides {
            let Ok(dot) = document.create_element("div") else {
                continue;
            };
            _ = dot.class_list().add_1(CLASS_DOT);
            set_class(&dot, CLASS_ACTIVE, i == 0);
            dot.set_id(&format!("slide-dot-{}", i));
            _ = container.append_child(&dot);
        }
    }
    (slides, query_all(document, HERO_CARD_SELECTOR).len())
}

struct TitleScramble {
    element: web::HtmlElement,
    original: String,
    scrambler: Scrambler,
}

/// Page-side half of the engine's DOM boundary.
pub struct DomBridge {
    window: web::Window,
    document: web::Document,
    timeline_items: Vec<web::Element>,
    progress: Option<web::Element>,
    modal: Option<web::Element>,
    slides: Vec<web::Element>,
    dots: Vec<web::Element>,
    heroes: Vec<web::Element>,
    sound_button: Option<web::Element>,
    sound_icon: Option<web::Element>,
    titles: Vec<TitleScramble>,
    rng: StdRng,
}

impl DomBridge {
    /// Call after [`tag_click_targets`] so the generated dots are found.
    pub fn new(window: web::Window, document: web::Document) -> Self {
        let sound_button = document.get_element_by_id(SOUND_TOGGLE_ID);
        let sound_icon = sound_button
            .as_ref()
            .and_then(|b| b.query_selector(SOUND_ICON_SELECTOR).ok().flatten());
        Self {
            timeline_items: query_all(&document, TIMELINE_ITEM_SELECTOR),
            progress: query(&document, TIMELINE_PROGRESS_SELECTOR),
            modal: query(&document, MODAL_SELECTOR),
            slides: query_all(&document, SLIDE_SELECTOR),
            dots: query_all(&document, &format!("{} .{}", DOTS_CONTAINER_SELECTOR, CLASS_DOT)),
            heroes: query_all(&document, HERO_CARD_SELECTOR),
            sound_button,
            sound_icon,
            titles: Vec::new(),
            rng: StdRng::from_entropy(),
            window,
            document,
        }
    }

    /// Advance running title scrambles.
    pub fn step(&mut self, dt: f32) {
        let rng = &mut self.rng;
        self.titles.retain_mut(|t| {
            t.scrambler.advance(dt);
            if t.scrambler.is_done() {
                t.element.set_inner_text(&t.original);
                false
            } else {
                t.element.set_inner_text(&t.scrambler.frame(rng));
                true
            }
        });
    }

    fn show_slide(&self, index: usize, class: Option<&str>) {
        for (i, slide) in self.slides.iter().enumerate() {
            set_class(slide, CLASS_ACTIVE, i == index);
            set_class(slide, CLASS_FROM_RIGHT, i == index && class == Some(CLASS_FROM_RIGHT));
            set_class(slide, CLASS_FROM_LEFT, i == index && class == Some(CLASS_FROM_LEFT));
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, CLASS_ACTIVE, i == index);
        }
    }

    fn lock_body_scroll(&self, locked: bool) {
        if let Some(body) = self.document.body() {
            _ = body
                .style()
                .set_property("overflow", if locked { "hidden" } else { "" });
        }
    }
}

impl DomSink for DomBridge {
    fn highlight_chapter(&mut self, index: usize) {
        for (i, item) in self.timeline_items.iter().enumerate() {
            set_class(item, CLASS_ACTIVE, i == index);
        }
        if let Some(bar) = &self.progress {
            let pct = viewport::progress_percent(index, Chapter::ALL.len());
            set_style(bar, "height", &format!("{:.2}%", pct));
        }
    }

    fn open_modal(&mut self, slide: usize) {
        self.show_slide(slide, None);
        self.lock_body_scroll(true);
        if let Some(modal) = &self.modal {
            set_class(modal, CLASS_OPEN, true);
        }
    }

    fn close_modal(&mut self) {
        if let Some(modal) = &self.modal {
            set_class(modal, CLASS_OPEN, false);
        }
        self.lock_body_scroll(false);
    }

    fn set_slide(&mut self, index: usize, direction: SlideDirection) {
        let class = match direction {
            SlideDirection::Forward => CLASS_FROM_RIGHT,
            SlideDirection::Backward => CLASS_FROM_LEFT,
        };
        self.show_slide(index, Some(class));
    }

    fn reveal_title(&mut self, chapter: Chapter) {
        let selector = format!("#{} {}", chapter.dom_id(), TITLE_SELECTOR);
        let Some(el) = query(&self.document, &selector) else {
            return;
        };
        set_class(&el, CLASS_REVEALED, true);
        let Ok(element) = el.dyn_into::<web::HtmlElement>() else {
            return;
        };
        // a reveal may restart mid-scramble; the first text seen is the real one
        let original = match element.get_attribute(ORIGINAL_TEXT_ATTR) {
            Some(text) => text,
            None => {
                let text = element.inner_text();
                _ = element.set_attribute(ORIGINAL_TEXT_ATTR, &text);
                text
            }
        };
        self.titles.retain(|t| t.element != element);
        self.titles.push(TitleScramble {
            scrambler: Scrambler::new(&original),
            element,
            original,
        });
    }

    fn set_sound_indicator(&mut self, on: bool) {
        if let Some(icon) = &self.sound_icon {
            icon.set_text_content(Some(if on { "ON" } else { "OFF" }));
        }
        if let Some(button) = &self.sound_button {
            set_class(button, CLASS_PLAYING, on);
        }
    }

    fn scroll_to_chapter(&mut self, chapter: Chapter) {
        let Some(el) = self.document.get_element_by_id(chapter.dom_id()) else {
            log::warn!("[dom] cannot scroll to missing #{}", chapter.dom_id());
            return;
        };
        let top = el.get_bounding_client_rect().top() + self.window.scroll_y().unwrap_or(0.0);
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn activate_hero(&mut self, index: usize) {
        for (i, card) in self.heroes.iter().enumerate() {
            set_class(card, CLASS_ACTIVE, i == index);
        }
    }
}
