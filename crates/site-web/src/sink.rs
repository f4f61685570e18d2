use crate::constants::{
    CURSOR_HOVER_CLASS, CURSOR_SELECTOR, DRIFT_SELECTOR, HEADER_HIDDEN_CLASS, HEADER_SELECTOR,
    ORB_SELECTOR, REVEALED_CLASS,
};
use crate::dom;
use crate::style;
use glam::Vec2;
use site_core::{OrbTransform, Reveal, VisualSink};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Applies engine output to the live document.
///
/// Any piece of markup that is missing is simply skipped.
pub struct DomSink {
    header: Option<web::Element>,
    orbs: Vec<web::HtmlElement>,
    drift: Option<web::HtmlElement>,
    cursor: Option<web::HtmlElement>,
    // Indexed by `ElementId`; ids are handed out sequentially at mount.
    reveal_targets: Vec<web::Element>,
}

impl DomSink {
    pub fn new(document: &web::Document) -> Self {
        let orbs = dom::query_all(document, ORB_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect::<Vec<_>>();
        Self {
            header: document.query_selector(HEADER_SELECTOR).ok().flatten(),
            orbs,
            drift: dom::query_html(document, DRIFT_SELECTOR),
            cursor: dom::query_html(document, CURSOR_SELECTOR),
            reveal_targets: Vec::new(),
        }
    }

    #[inline]
    pub fn orb_count(&self) -> usize {
        self.orbs.len()
    }

    /// Store `el` as a reveal target and return the id it was assigned, or
    /// `None` once the id space is used up.
    pub fn push_reveal_target(&mut self, el: web::Element) -> Option<u32> {
        let Some(id) = style::reveal_id(self.reveal_targets.len()) else {
            log::warn!("[reveal] out of element ids; target left unobserved");
            return None;
        };
        self.reveal_targets.push(el);
        Some(id)
    }
}

impl VisualSink for DomSink {
    fn reveal(&mut self, reveal: Reveal) {
        let Some(el) = self.reveal_targets.get(reveal.id.0 as usize) else {
            return;
        };
        if reveal.delay_ms > 0 {
            if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(
                    html,
                    "transition-delay",
                    &style::transition_delay_css(reveal.delay_ms),
                );
            }
        }
        dom::set_class(el, REVEALED_CLASS, true);
    }

    fn set_header_visible(&mut self, visible: bool) {
        if let Some(header) = &self.header {
            dom::set_class(header, HEADER_HIDDEN_CLASS, !visible);
        }
    }

    fn set_orb_transform(&mut self, index: usize, transform: OrbTransform) {
        if let Some(orb) = self.orbs.get(index) {
            dom::set_style(orb, "transform", &style::orb_transform_css(&transform));
        }
    }

    fn set_drift(&mut self, translate_x: f64) {
        if let Some(el) = &self.drift {
            dom::set_style(el, "transform", &style::drift_transform_css(translate_x));
        }
    }

    fn set_cursor(&mut self, position: Vec2, hovered: bool) {
        if let Some(cursor) = &self.cursor {
            dom::set_style(cursor, "left", &style::px(position.x));
            dom::set_style(cursor, "top", &style::px(position.y));
            dom::set_class(cursor, CURSOR_HOVER_CLASS, hovered);
        }
    }
}
