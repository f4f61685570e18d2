use crate::constants::{
    LEGACY_REVEAL_SELECTOR, REVEALED_CLASS, REVEAL_ATTR, REVEAL_DELAY_ATTR, REVEAL_ID_ATTR,
    REVEAL_SELECTOR, REVEAL_STAGGER_ATTR, REVEAL_THRESHOLD_ATTR, STAGGER_ITEM_SELECTOR,
};
use crate::dom;
use crate::sink::DomSink;
use crate::style;
use site_core::{ElementId, ScrollEngine, DEFAULT_REVEAL_THRESHOLD, LEGACY_REVEAL_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// IntersectionObserver bound to the engine's reveal latches. Disconnects on
/// drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn element_id(el: &web::Element) -> Option<ElementId> {
    el.get_attribute(REVEAL_ID_ATTR)
        .and_then(|v| v.parse::<u32>().ok())
        .map(ElementId)
}

impl RevealObserver {
    /// Register every reveal target in `document` with the engine and start
    /// observing them.
    pub fn mount(
        document: &web::Document,
        engine: Rc<RefCell<ScrollEngine>>,
        sink: Rc<RefCell<DomSink>>,
    ) -> anyhow::Result<Self> {
        let engine_cb = engine.clone();
        let sink_cb = sink.clone();
        let on_entries = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(id) = element_id(&target) else {
                    continue;
                };
                let revealed = engine_cb.borrow_mut().on_intersection(
                    id,
                    entry.intersection_ratio(),
                    &mut *sink_cb.borrow_mut(),
                );
                if revealed.is_some() {
                    observer.unobserve(&target);
                }
            }
        };
        let callback: ObserverCallback = Closure::wrap(
            Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
        );

        let targets = collect_targets(document);
        let thresholds = js_sys::Array::new();
        let mut seen: Vec<f64> = Vec::new();
        for t in &targets {
            if !seen.contains(&t.threshold) {
                seen.push(t.threshold);
                thresholds.push(&JsValue::from_f64(t.threshold));
            }
        }

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let mut eng = engine.borrow_mut();
        let mut sk = sink.borrow_mut();
        let mut settled = 0;
        for t in targets {
            let Some(id) = sk.push_reveal_target(t.el.clone()) else {
                break;
            };
            _ = t.el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
            // Left revealed by an earlier mount: latch it without observing.
            if t.el.class_list().contains(REVEALED_CLASS) {
                eng.register_revealed(ElementId(id), t.threshold);
                settled += 1;
                continue;
            }
            eng.register_with_delay(ElementId(id), t.threshold, t.delay_ms);
            observer.observe(&t.el);
        }
        log::info!(
            "[reveal] observing {} elements, {} already revealed",
            eng.tracker().pending().len(),
            settled
        );

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

struct Target {
    el: web::Element,
    threshold: f64,
    delay_ms: u32,
}

/// Reveal targets with their threshold and delay, legacy markup last.
fn collect_targets(document: &web::Document) -> Vec<Target> {
    let mut out = Vec::new();
    for el in dom::query_all(document, REVEAL_SELECTOR) {
        let threshold = style::parse_threshold_attr(
            el.get_attribute(REVEAL_THRESHOLD_ATTR).as_deref(),
            DEFAULT_REVEAL_THRESHOLD,
        );
        let delay_ms = style::reveal_delay_ms(
            el.get_attribute(REVEAL_DELAY_ATTR).as_deref(),
            stagger_index(&el),
        );
        out.push(Target {
            el,
            threshold: site_core::clamp_threshold(threshold),
            delay_ms,
        });
    }
    for el in dom::query_all(document, LEGACY_REVEAL_SELECTOR) {
        // Skip elements already picked up through `data-reveal`.
        if el.has_attribute(REVEAL_ATTR) {
            continue;
        }
        out.push(Target {
            el,
            threshold: LEGACY_REVEAL_THRESHOLD,
            delay_ms: 0,
        });
    }
    out
}

/// Position among the `[data-reveal]` siblings when the parent is a stagger
/// container.
fn stagger_index(el: &web::Element) -> Option<usize> {
    let parent = el.parent_element()?;
    if !parent.has_attribute(REVEAL_STAGGER_ATTR) {
        return None;
    }
    dom::index_within(&parent, STAGGER_ITEM_SELECTOR, el)
}
