use crate::constants::{
    ANCHOR_SELECTOR, HOVER_TARGET_SELECTOR, MENU_OPEN_CLASS, MENU_SELECTOR, MENU_TOGGLE_SELECTOR,
    SCROLL_TOP_SELECTOR,
};
use crate::dom;
use crate::listeners::Listener;
use crate::sink::DomSink;
use crate::style;
use site_core::ScrollEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub engine: Rc<RefCell<ScrollEngine>>,
    pub sink: Rc<RefCell<DomSink>>,
}

pub fn wire_all(w: &EventWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = vec![wire_scroll(w)?, wire_pointermove(w)?];
    listeners.extend(wire_hover_targets(w)?);
    listeners.extend(wire_anchor_links(w)?);
    listeners.extend(wire_menu(w)?);
    Ok(listeners)
}

fn wire_scroll(w: &EventWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::passive(&w.window, "scroll", move |_ev| {
        let offset = dom::scroll_offset(&w2.window);
        w2.engine
            .borrow_mut()
            .on_scroll(offset, &mut *w2.sink.borrow_mut());
    })
}

fn wire_pointermove(w: &EventWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::passive(&w.window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        w2.engine.borrow_mut().on_pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            &mut *w2.sink.borrow_mut(),
        );
    })
}

fn wire_hover_targets(w: &EventWiring) -> anyhow::Result<Vec<Listener>> {
    let mut out = Vec::new();
    for el in dom::query_all(&w.document, HOVER_TARGET_SELECTOR) {
        for (kind, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let w2 = w.clone();
            out.push(Listener::passive(&el, kind, move |_ev| {
                w2.engine
                    .borrow_mut()
                    .on_hover(entered, &mut *w2.sink.borrow_mut());
            })?);
        }
    }
    Ok(out)
}

fn close_menu(document: &web::Document) {
    if let Ok(Some(menu)) = document.query_selector(MENU_SELECTOR) {
        dom::set_class(&menu, MENU_OPEN_CLASS, false);
    }
}

fn wire_anchor_links(w: &EventWiring) -> anyhow::Result<Vec<Listener>> {
    let mut out = Vec::new();
    for link in dom::query_all(&w.document, ANCHOR_SELECTOR) {
        let doc = w.document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        out.push(Listener::new(&link, "click", move |ev| {
            let Some(id) = style::anchor_target_id(&href) else {
                return;
            };
            if let Some(target) = doc.get_element_by_id(id) {
                ev.prevent_default();
                dom::smooth_scroll_to(&target);
                close_menu(&doc);
            }
        })?);
    }
    for el in dom::query_all(&w.document, SCROLL_TOP_SELECTOR) {
        let window = w.window.clone();
        out.push(Listener::new(&el, "click", move |ev| {
            ev.prevent_default();
            dom::smooth_scroll_top(&window);
        })?);
    }
    Ok(out)
}

fn wire_menu(w: &EventWiring) -> anyhow::Result<Vec<Listener>> {
    let mut out = Vec::new();
    for toggle in dom::query_all(&w.document, MENU_TOGGLE_SELECTOR) {
        let doc = w.document.clone();
        out.push(Listener::new(&toggle, "click", move |_ev| {
            if let Ok(Some(menu)) = doc.query_selector(MENU_SELECTOR) {
                _ = menu.class_list().toggle(MENU_OPEN_CLASS);
            }
        })?);
    }
    Ok(out)
}
