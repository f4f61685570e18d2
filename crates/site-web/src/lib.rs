#![cfg(target_arch = "wasm32")]
use site_core::{EngineConfig, OrbConfig, ScrollEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod listeners;
mod observer;
mod sink;
mod style;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Everything installed for one mounted page. Dropping it removes every
/// listener and disconnects the reveal observer.
struct Page {
    engine: Rc<RefCell<ScrollEngine>>,
    _listeners: Vec<listeners::Listener>,
    _observer: observer::RevealObserver,
}

impl Drop for Page {
    fn drop(&mut self) {
        let snap = self.engine.borrow().snapshot();
        log::info!(
            "[page] unmounted at offset {:.0}, {} reveal(s) never triggered",
            snap.scroll.offset,
            snap.pending_reveals
        );
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
    if let Err(e) = mount_page() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear down the current page, if any.
#[wasm_bindgen]
pub fn unmount() {
    PAGE.with(|p| p.borrow_mut().take());
}

/// Unmount and mount again against the current document, e.g. after the
/// host swapped the page content.
#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    unmount();
    mount_page().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

fn mount_page() -> anyhow::Result<()> {
    let page = init()?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

fn init() -> anyhow::Result<Page> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = EngineConfig::default();
    ensure_orbs(&document, &config.orbs)?;
    let engine = Rc::new(RefCell::new(ScrollEngine::new(config)));
    let sink = Rc::new(RefCell::new(sink::DomSink::new(&document)));
    if sink.borrow().orb_count() != engine.borrow().orbs().len() {
        log::warn!(
            "[orbs] markup has {} orbs, engine drives {}",
            sink.borrow().orb_count(),
            engine.borrow().orbs().len()
        );
    }

    let observer = observer::RevealObserver::mount(&document, engine.clone(), sink.clone())?;
    let wiring = events::EventWiring {
        window: window.clone(),
        document,
        engine: engine.clone(),
        sink: sink.clone(),
    };
    let listeners = events::wire_all(&wiring)?;

    // Pages restored mid-scroll start from their offset with the header shown.
    {
        let mut eng = engine.borrow_mut();
        let mut sk = sink.borrow_mut();
        eng.seed(dom::scroll_offset(&window), &mut *sk);
        eng.sync(&mut *sk);
    }
    log::info!("[page] mounted with {} listeners", listeners.len());

    Ok(Page {
        engine,
        _listeners: listeners,
        _observer: observer,
    })
}

/// Create the decorative orbs from config when the markup provides an empty
/// `[data-orb-layer]` container.
fn ensure_orbs(document: &web::Document, orbs: &[OrbConfig]) -> anyhow::Result<()> {
    let Ok(Some(layer)) = document.query_selector(constants::ORB_LAYER_SELECTOR) else {
        return Ok(());
    };
    if !dom::query_all(document, constants::ORB_SELECTOR).is_empty() {
        return Ok(());
    }
    for orb in orbs {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(constants::ORB_CLASS);
        el.set_attribute("style", &style::orb_base_css(orb))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}
