use std::io::Read;

use anyhow::Context;
use glam::Vec2;
use site_core::trace::{parse_trace, replay};
use site_core::{OrbTransform, Reveal, ScrollEngine, VisualSink};

/// Logs every visual change the engine asks for, the way the browser sink
/// would apply it.
#[derive(Default)]
struct LogSink {
    reveals: usize,
    header_updates: usize,
    // Last transform per orb; only changes are logged.
    orbs: Vec<Option<OrbTransform>>,
}

impl VisualSink for LogSink {
    fn reveal(&mut self, reveal: Reveal) {
        self.reveals += 1;
        log::info!("[reveal] {} (delay {}ms)", reveal.id, reveal.delay_ms);
    }

    fn set_header_visible(&mut self, visible: bool) {
        self.header_updates += 1;
        log::info!("[header] {}", if visible { "shown" } else { "hidden" });
    }

    fn set_orb_transform(&mut self, index: usize, transform: OrbTransform) {
        if self.orbs.len() <= index {
            self.orbs.resize(index + 1, None);
        }
        if self.orbs[index] == Some(transform) {
            return;
        }
        self.orbs[index] = Some(transform);
        log::debug!(
            "[orb {}] translateY={:.2} scale={:.4}",
            index,
            transform.translate_y,
            transform.scale
        );
    }

    fn set_drift(&mut self, translate_x: f64) {
        log::trace!("[drift] translateX={:.2}", translate_x);
    }

    fn set_cursor(&mut self, position: Vec2, hovered: bool) {
        log::debug!(
            "[cursor] ({:.0},{:.0}){}",
            position.x,
            position.y,
            if hovered { " hovered" } else { "" }
        );
    }
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading trace from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading trace {}", p)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = std::env::args().nth(1);
    let input = read_input(path.as_deref())?;
    let events = parse_trace(&input)?;
    log::info!("replaying {} events", events.len());

    let mut engine = ScrollEngine::default();
    let mut sink = LogSink::default();
    engine.sync(&mut sink);
    replay(&mut engine, &events, &mut sink);

    let snap = engine.snapshot();
    log::info!(
        "done: offset={:.0} header={:?} reveals={} header_updates={} pending={}",
        snap.scroll.offset,
        snap.header,
        sink.reveals,
        sink.header_updates,
        snap.pending_reveals
    );
    for (i, orb) in snap.orbs.iter().enumerate() {
        log::info!(
            "orb {}: translateY={:.2} scale={:.4}",
            i,
            orb.translate_y,
            orb.scale
        );
    }
    Ok(())
}
