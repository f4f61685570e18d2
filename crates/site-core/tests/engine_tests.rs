// Host-side tests for the engine and its sink output.

use glam::Vec2;
use site_core::{
    DriftConfig, ElementId, EngineConfig, HeaderVisibility, NullSink, OrbConfig, OrbTransform,
    Reveal, ScrollDirection, ScrollEngine, VisualSink,
};

#[derive(Default)]
struct Recorder {
    reveals: Vec<Reveal>,
    header: Vec<bool>,
    orbs: Vec<(usize, OrbTransform)>,
    drift: Vec<f64>,
    cursor: Vec<(Vec2, bool)>,
}

impl VisualSink for Recorder {
    fn reveal(&mut self, reveal: Reveal) {
        self.reveals.push(reveal);
    }
    fn set_header_visible(&mut self, visible: bool) {
        self.header.push(visible);
    }
    fn set_orb_transform(&mut self, index: usize, transform: OrbTransform) {
        self.orbs.push((index, transform));
    }
    fn set_drift(&mut self, translate_x: f64) {
        self.drift.push(translate_x);
    }
    fn set_cursor(&mut self, position: Vec2, hovered: bool) {
        self.cursor.push((position, hovered));
    }
}

fn single_orb_engine() -> ScrollEngine {
    let mut config = EngineConfig::default();
    config.orbs.clear();
    config
        .orbs
        .push(OrbConfig::new("40vw", "#E0F2FE", "-10%", "-10%", -0.1, 0.0));
    ScrollEngine::new(config)
}

#[test]
fn default_engine_uses_page_orbs() {
    let engine = ScrollEngine::default();
    assert_eq!(engine.orbs().len(), 3);
    assert_eq!(engine.header(), HeaderVisibility::Visible);
    assert_eq!(engine.scroll().offset, 0.0);
}

#[test]
fn scroll_updates_every_orb_and_drift() {
    let mut engine = ScrollEngine::default();
    let mut rec = Recorder::default();
    assert!(engine.on_scroll(1000.0, &mut rec));
    let indices: Vec<usize> = rec.orbs.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!((rec.orbs[0].1.translate_y + 100.0).abs() < 1e-9);
    assert!((rec.orbs[1].1.translate_y - 50.0).abs() < 1e-9);
    assert_eq!(rec.drift.len(), 1);
    assert!((rec.drift[0] + 100.0).abs() < 1e-9);
}

#[test]
fn header_output_only_on_transition() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    for o in [0.0, 50.0, 150.0, 200.0, 180.0, 90.0] {
        engine.on_scroll(o, &mut rec);
    }
    assert_eq!(rec.header, vec![false, true]);
    assert_eq!(rec.orbs.len(), 6);
}

#[test]
fn rejected_offsets_emit_nothing() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    engine.on_scroll(300.0, &mut rec);
    let before = rec.orbs.len();
    assert!(!engine.on_scroll(-1.0, &mut rec));
    assert!(!engine.on_scroll(f64::NAN, &mut rec));
    assert_eq!(rec.orbs.len(), before);
    assert_eq!(engine.scroll().offset, 300.0);
    assert_eq!(engine.header(), HeaderVisibility::Hidden);
}

#[test]
fn scroll_state_direction() {
    let mut engine = single_orb_engine();
    engine.on_scroll(10.0, &mut NullSink);
    assert_eq!(engine.scroll().direction, ScrollDirection::Down);
    engine.on_scroll(5.0, &mut NullSink);
    assert_eq!(engine.scroll().direction, ScrollDirection::Up);
    assert_eq!(engine.scroll().last_offset, 10.0);
}

#[test]
fn reveal_reaches_sink_once() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    let id = ElementId(11);
    engine.register(id, 0.15);
    assert!(engine.on_intersection(id, 0.05, &mut rec).is_none());
    assert!(engine.on_intersection(id, 0.2, &mut rec).is_some());
    assert!(engine.on_intersection(id, 0.0, &mut rec).is_none());
    assert!(engine.on_intersection(id, 0.9, &mut rec).is_none());
    assert_eq!(rec.reveals, vec![Reveal { id, delay_ms: 0 }]);
}

#[test]
fn register_default_uses_config_threshold() {
    let mut config = EngineConfig::default();
    config.default_threshold = 0.5;
    let mut engine = ScrollEngine::new(config);
    engine.register_default(ElementId(1), 300);
    let el = engine.tracker().get(ElementId(1)).copied();
    assert_eq!(el.map(|e| (e.threshold, e.delay_ms)), Some((0.5, 300)));
    assert!(engine.on_intersection(ElementId(1), 0.4, &mut NullSink).is_none());
    assert!(engine.on_intersection(ElementId(1), 0.6, &mut NullSink).is_some());
}

#[test]
fn cursor_follows_pointer_and_hover() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    engine.on_pointer_move(10.0, 20.0, &mut rec);
    engine.on_pointer_move(10.0, 20.0, &mut rec);
    engine.on_hover(true, &mut rec);
    engine.on_hover(true, &mut rec);
    engine.on_hover(false, &mut rec);
    assert_eq!(
        rec.cursor,
        vec![
            (Vec2::new(10.0, 20.0), false),
            (Vec2::new(10.0, 20.0), true),
            (Vec2::new(10.0, 20.0), false),
        ]
    );
}

#[test]
fn sync_pushes_full_state() {
    let mut engine = ScrollEngine::default();
    engine.on_scroll(2500.0, &mut NullSink);
    let mut rec = Recorder::default();
    engine.sync(&mut rec);
    assert_eq!(rec.header, vec![false]);
    assert_eq!(rec.orbs.len(), 3);
    assert!((rec.drift[0] - 50.0).abs() < 1e-9);
    assert_eq!(rec.cursor.len(), 1);
}

#[test]
fn snapshot_reflects_state() {
    let mut config = EngineConfig::default();
    config.drift = DriftConfig {
        anchor: 0.0,
        factor: 1.0,
    };
    let mut engine = ScrollEngine::new(config);
    engine.register(ElementId(1), 0.1);
    engine.register(ElementId(2), 0.1);
    engine.on_intersection(ElementId(1), 1.0, &mut NullSink);
    engine.on_scroll(1000.0, &mut NullSink);

    let snap = engine.snapshot();
    assert_eq!(snap.header, HeaderVisibility::Hidden);
    assert_eq!(snap.orbs.len(), 3);
    assert!((snap.orbs[0].translate_y + 100.0).abs() < 1e-9);
    assert_eq!(snap.drift_x, 1000.0);
    assert_eq!(snap.pending_reveals, 1);
}

#[test]
fn remounted_revealed_element_is_not_revealed_again() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    assert!(engine.register_revealed(ElementId(0), 0.1));
    assert!(engine.register_default(ElementId(1), 0));
    assert!(engine.on_intersection(ElementId(0), 1.0, &mut rec).is_none());
    assert!(engine.on_intersection(ElementId(1), 1.0, &mut rec).is_some());
    assert_eq!(
        rec.reveals,
        vec![Reveal {
            id: ElementId(1),
            delay_ms: 0
        }]
    );
    assert_eq!(engine.snapshot().pending_reveals, 0);
}

#[test]
fn seeded_mid_page_keeps_header_visible() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    assert!(engine.seed(500.0, &mut rec));
    assert_eq!(engine.header(), HeaderVisibility::Visible);
    assert!(rec.header.is_empty());
    assert_eq!(engine.scroll().offset, 500.0);
    assert_eq!(engine.scroll().direction, ScrollDirection::None);
    // Layers are positioned for the restored offset.
    assert!((rec.orbs[0].1.translate_y + 50.0).abs() < 1e-9);
    assert_eq!(rec.drift.len(), 1);

    engine.on_scroll(600.0, &mut rec);
    assert_eq!(engine.header(), HeaderVisibility::Hidden);
    engine.on_scroll(400.0, &mut rec);
    assert_eq!(engine.header(), HeaderVisibility::Visible);
    assert_eq!(rec.header, vec![false, true]);
}

#[test]
fn rejected_seed_changes_nothing() {
    let mut engine = single_orb_engine();
    let mut rec = Recorder::default();
    engine.on_scroll(300.0, &mut rec);
    let orbs = rec.orbs.len();
    assert!(!engine.seed(f64::NAN, &mut rec));
    assert!(!engine.seed(-10.0, &mut rec));
    assert_eq!(rec.orbs.len(), orbs);
    assert_eq!(engine.scroll().offset, 300.0);
}

#[test]
fn snapshot_scroll_matches_header_scroll() {
    let mut engine = single_orb_engine();
    engine.on_scroll(250.0, &mut NullSink);
    engine.on_scroll(180.0, &mut NullSink);
    let snap = engine.snapshot();
    assert_eq!(snap.scroll, engine.scroll());
    assert_eq!(snap.scroll.last_offset, 250.0);
    assert_eq!(snap.header, HeaderVisibility::Visible);
}
