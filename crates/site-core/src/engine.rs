//! Page-level interaction engine.
//!
//! One `ScrollEngine` lives for the lifetime of a mounted page. Front-ends
//! forward raw scroll, intersection and pointer input to it; the engine
//! computes target visual state and pushes it out through a [`VisualSink`].

use crate::constants::{default_orbs, DEFAULT_REVEAL_THRESHOLD, HEADER_GUARD_OFFSET};
use crate::cursor::CursorState;
use crate::header::{is_valid_offset, HeaderMonitor, HeaderVisibility, ScrollState};
use crate::parallax::{DriftConfig, OrbConfig, OrbTransform};
use crate::reveal::{ElementId, Reveal, VisibilityTracker};
use glam::Vec2;
use smallvec::SmallVec;

pub type Orbs = SmallVec<[OrbConfig; 4]>;

/// Presentation callbacks. Every method defaults to a no-op so a sink only
/// implements the outputs it renders.
pub trait VisualSink {
    fn reveal(&mut self, _reveal: Reveal) {}
    fn set_header_visible(&mut self, _visible: bool) {}
    fn set_orb_transform(&mut self, _index: usize, _transform: OrbTransform) {}
    fn set_drift(&mut self, _translate_x: f64) {}
    fn set_cursor(&mut self, _position: Vec2, _hovered: bool) {}
}

/// Sink that discards everything; handy when only the return values matter.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl VisualSink for NullSink {}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub header_guard: f64,
    pub default_threshold: f64,
    pub orbs: Orbs,
    pub drift: DriftConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            header_guard: HEADER_GUARD_OFFSET,
            default_threshold: DEFAULT_REVEAL_THRESHOLD,
            orbs: default_orbs().into_iter().collect(),
            drift: DriftConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineSnapshot {
    pub scroll: ScrollState,
    pub header: HeaderVisibility,
    pub orbs: SmallVec<[OrbTransform; 4]>,
    pub drift_x: f64,
    pub cursor: CursorState,
    pub pending_reveals: usize,
}

pub struct ScrollEngine {
    header: HeaderMonitor,
    tracker: VisibilityTracker,
    orbs: Orbs,
    drift: DriftConfig,
    cursor: CursorState,
    default_threshold: f64,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScrollEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            header: HeaderMonitor::new(config.header_guard),
            tracker: VisibilityTracker::new(),
            orbs: config.orbs,
            drift: config.drift,
            cursor: CursorState::default(),
            default_threshold: crate::reveal::clamp_threshold(config.default_threshold),
        }
    }

    #[inline]
    pub fn orbs(&self) -> &[OrbConfig] {
        &self.orbs
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.header.scroll()
    }

    #[inline]
    pub fn header(&self) -> HeaderVisibility {
        self.header.state()
    }

    #[inline]
    pub fn tracker(&self) -> &VisibilityTracker {
        &self.tracker
    }

    #[inline]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn register(&mut self, id: ElementId, threshold: f64) -> bool {
        self.tracker.register(id, threshold)
    }

    /// Register with the engine's default threshold.
    pub fn register_default(&mut self, id: ElementId, delay_ms: u32) -> bool {
        self.tracker
            .register_with_delay(id, self.default_threshold, delay_ms)
    }

    pub fn register_with_delay(&mut self, id: ElementId, threshold: f64, delay_ms: u32) -> bool {
        self.tracker.register_with_delay(id, threshold, delay_ms)
    }

    /// Register an element that is already showing, e.g. after a remount.
    pub fn register_revealed(&mut self, id: ElementId, threshold: f64) -> bool {
        self.tracker.register_revealed(id, threshold)
    }

    /// Push the complete current state to `sink`, e.g. right after mounting.
    pub fn sync(&self, sink: &mut impl VisualSink) {
        sink.set_header_visible(self.header.state().is_visible());
        self.emit_layers(sink);
        sink.set_cursor(self.cursor.position, self.cursor.hovered);
    }

    /// Adopt the host's current offset at mount. The header keeps its state;
    /// the first real scroll sample decides direction from here.
    pub fn seed(&mut self, offset: f64, sink: &mut impl VisualSink) -> bool {
        if !self.header.seed(offset) {
            log::debug!("[scroll] ignoring seed offset {}", offset);
            return false;
        }
        self.emit_layers(sink);
        true
    }

    /// Feed one scroll sample. Returns `false` when the sample was rejected.
    pub fn on_scroll(&mut self, offset: f64, sink: &mut impl VisualSink) -> bool {
        if !is_valid_offset(offset) {
            log::debug!("[scroll] ignoring offset {}", offset);
            return false;
        }
        if let Some(state) = self.header.update(offset) {
            sink.set_header_visible(state.is_visible());
        }
        self.emit_layers(sink);
        true
    }

    /// Feed one intersection report. A returned `Reveal` means the caller
    /// should stop observing the element.
    pub fn on_intersection(
        &mut self,
        id: ElementId,
        ratio: f64,
        sink: &mut impl VisualSink,
    ) -> Option<Reveal> {
        let reveal = self.tracker.on_intersection(id, ratio)?;
        sink.reveal(reveal);
        Some(reveal)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, sink: &mut impl VisualSink) {
        if self.cursor.move_to(x, y) {
            sink.set_cursor(self.cursor.position, self.cursor.hovered);
        }
    }

    pub fn on_hover(&mut self, entered: bool, sink: &mut impl VisualSink) {
        if self.cursor.set_hovered(entered) {
            sink.set_cursor(self.cursor.position, self.cursor.hovered);
        }
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let scroll = self.header.scroll();
        let offset = scroll.offset;
        EngineSnapshot {
            scroll,
            header: self.header.state(),
            orbs: self.orbs.iter().map(|o| o.transform_at(offset)).collect(),
            drift_x: self.drift.translate_x(offset),
            cursor: self.cursor,
            pending_reveals: self.tracker.pending().len(),
        }
    }

    fn emit_layers(&self, sink: &mut impl VisualSink) {
        let offset = self.header.scroll().offset;
        for (i, orb) in self.orbs.iter().enumerate() {
            sink.set_orb_transform(i, orb.transform_at(offset));
        }
        sink.set_drift(self.drift.translate_x(offset));
    }
}
