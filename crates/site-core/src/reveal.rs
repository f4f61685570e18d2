//! One-way reveal latches for scroll-in content.
//!
//! Each registered element starts hidden and is revealed the first time an
//! intersection report reaches its threshold. A revealed element is dropped
//! from observation and never reverts.

use crate::constants::DEFAULT_REVEAL_THRESHOLD;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedElement {
    pub id: ElementId,
    pub threshold: f64,
    pub delay_ms: u32,
    pub revealed: bool,
}

/// Emitted exactly once per element, when its latch flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub id: ElementId,
    pub delay_ms: u32,
}

/// Clamp a requested threshold into `[0, 1]`.
///
/// Non-finite input falls back to the default reveal threshold.
pub fn clamp_threshold(threshold: f64) -> f64 {
    if !threshold.is_finite() {
        log::warn!(
            "[reveal] non-finite threshold {}; using {}",
            threshold,
            DEFAULT_REVEAL_THRESHOLD
        );
        return DEFAULT_REVEAL_THRESHOLD;
    }
    let clamped = threshold.clamp(0.0, 1.0);
    if clamped != threshold {
        log::warn!("[reveal] threshold {} clamped to {}", threshold, clamped);
    }
    clamped
}

#[derive(Debug, Default)]
pub struct VisibilityTracker {
    elements: FnvHashMap<ElementId, TrackedElement>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the element was already registered.
    pub fn register(&mut self, id: ElementId, threshold: f64) -> bool {
        self.register_with_delay(id, threshold, 0)
    }

    pub fn register_with_delay(&mut self, id: ElementId, threshold: f64, delay_ms: u32) -> bool {
        self.insert(id, threshold, delay_ms, false)
    }

    /// Register `id` with its latch already set. No notification is ever
    /// produced for it. Returns `false` if the element was already registered.
    pub fn register_revealed(&mut self, id: ElementId, threshold: f64) -> bool {
        self.insert(id, threshold, 0, true)
    }

    fn insert(&mut self, id: ElementId, threshold: f64, delay_ms: u32, revealed: bool) -> bool {
        if self.elements.contains_key(&id) {
            return false;
        }
        let threshold = clamp_threshold(threshold);
        self.elements.insert(
            id,
            TrackedElement {
                id,
                threshold,
                delay_ms,
                revealed,
            },
        );
        true
    }

    /// Report an intersection ratio for `id`.
    ///
    /// Unknown and already revealed elements are ignored, as are ratios that
    /// are not a number.
    pub fn on_intersection(&mut self, id: ElementId, ratio: f64) -> Option<Reveal> {
        let el = self.elements.get_mut(&id)?;
        if el.revealed || ratio.is_nan() || ratio < el.threshold {
            return None;
        }
        el.revealed = true;
        log::debug!("[reveal] {} at ratio {:.2}", id, ratio);
        Some(Reveal {
            id,
            delay_ms: el.delay_ms,
        })
    }

    /// Boolean form of [`Self::on_intersection`] for hosts that only report
    /// whether the element is intersecting.
    pub fn on_intersecting(&mut self, id: ElementId, intersecting: bool) -> Option<Reveal> {
        self.on_intersection(id, if intersecting { 1.0 } else { 0.0 })
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&TrackedElement> {
        self.elements.get(&id)
    }

    #[inline]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.revealed)
    }

    /// Registered and still waiting for its reveal.
    #[inline]
    pub fn is_observed(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| !e.revealed)
    }

    /// Ids still under observation, in ascending order.
    pub fn pending(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .elements
            .values()
            .filter(|e| !e.revealed)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
