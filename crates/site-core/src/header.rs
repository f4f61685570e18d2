//! Hide-on-scroll header.
//!
//! The header hides while the page scrolls down past a guard offset and
//! reappears on any upward movement or once the page is back near the top.
//! Direction is decided from a single pair of samples; there is no debounce.

use crate::constants::HEADER_GUARD_OFFSET;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVisibility {
    #[default]
    Visible,
    Hidden,
}

impl HeaderVisibility {
    #[inline]
    pub fn is_visible(self) -> bool {
        self == HeaderVisibility::Visible
    }
}

/// Latest accepted scroll sample and the one before it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub last_offset: f64,
    pub direction: ScrollDirection,
}

impl ScrollState {
    /// Accept a new offset. Negative or non-finite samples are dropped and
    /// `false` is returned.
    pub fn advance(&mut self, offset: f64) -> bool {
        if !is_valid_offset(offset) {
            return false;
        }
        self.last_offset = self.offset;
        self.offset = offset;
        self.direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else if offset < self.last_offset {
            ScrollDirection::Up
        } else {
            ScrollDirection::None
        };
        true
    }
}

#[inline]
pub fn is_valid_offset(offset: f64) -> bool {
    offset.is_finite() && offset >= 0.0
}

/// Owns the page's single `ScrollState`; parallax reads it through
/// [`HeaderMonitor::scroll`].
#[derive(Clone, Debug)]
pub struct HeaderMonitor {
    guard: f64,
    scroll: ScrollState,
    state: HeaderVisibility,
}

impl Default for HeaderMonitor {
    fn default() -> Self {
        Self::new(HEADER_GUARD_OFFSET)
    }
}

impl HeaderMonitor {
    pub fn new(guard: f64) -> Self {
        let guard = if guard.is_finite() { guard.max(0.0) } else { HEADER_GUARD_OFFSET };
        Self {
            guard,
            scroll: ScrollState::default(),
            state: HeaderVisibility::Visible,
        }
    }

    #[inline]
    pub fn guard(&self) -> f64 {
        self.guard
    }

    #[inline]
    pub fn state(&self) -> HeaderVisibility {
        self.state
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Adopt `offset` as the starting position without evaluating the
    /// header rules, e.g. for a page restored mid-scroll. Returns `false`
    /// for rejected samples.
    pub fn seed(&mut self, offset: f64) -> bool {
        if !is_valid_offset(offset) {
            return false;
        }
        self.scroll = ScrollState {
            offset,
            last_offset: offset,
            direction: ScrollDirection::None,
        };
        true
    }

    /// Feed one scroll sample. Returns the new state if it changed.
    pub fn update(&mut self, offset: f64) -> Option<HeaderVisibility> {
        // The previous sample is kept even when the guard wins, so scrolling
        // down again from near the top re-hides once the guard is passed.
        if !self.scroll.advance(offset) {
            return None;
        }
        let next = if offset <= self.guard {
            HeaderVisibility::Visible
        } else {
            match self.scroll.direction {
                ScrollDirection::Down => HeaderVisibility::Hidden,
                ScrollDirection::Up => HeaderVisibility::Visible,
                ScrollDirection::None => self.state,
            }
        };
        if next == self.state {
            return None;
        }
        log::debug!("[header] {:?} -> {:?} at offset {:.1}", self.state, next, offset);
        self.state = next;
        Some(next)
    }
}
