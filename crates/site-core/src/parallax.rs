//! Scroll-to-transform mapping for decorative background layers.
//!
//! Everything here is a pure function of the scroll offset. The front-end is
//! expected to ease toward the returned targets with a short CSS transition;
//! no smoothing happens on this side.

use crate::constants::{DRIFT_ANCHOR, DRIFT_FACTOR, ORB_SCALE_AMPLITUDE, ORB_SCALE_FREQUENCY};

/// Static description of one background orb.
///
/// Size and anchor are CSS lengths handed straight to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbConfig {
    pub size: String,
    pub color: String,
    pub top: String,
    pub left: String,
    /// Vertical travel per scroll unit. Negative values move against the scroll.
    pub speed: f64,
    /// Phase offset of the breathing scale, in radians.
    pub phase: f64,
}

impl OrbConfig {
    pub fn new(
        size: impl Into<String>,
        color: impl Into<String>,
        top: impl Into<String>,
        left: impl Into<String>,
        speed: f64,
        phase: f64,
    ) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            top: top.into(),
            left: left.into(),
            speed,
            phase,
        }
    }

    #[inline]
    pub fn transform_at(&self, offset: f64) -> OrbTransform {
        orb_transform(offset, self.speed, self.phase)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbTransform {
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for OrbTransform {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

#[inline]
pub fn orb_translate_y(offset: f64, speed: f64) -> f64 {
    offset * speed
}

/// Breathing scale in `[1 - amplitude, 1 + amplitude]`, periodic in 2000*pi.
#[inline]
pub fn orb_scale(offset: f64, phase: f64) -> f64 {
    1.0 + (offset * ORB_SCALE_FREQUENCY + phase).sin() * ORB_SCALE_AMPLITUDE
}

#[inline]
pub fn orb_transform(offset: f64, speed: f64, phase: f64) -> OrbTransform {
    OrbTransform {
        translate_y: orb_translate_y(offset, speed),
        scale: orb_scale(offset, phase),
    }
}

/// Horizontal slide of the oversized background headline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftConfig {
    pub anchor: f64,
    pub factor: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            anchor: DRIFT_ANCHOR,
            factor: DRIFT_FACTOR,
        }
    }
}

impl DriftConfig {
    /// Zero at `anchor`, moving right as the page scrolls past it.
    #[inline]
    pub fn translate_x(&self, offset: f64) -> f64 {
        (offset - self.anchor) * self.factor
    }
}
