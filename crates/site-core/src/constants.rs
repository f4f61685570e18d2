use crate::parallax::OrbConfig;

// Shared tuning constants used by both web and native front-ends.

// Header
pub const HEADER_GUARD_OFFSET: f64 = 100.0; // header is always shown at or above this offset

// Reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1; // intersection ratio that triggers a reveal
pub const LEGACY_REVEAL_THRESHOLD: f64 = 0.15; // `.fade-up` / `.reveal-mask` markup
pub const REVEAL_STAGGER_MS: u32 = 100; // per-item delay for staggered lists

// Orbs
pub const ORB_SCALE_FREQUENCY: f64 = 0.001; // radians per scroll unit
pub const ORB_SCALE_AMPLITUDE: f64 = 0.1; // scale swings within 1 +/- amplitude

// Background headline drift
pub const DRIFT_ANCHOR: f64 = 2000.0; // offset at which the headline is centred
pub const DRIFT_FACTOR: f64 = 0.1;

/// The three decorative orbs behind the page, back to front.
pub fn default_orbs() -> [OrbConfig; 3] {
    [
        OrbConfig::new("40vw", "#E0F2FE", "-10%", "-10%", -0.1, 0.0),
        OrbConfig::new("35vw", "#F0F9FF", "40%", "60%", 0.05, 2.0),
        OrbConfig::new("25vw", "#E0F7FA", "80%", "10%", -0.08, 4.0),
    ]
}

/// Transition delay for the `index`-th item of a staggered list.
#[inline]
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}
