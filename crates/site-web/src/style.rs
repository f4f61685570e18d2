// Pure formatting/parsing helpers between engine values and DOM strings.
// Kept free of web-sys so they can be tested on the host.

use site_core::{stagger_delay_ms, OrbConfig, OrbTransform};

/// Static placement of an orb; the transform is applied separately per scroll.
pub fn orb_base_css(orb: &OrbConfig) -> String {
    format!(
        "width:{size};height:{size};background-color:{};top:{};left:{}",
        orb.color,
        orb.top,
        orb.left,
        size = orb.size
    )
}

#[inline]
pub fn orb_transform_css(t: &OrbTransform) -> String {
    format!("translateY({:.2}px) scale({:.4})", t.translate_y, t.scale)
}

#[inline]
pub fn drift_transform_css(translate_x: f64) -> String {
    format!("translate(-50%, -50%) translateX({:.2}px)", translate_x)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

#[inline]
pub fn transition_delay_css(delay_ms: u32) -> String {
    format!("{}ms", delay_ms)
}

/// Id for the reveal target stored at `index`; `None` once ids run out.
#[inline]
pub fn reveal_id(index: usize) -> Option<u32> {
    u32::try_from(index).ok()
}

/// Reveal delay for one target. A well-formed `data-reveal-delay` wins, then
/// the element's position inside a stagger container; otherwise no delay.
pub fn reveal_delay_ms(explicit: Option<&str>, stagger_index: Option<usize>) -> u32 {
    explicit
        .and_then(|v| v.trim().parse::<u32>().ok())
        .or_else(|| stagger_index.map(stagger_delay_ms))
        .unwrap_or(0)
}

/// Missing or malformed thresholds fall back to `default`.
pub fn parse_threshold_attr(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
        .unwrap_or(default)
}

/// `"#contact"` -> `Some("contact")`; bare `"#"` and non-fragment links -> `None`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
