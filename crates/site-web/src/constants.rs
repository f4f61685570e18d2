// DOM hooks the front-end looks for. Markup only needs to carry these
// selectors and classes.

pub const HEADER_SELECTOR: &str = ".header";
pub const HEADER_HIDDEN_CLASS: &str = "is-hidden";

// Reveal targets. Legacy classes use the older, stricter threshold.
pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const LEGACY_REVEAL_SELECTOR: &str = ".fade-up, .reveal-mask";
pub const REVEALED_CLASS: &str = "is-visible";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";
pub const REVEAL_THRESHOLD_ATTR: &str = "data-reveal-threshold";
// Direct `[data-reveal]` children of this container are delayed by position.
pub const REVEAL_STAGGER_ATTR: &str = "data-reveal-stagger";
pub const STAGGER_ITEM_SELECTOR: &str = ":scope > [data-reveal]";

pub const ORB_SELECTOR: &str = ".orb";
pub const ORB_CLASS: &str = "orb";
pub const ORB_LAYER_SELECTOR: &str = "[data-orb-layer]";
pub const DRIFT_SELECTOR: &str = "[data-drift]";

pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const CURSOR_HOVER_CLASS: &str = "hovered";
pub const HOVER_TARGET_SELECTOR: &str = "a, button, [data-hover]";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SCROLL_TOP_SELECTOR: &str = "[data-scroll-top]";
pub const MENU_SELECTOR: &str = ".mobile-menu";
pub const MENU_TOGGLE_SELECTOR: &str = "[data-menu-toggle]";
pub const MENU_OPEN_CLASS: &str = "is-open";
