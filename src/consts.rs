//! Shared constants for the page behavior crate.

// ── Element lookups ─────────────────────────────────────────────

pub const PRELOADER_ID: &str = "preloader";
pub const HEADER_ID: &str = "header";
pub const PARTICLE_CANVAS_ID: &str = "particleCanvas";
pub const CONFIG_SCRIPT_ID: &str = "site-config";

pub const MOBILE_MENU_BTN_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const MOBILE_NAV_SELECTOR: &str = ".mobile-nav";
pub const MOBILE_NAV_TOGGLE_SELECTOR: &str = ".mobile-nav-toggle";
pub const MOBILE_NAV_MENU_SELECTOR: &str = ".mobile-nav-menu";
pub const MOBILE_NAV_LINK_SELECTOR: &str = ".mobile-nav-menu a";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ICON_SELECTOR: &str = "i";

// ── State classes ───────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_LOADING: &str = "loading";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_KEYBOARD_NAV: &str = "keyboard-nav";
pub const CLASS_ICON_BARS: &str = "fa-bars";
pub const CLASS_ICON_CLOSE: &str = "fa-times";

// ── Scrolling ───────────────────────────────────────────────────

/// Vertical scroll past which the header switches to its compact style.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

/// Extra distance below the header line used when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Bottom shrinkage of the viewport used for reveal intersection.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Media queries ───────────────────────────────────────────────

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Particles ───────────────────────────────────────────────────

/// Per-frame chance of spawning one particle while below the cap.
pub const PARTICLE_SPAWN_CHANCE: f64 = 0.05;

/// Multiplicative opacity decay applied once per frame.
pub const PARTICLE_OPACITY_DECAY: f64 = 0.995;

/// Opacity at or below which a particle is retired.
pub const PARTICLE_MIN_OPACITY: f64 = 0.01;

/// How far outside the canvas a particle may drift before it is retired.
pub const PARTICLE_BOUNDS_MARGIN: f64 = 10.0;

/// Largest per-axis speed, in pixels per frame.
pub const PARTICLE_MAX_SPEED: f64 = 0.25;

pub const PARTICLE_MIN_RADIUS: f64 = 1.0;
pub const PARTICLE_MAX_RADIUS: f64 = 3.0;
pub const PARTICLE_MIN_START_OPACITY: f64 = 0.2;
pub const PARTICLE_MAX_START_OPACITY: f64 = 0.7;

pub const PARTICLE_GREEN: &str = "#00ff41";
pub const PARTICLE_CYAN: &str = "#00e6ff";
