//! Fixed DOM contract and default numeric thresholds.

// ── Element IDs ─────────────────────────────────────────────────

pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_NAV: &str = "nav";
pub const ID_NAV_TOGGLE: &str = "nav-toggle";
pub const ID_MOBILE_MENU: &str = "mobile-menu";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_MOBILE_LINKS: &str = ".mobile-links a";
pub const SEL_ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const SEL_REVEAL: &str = ".fade-up, .stagger-children";
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_NAV_LINKS: &str = ".nav-links a:not(.theme-toggle)";
pub const SEL_TILT_CARDS: &str = ".bento-card, .project-card, .skill-category, .contact-card";
pub const SEL_SECTION_TITLES: &str = ".section-title";

/// Fixed parallax targets in table order, with their speed factors.
pub const PARALLAX_FIXED: [(&str, f64); 4] = [
    (".hero-content", 0.2),
    (".hero-image", 0.4),
    (".bento-grid", 0.05),
    (".projects-grid", 0.05),
];

/// Speed factor applied to every `.section-title`.
pub const PARALLAX_SECTION_TITLE_SPEED: f64 = 0.1;

// ── Classes and attributes ──────────────────────────────────────

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";

/// Cards that own a tilt transform and must never be parallaxed.
pub const PARALLAX_EXCLUDED_CLASSES: [&str; 2] = ["project-card", "bento-card"];

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Thresholds ──────────────────────────────────────────────────

/// Scroll offset (px) past which the nav bar gets `scrolled`.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// A section counts as current once its top is within this many px above the scroll position.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 150.0;

/// Divisor turning cursor offset (px) into tilt degrees.
pub const TILT_DAMPING: f64 = 20.0;

/// Upward lift applied while a card is tilted.
pub const TILT_LIFT_PX: f64 = 4.0;

pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

/// Viewport widths at or below this disable parallax.
pub const PARALLAX_MIN_WIDTH_PX: f64 = 768.0;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom root margin shrink for the reveal observer.
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
