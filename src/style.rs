//! Stylesheet injected at start-up for the mobile menu toggle animation.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Morphs the three toggle bars into an X while the menu is open.
pub const NAV_TOGGLE_CSS: &str = "
    .nav-toggle.active span:nth-child(1) {
        transform: rotate(45deg) translate(4px, 4px);
    }
    .nav-toggle.active span:nth-child(2) {
        opacity: 0;
    }
    .nav-toggle.active span:nth-child(3) {
        transform: rotate(-45deg) translate(4px, -4px);
    }
";
