//! Navigation bar state: the scrolled marker, the mobile menu, and the
//! active-section link.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether the nav bar should carry the `scrolled` class. Strictly greater
/// than the threshold; there is no hysteresis.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Open/closed state shared by the mobile menu and its toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Start from the open state the markup already shows.
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A page section as seen by the active-link tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPos<'a> {
    pub id: &'a str,
    /// Offset of the section's top edge from the top of the page.
    pub top: f64,
}

/// The id of the last section, in document order, whose top is at most
/// `offset` px below the scroll position.
#[must_use]
pub fn current_section<'a>(sections: &[SectionPos<'a>], scroll_y: f64, offset: f64) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .map(|section| section.id)
}

/// Whether a nav link with `href` points at the current section.
///
/// With no current section the expected href is a bare `#`, so a link to
/// the page top lights up until the first section is reached.
#[must_use]
pub fn link_is_active(href: Option<&str>, current: Option<&str>) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(current.unwrap_or(""))
}

/// Active flags for every link, in the order given.
#[must_use]
pub fn active_flags(hrefs: &[Option<&str>], current: Option<&str>) -> Vec<bool> {
    hrefs.iter().map(|href| link_is_active(*href, current)).collect()
}
