//! In-page anchor handling for smooth scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// The element id an in-page link points at.
///
/// `None` for links that are not fragment-only or that name nothing
/// (a bare `#`). Percent-encoding is left as written.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
