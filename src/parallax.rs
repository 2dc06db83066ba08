//! Scroll-coupled vertical displacement for decorative page blocks.
//!
//! Each target moves at `speed` times its distance from the viewport's
//! vertical center, in the opposite direction. Targets outside the viewport
//! are left alone, and the whole effect is off on narrow viewports.
//! Hoverable cards are never moved here since their tilt owns the same
//! `transform` property.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Scroll position and inner size of the window, in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// An element's client-space vertical extent at frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone)]
pub struct ParallaxTarget<E> {
    pub element: E,
    pub speed: f64,
    /// Set for elements that carry their own tilt transform.
    pub excluded: bool,
}

#[derive(Debug, Clone)]
pub struct ParallaxTable<E> {
    targets: Vec<ParallaxTarget<E>>,
    min_width: f64,
}

/// Whether parallax runs at this viewport width.
#[must_use]
pub fn parallax_enabled(width: f64, min_width: f64) -> bool {
    width > min_width
}

/// Displacement in px for an element whose top sits at `page_top`.
#[must_use]
pub fn displacement(scroll_y: f64, page_top: f64, viewport_height: f64, speed: f64) -> f64 {
    -((scroll_y - page_top + viewport_height / 2.0) * speed)
}

#[must_use]
pub fn translate(offset: f64) -> String {
    format!("translate3d(0, {offset}px, 0)")
}

impl<E> ParallaxTable<E> {
    #[must_use]
    pub fn new(min_width: f64) -> Self {
        Self { targets: Vec::new(), min_width }
    }

    pub fn push(&mut self, element: E, speed: f64, excluded: bool) {
        self.targets.push(ParallaxTarget { element, speed, excluded });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Transforms to write this frame, as `(element, transform)` pairs.
    ///
    /// `extent_of` is asked for the client-space extent of each candidate.
    pub fn updates(&self, viewport: Viewport, mut extent_of: impl FnMut(&E) -> Extent) -> Vec<(&E, String)> {
        if !parallax_enabled(viewport.width, self.min_width) {
            return Vec::new();
        }
        let mut out = Vec::new();
        for target in &self.targets {
            let extent = extent_of(&target.element);
            if extent.top >= viewport.height || extent.bottom <= 0.0 {
                continue;
            }
            if target.excluded {
                continue;
            }
            let page_top = extent.top + viewport.scroll_y;
            let offset = displacement(viewport.scroll_y, page_top, viewport.height, target.speed);
            out.push((&target.element, translate(offset)));
        }
        out
    }
}
