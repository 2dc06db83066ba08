//! Once-only reveal tracking for entrance-animated elements.
//!
//! Each observed element starts pending. The first intersection report
//! moves it to revealed; later reports for the same element are ignored,
//! whatever the scroll direction.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Per-element reveal state, indexed in observation order.
#[derive(Debug, Default)]
pub struct RevealSet {
    states: Vec<RevealState>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Pending; count] }
    }

    /// Record an intersection report. Returns `true` only on the single
    /// pending→revealed transition; the caller then adds the class and
    /// stops observing the element.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.states.get_mut(index) {
            Some(state @ RevealState::Pending) => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

/// Observer root margin that pulls the bottom edge up by `bottom_px`.
#[must_use]
pub fn root_margin(bottom_px: f64) -> String {
    format!("0px 0px -{bottom_px}px 0px")
}
