//! Page writes to undo when the controller is dropped.
//!
//! Each effect records the elements it styles. On teardown the entries are
//! replayed in reverse, so a restart starts from the markup's own state
//! instead of stacking a second stylesheet or keeping stale classes.

#[cfg(test)]
#[path = "teardown_test.rs"]
mod teardown_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undo {
    /// Remove a class the controller may have added.
    Class(&'static str),
    /// Clear the inline `transform`.
    Transform,
    /// Detach an element the controller inserted.
    Remove,
}

#[derive(Debug)]
pub struct Teardown<E> {
    entries: Vec<(E, Undo)>,
}

impl<E> Default for Teardown<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E: PartialEq> Teardown<E> {
    /// Record `undo` for `element`. Duplicate pairs are kept once.
    pub fn track(&mut self, element: E, undo: Undo) {
        if !self.entries.iter().any(|(e, u)| *u == undo && *e == element) {
            self.entries.push((element, undo));
        }
    }

    /// Replay every entry, newest first, and forget them.
    pub fn run(&mut self, mut apply: impl FnMut(&E, Undo)) {
        while let Some((element, undo)) = self.entries.pop() {
            apply(&element, undo);
        }
    }
}
