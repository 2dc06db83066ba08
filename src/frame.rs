//! At-most-one-pending visual update per animation frame.
//!
//! [`FrameGate`] is the bare in-flight flag used by parallax: requests made
//! while a frame is already scheduled are dropped. [`FrameSlot`] adds a
//! payload for tilt, where the latest request overwrites the pending value
//! and a cancel discards it before the frame runs.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller must schedule a frame; `false` if one
    /// is already pending and this request merges into it.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as run (or as failed to schedule).
    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[derive(Debug)]
pub struct FrameSlot<T> {
    gate: FrameGate,
    value: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { gate: FrameGate::default(), value: None }
    }
}

impl<T> FrameSlot<T> {
    /// Store `value` for the next frame, replacing any pending value.
    /// Returns `true` if the caller must schedule a frame.
    pub fn put(&mut self, value: T) -> bool {
        self.value = Some(value);
        self.gate.request()
    }

    /// Drop the pending value. A frame already scheduled will find nothing
    /// to apply.
    pub fn cancel(&mut self) {
        self.value = None;
    }

    /// Called from the frame callback: closes the gate and hands back the
    /// value to apply, if one survived.
    pub fn take(&mut self) -> Option<T> {
        self.gate.complete();
        self.value.take()
    }
}
