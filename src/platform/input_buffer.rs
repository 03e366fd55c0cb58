//=========================================================================
// Input Buffer
//=========================================================================
//
// Per-frame accumulator between winit callbacks and the frame driver.
//
// - discrete: key and button events, arrival order, consecutive
//   duplicates dropped (key repeat)
// - continuous: cursor movement, only the latest position kept
//
// Drained once per frame on RedrawRequested.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            discrete: Vec::with_capacity(64),
            continuous: HashSet::with_capacity(4),
        }
    }

    /// Appends a key or button event unless it repeats the previous one.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Stores a continuous event, replacing any older one of the same kind.
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Takes everything buffered this frame, discrete events first.
    ///
    /// Returns `None` when nothing was buffered so empty frames are not
    /// sent across the channel.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }

        let mut events = std::mem::replace(&mut self.discrete, Vec::with_capacity(64));
        events.extend(self.continuous.drain());
        Some(events)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
