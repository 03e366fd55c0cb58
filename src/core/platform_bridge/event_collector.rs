//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side receiver of platform events with bounded polling.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → input events → TickControl
//
// At most MAX_EVENTS_PER_FRAME messages are drained per tick so a flood
// of input cannot starve update and render.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(32),
        }
    }

    /// Drains pending platform messages into this frame's event list.
    ///
    /// Returns `Exit` when the window closed or the platform hung up.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => {
                    info!("Window closed, stopping frame loop");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    warn!("Platform channel disconnected, stopping frame loop");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} messages this frame", drained);
        }

        TickControl::Continue
    }

    /// Input events collected by the last `collect_frame`.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
