//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  FrameDriver     │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  EventCollector  │
//  │   └─ Tracks modifiers    │    │   ↓              │
//  │   ↓                      │    │  StateMachine    │
//  │  InputBuffer             │    │   (active state) │
//  │   ↓                      │    │                  │
//  │  RedrawRequested (flush) │    └──────────────────┘
//  │   ↓                      │        ↑        │
//  │  PlatformEvent ──────────┼────────┘        │
//  │  CoreEvent ◀─────────────┼─────────────────┘
//  └──────────────────────────┘
// ```
//
// Responsibilities:
// - Create the OS window from the builder settings
// - Convert Winit types into engine InputEvents
// - Buffer input until the frame boundary (RedrawRequested)
// - Close the event loop on window close or CoreEvent::Shutdown
//
// Winit requires the event loop on the main thread, so this runs on the
// thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

/// How long the loop sleeps between shutdown polls when idle.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(16);

//=== WindowSettings ======================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// # Lifecycle
///
/// 1. `Platform::new(..)` wires the channels, no window yet
/// 2. `platform.run()` blocks on the Winit event loop
/// 3. `resumed()` creates the window
/// 4. Close request or `CoreEvent::Shutdown` exits the loop and `run()` returns
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    core_events: Receiver<CoreEvent>,

    input_processor: InputProcessor,
    settings: WindowSettings,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        core_events: Receiver<CoreEvent>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            core_events,
            input_processor: InputProcessor::new(),
            settings,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Winit panics if this is called off the main thread on macOS/iOS.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))?;

        debug!(target: "platform", "Winit event loop finished");
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered this frame as one `PlatformEvent::Inputs`.
    ///
    /// A disconnected channel means the logic thread is gone; the events
    /// are dropped and the window stays closable.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };

        let count = events.len();
        trace!(target: "platform::input", "Flushing {} events", count);

        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                count
            );
        }
    }

    /// True once the logic thread asked for shutdown or went away.
    fn shutdown_requested(&self) -> bool {
        match self.core_events.try_recv() {
            Ok(CoreEvent::Shutdown) => {
                info!(target: "platform", "Shutdown requested by core");
                true
            }
            Err(TryRecvError::Disconnected) => {
                warn!(target: "platform", "Core channel disconnected, closing window");
                true
            }
            Err(TryRecvError::Empty) => false,
        }
    }

    fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window '{}' created: {}x{} @ {}x DPI",
                    self.settings.title,
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                // frame boundary
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shutdown_requested() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::wait_duration(SHUTDOWN_POLL_INTERVAL));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
