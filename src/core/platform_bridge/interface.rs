//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Message and error types crossing the platform ↔ core thread boundary.
//
//   Platform thread ──PlatformEvent──▶ Logic thread
//   Platform thread ◀──CoreEvent────── Logic thread
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the frame driver.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input collected during one frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// The window was closed by the user or the OS.
    WindowClosed,
}

//=== CoreEvent ===========================================================

/// Events sent from the frame driver back to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoreEvent {
    /// The frame loop stopped; the window should close.
    Shutdown,
}

//=== PlatformError =======================================================

/// Event loop failures. Fatal for the engine.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    #[error("event loop error: {0}")]
    EventLoopExecution(String),
}
