//=========================================================================
// Core Systems
//
// Platform-independent engine logic, run on the logic thread.
//
// Responsibilities:
// - Hierarchical state machine deciding the active application mode
// - Per-tick dispatch of input, update and render to the active state
// - Commands from state hooks back to the engine (transition, quit)
// - Shared context injected into hooks (language)
//
// Notes:
// The frame driver owns the state machine exclusively once the engine
// runs. The platform thread reaches it only through the channels of the
// platform bridge.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod canvas;
pub mod commands;
pub mod globals;
pub mod input;
pub mod lang;
pub mod state;

pub(crate) mod frame_driver;
pub(crate) mod platform_bridge;

//=== Public API ==========================================================

pub use canvas::{Canvas, Color};
pub use commands::{CommandSender, EngineCommand};
pub use globals::GlobalSystems;
pub use input::{InputEvent, KeyCode, Modifiers, MouseButton};
pub use lang::{LangError, LangState, Language, SharedLangState};
pub use platform_bridge::PlatformError;
pub use state::{State, StateError, StateId, StateMachine};

//=== Engine Aliases ======================================================

/// State machine driven by the engine: hooks receive [`InputEvent`]s and
/// render into a [`Canvas`].
pub type EngineStateMachine = StateMachine<InputEvent, Canvas>;

/// State as registered with the engine's state machine.
pub type EngineState = State<InputEvent, Canvas>;
