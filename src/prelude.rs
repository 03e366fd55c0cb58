//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use modal_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Global systems and hook context
pub use crate::core::commands::CommandSender;
pub use crate::core::globals::GlobalSystems;
pub use crate::core::lang::{Language, SharedLangState};

// State machine
pub use crate::core::state::{StateError, StateId};
pub use crate::core::{EngineState, EngineStateMachine};

// Input and rendering
pub use crate::core::canvas::{Canvas, Color};
pub use crate::core::input::{InputEvent, KeyCode, Modifiers, MouseButton};
