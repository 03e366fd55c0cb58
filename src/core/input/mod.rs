//=========================================================================
// Input Types
//=========================================================================
//
// Engine-side representation of keyboard and mouse input.
//
// The platform layer converts OS events into `InputEvent`s; the frame
// driver forwards each one to the active state unchanged. Mapping keys
// to game actions is left to state hooks.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, Modifiers, MouseButton};
