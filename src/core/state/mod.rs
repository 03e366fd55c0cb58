//=========================================================================
// State System
//=========================================================================
//
// Hierarchical finite-state machine deciding which application mode is
// active (boot, menu, gameplay, overlay, shutdown).
//
// Architecture:
//   StateMachine
//     ├─ states: HashMap<StateId, State>
//     └─ active: Option<StateId>
//
//   State
//     ├─ hooks: on_enter / on_exit / on_update / on_input / on_render
//     └─ links: parent: Option<StateId>, children: Vec<StateId>
//
// Flow:
//   Frame driver → dispatch_*() → active State hook
//   Caller       → transition() → on_exit → on_enter
//
//=========================================================================

//=== Module Declarations =================================================

mod error;
mod state;
mod state_id;
mod state_machine;

//=== Public API ==========================================================

pub use error::StateError;
pub use state::{Hook, InputHook, RenderHook, State};
pub use state_id::StateId;
pub use state_machine::{StateMachine, NO_STATE_NAME};
