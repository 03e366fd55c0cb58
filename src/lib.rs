//=========================================================================
// Modal Engine — Library Root
//
// A hierarchical state machine for application modes (title screen,
// menus, gameplay, pause) driven by a fixed-rate logic thread and a Winit
// window.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the state machine and its supporting types under `core`
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use modal_engine::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the state machine, input types, canvas, language context
// and the command channel. It can be used on its own without a window.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit integration and is not part of the
// public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
