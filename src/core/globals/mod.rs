//=========================================================================
// Global Engine State
//=========================================================================
//
// Systems configured by the application during `Engine::init` and then
// handed to the frame driver.
//
//=========================================================================

//=== Module Declarations =================================================

mod global_systems;

//=== Public API ==========================================================

pub use global_systems::GlobalSystems;
