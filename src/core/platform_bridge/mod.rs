//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the frame driver.
//
// Components:
// - `interface`: messages in both directions and platform errors
// - `event_collector`: core-side bounded draining of platform messages
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{CoreEvent, PlatformEvent};

pub use interface::PlatformError;
