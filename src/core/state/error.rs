//=========================================================================
// State Machine Errors
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::StateId;

//=== StateError ==========================================================

/// Rejected state machine operations.
///
/// Both variants leave the machine exactly as it was before the call.
/// They are reported to the caller and never abort the frame loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A state with this id is already registered.
    #[error("state with id `{0}` already exists")]
    DuplicateIdentifier(StateId),

    /// No state with this id is registered.
    #[error("state not found: `{0}`")]
    UnknownState(StateId),
}
