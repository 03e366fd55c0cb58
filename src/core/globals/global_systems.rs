//=========================================================================
// Global Systems
//=========================================================================
//
// Everything application code configures before the engine runs.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::commands::CommandSender;
use crate::core::lang::SharedLangState;
use crate::core::EngineStateMachine;

//=== GlobalSystems =======================================================

/// Engine systems exposed to [`crate::Engine::init`].
///
/// # Available Systems
///
/// - `state_machine`: register states and attach their hooks here
/// - `commands`: clone into hooks that need to request transitions or quit
/// - `lang`: clone into hooks that display localized text
pub struct GlobalSystems {
    /// Application states. Moved to the logic thread when the engine runs.
    pub state_machine: EngineStateMachine,

    /// Handle for queueing transitions and shutdown from state hooks.
    pub commands: CommandSender,

    /// Current UI language, shared by every clone.
    pub lang: SharedLangState,
}

impl GlobalSystems {
    pub(crate) fn new(commands: CommandSender, lang: SharedLangState) -> Self {
        Self {
            state_machine: EngineStateMachine::new(),
            commands,
            lang,
        }
    }
}
