//=========================================================================
// Engine Commands
//=========================================================================
//
// Deferred requests from state hooks to the frame driver.
//
// Hooks cannot borrow the StateMachine that is calling them, so they
// queue commands instead. The frame driver applies the queue at the end
// of each tick, in FIFO order.
//
// Architecture:
//   State hook → CommandSender → crossbeam channel → FrameDriver
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::state::StateId;

//=== EngineCommand =======================================================

/// Request applied by the frame driver at the next tick boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Transition to the state with this id.
    GoTo(StateId),

    /// Stop the frame loop and close the window.
    Quit,
}

//=== CommandSender =======================================================

/// Cloneable handle for queueing [`EngineCommand`]s from state hooks.
///
/// Sending never blocks. If the frame driver is gone the command is
/// dropped.
#[derive(Debug, Clone)]
pub struct CommandSender {
    sender: Sender<EngineCommand>,
}

impl CommandSender {
    pub(crate) fn new(sender: Sender<EngineCommand>) -> Self {
        Self { sender }
    }

    /// Queues a transition to `id`.
    pub fn go_to(&self, id: impl Into<StateId>) {
        self.send(EngineCommand::GoTo(id.into()));
    }

    /// Queues a shutdown request.
    pub fn quit(&self) {
        self.send(EngineCommand::Quit);
    }

    pub fn send(&self, command: EngineCommand) {
        if let Err(err) = self.sender.send(command) {
            debug!("Frame driver gone, dropping command {:?}", err.into_inner());
        }
    }
}

/// Creates a connected sender/receiver pair.
pub(crate) fn command_channel() -> (CommandSender, Receiver<EngineCommand>) {
    let (tx, rx) = unbounded();
    (CommandSender::new(tx), rx)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_arrive_in_order() {
        let (sender, receiver) = command_channel();

        sender.go_to([1, 1]);
        sender.quit();
        sender.go_to(StateId::from([0]));

        let received: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            received,
            vec![
                EngineCommand::GoTo(StateId::from([1, 1])),
                EngineCommand::Quit,
                EngineCommand::GoTo(StateId::from([0])),
            ]
        );
    }

    #[test]
    fn clones_share_one_queue() {
        let (sender, receiver) = command_channel();
        let clone = sender.clone();

        sender.go_to([1]);
        clone.go_to([2]);

        assert_eq!(receiver.try_iter().count(), 2);
    }

    #[test]
    fn sending_after_driver_dropped_does_not_panic() {
        let (sender, receiver) = command_channel();
        drop(receiver);

        sender.go_to([1]);
        sender.quit();
    }
}
