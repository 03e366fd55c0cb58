//=========================================================================
// Frame Driver
//=========================================================================
//
// Runs the per-tick loop on the logic thread and owns everything the
// state hooks touch: the StateMachine and the Canvas.
//
// Each tick:
//  1. Collect platform input (bounded)
//  2. Dispatch every input event to the active state
//  3. Dispatch update
//  4. Clear the canvas and dispatch render
//  5. Apply commands queued by hooks (transitions, quit)
//
// Commands queued while step 5 runs (e.g. from an on_enter hook) wait
// for the next tick, so a hook cannot keep the driver inside one tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::canvas::{Canvas, Color};
use crate::core::commands::EngineCommand;
use crate::core::platform_bridge::{CoreEvent, EventCollector, PlatformEvent, TickControl};
use crate::core::EngineStateMachine;

//=== FrameDriver =========================================================

pub(crate) struct FrameDriver {
    machine: EngineStateMachine,
    canvas: Canvas,
    collector: EventCollector,
    commands: Receiver<EngineCommand>,
    core_sender: Sender<CoreEvent>,
    ticks: u64,
}

impl FrameDriver {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        machine: EngineStateMachine,
        canvas: Canvas,
        platform_events: Receiver<PlatformEvent>,
        commands: Receiver<EngineCommand>,
        core_sender: Sender<CoreEvent>,
    ) -> Self {
        Self {
            machine,
            canvas,
            collector: EventCollector::new(platform_events),
            commands,
            core_sender,
            ticks: 0,
        }
    }

    //--- spawn() ----------------------------------------------------------
    //
    // Moves the driver onto its own thread and ticks it at a fixed rate
    // until the window closes or a hook requests Quit.
    //
    pub(crate) fn spawn(mut self, tps: f64) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            info!("Frame loop started in state {}", self.machine.current_name());

            loop {
                let frame_start = Instant::now();

                if self.tick() == TickControl::Exit {
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self.shutdown();
            info!("Core thread exiting.");
        })
    }

    //--- tick() -----------------------------------------------------------

    pub(crate) fn tick(&mut self) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        for event in self.collector.events() {
            self.machine.dispatch_input(event);
        }

        self.machine.dispatch_update();

        self.canvas.clear(Color::BLACK);
        self.machine.dispatch_render(&mut self.canvas);

        self.ticks += 1;
        self.apply_commands()
    }

    //--- shutdown() -------------------------------------------------------
    //
    // Hard teardown: states are dropped without on_exit, then the
    // platform is told to close the window.
    //
    pub(crate) fn shutdown(&mut self) {
        info!(
            "Frame loop stopped after {} tick(s) in state {}",
            self.ticks,
            self.machine.current_name()
        );
        self.machine.clear();

        if self.core_sender.send(CoreEvent::Shutdown).is_err() {
            debug!("Platform already gone, shutdown notice dropped");
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_commands(&mut self) -> TickControl {
        let pending: Vec<EngineCommand> = self.commands.try_iter().collect();

        for command in pending {
            match command {
                EngineCommand::GoTo(id) => {
                    if let Err(err) = self.machine.transition(&id) {
                        warn!("Ignoring transition request: {}", err);
                    }
                }
                EngineCommand::Quit => {
                    info!("Quit requested in state {}", self.machine.current_name());
                    return TickControl::Exit;
                }
            }
        }

        TickControl::Continue
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn machine(&self) -> &EngineStateMachine {
        &self.machine
    }

    #[cfg(test)]
    pub(crate) fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
