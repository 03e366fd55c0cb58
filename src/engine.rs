//=========================================================================
// Modal Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──init()──>  Engine  ──run()──>  [Runtime]
//         │                                   │                     │
//         ├─ with_title()                     └─ register states    ├─ initial transition
//         ├─ with_window_size()                                     ├─ spawns logic thread
//         ├─ with_tps()                                             ├─ runs platform
//         ├─ with_channel_capacity()                                └─ joins logic thread
//         ├─ with_initial_state()
//         └─ with_language()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::commands::{command_channel, EngineCommand};
use crate::core::frame_driver::FrameDriver;
use crate::core::lang::{Language, SharedLangState};
use crate::core::platform_bridge::{CoreEvent, PlatformError, PlatformEvent};
use crate::core::state::{StateError, StateId};
use crate::core::{Canvas, GlobalSystems};
use crate::platform::{Platform, WindowSettings};

//=== EngineError =========================================================

/// Failures that stop [`Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("could not enter initial state: {0}")]
    InitialState(#[from] StateError),

    #[error("core logic thread panicked")]
    CoreThreadPanicked,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Modal Engine"
/// - **Window size**: 800x600
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Initial state**: none
/// - **Language**: English
///
/// # Examples
///
/// ```no_run
/// use modal_engine::EngineBuilder;
/// use modal_engine::core::state::StateId;
///
/// let start = StateId::from([0]);
///
/// let result = EngineBuilder::new()
///     .with_title("Demo")
///     .with_tps(120.0)
///     .with_initial_state(start.clone())
///     .build()
///     .init(|systems| {
///         systems.state_machine.register(start, "START").unwrap();
///     })
///     .run();
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    tps: f64,
    channel_capacity: usize,
    initial_state: Option<StateId>,
    language: Language,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Modal Engine".to_string(),
            width: 800,
            height: 600,
            tps: 60.0,
            channel_capacity: 128,
            initial_state: None,
            language: Language::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the window's inner size in logical pixels. The render canvas
    /// uses the same dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be non-zero, got {}x{}",
            width,
            height
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// State entered when the engine starts running. Without one the
    /// engine runs with no active state until a hook requests a transition.
    pub fn with_initial_state(mut self, id: impl Into<StateId>) -> Self {
        self.initial_state = Some(id.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine '{}' ({}x{}, TPS: {}, channel: {})",
            self.title, self.width, self.height, self.tps, self.channel_capacity
        );

        let (commands, commands_rx) = command_channel();
        let lang = SharedLangState::new(self.language);

        Engine {
            systems: GlobalSystems::new(commands, lang),
            commands_rx,
            window: WindowSettings {
                title: self.title,
                width: self.width,
                height: self.height,
            },
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            initial_state: self.initial_state,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Modal Engine runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► FrameDriver (Logic Thread @ TPS)
///   │     └─► StateMachine: input → update → render
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: PlatformEvent (bounded), CoreEvent, EngineCommand
/// ```
pub struct Engine {
    systems: GlobalSystems,
    commands_rx: Receiver<EngineCommand>,
    window: WindowSettings,
    tps: f64,
    channel_capacity: usize,
    initial_state: Option<StateId>,
}

impl Engine {
    //--- Initialization ---------------------------------------------------

    /// Configures engine systems before execution.
    ///
    /// Register states and attach their hooks through
    /// `systems.state_machine`; clone `systems.commands` and `systems.lang`
    /// into hooks that need them.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems),
    {
        info!("Initializing engine systems");

        init_fn(&mut self.systems);

        info!(
            "Engine initialization complete ({} states registered)",
            self.systems.state_machine.len()
        );
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Enters the initial state, if one was configured
    /// 2. Spawns the logic thread running at the configured TPS
    /// 3. Runs the platform event loop on this thread
    /// 4. On window close or a Quit command, both sides stop and the logic
    ///    thread is joined
    ///
    /// # Errors
    ///
    /// - [`EngineError::InitialState`] if the initial state is not registered
    /// - [`EngineError::Platform`] if the event loop fails
    /// - [`EngineError::CoreThreadPanicked`] if the logic thread panicked
    pub fn run(self) -> Result<(), EngineError> {
        let Engine {
            mut systems,
            commands_rx,
            window,
            tps,
            channel_capacity,
            initial_state,
        } = self;

        info!("Starting engine runtime (TPS: {})", tps);

        //--- 1. Enter the initial state -----------------------------------
        if let Some(id) = &initial_state {
            systems.state_machine.transition(id)?;
        }

        //--- 2. Create communication channels -----------------------------
        let (platform_tx, platform_rx) = bounded::<PlatformEvent>(channel_capacity);
        let (core_tx, core_rx) = bounded::<CoreEvent>(1);

        info!("Channels created (capacity: {})", channel_capacity);

        //--- 3. Spawn the logic thread ------------------------------------
        let canvas = Canvas::new(window.width, window.height);
        let driver = FrameDriver::new(systems.state_machine, canvas, platform_rx, commands_rx, core_tx);
        let core_handle = driver.spawn(tps);
        info!("Core logic thread spawned");

        //--- 4. Launch the platform subsystem -----------------------------
        let platform_result = Platform::new(window, platform_tx, core_rx).run();

        if let Err(e) = &platform_result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 5. Cleanup: wait for the logic thread ------------------------
        let join_result = core_handle.join();

        if join_result.is_err() {
            error!("Core thread panicked");
        } else {
            info!("Core thread terminated cleanly");
        }

        platform_result?;
        join_result.map_err(|_| EngineError::CoreThreadPanicked)?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
