//=========================================================================
// Miyoo Square
//
// Demo application: a title screen, a main menu with a language toggle,
// a gameplay level with a pause menu, and an exit state.
//
// Run with `RUST_LOG=debug` to watch state transitions.
//
//=========================================================================

mod game_states;

use std::process;

use log::{error, info};
use modal_engine::EngineBuilder;

use game_states::GameState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut registration = Ok(());

    let engine = EngineBuilder::new()
        .with_title("Miyoo Square")
        .with_window_size(800, 600)
        .with_initial_state(GameState::Start.id())
        .build()
        .init(|systems| registration = game_states::register_all(systems));

    if let Err(e) = registration {
        error!("Failed to register game states: {}", e);
        process::exit(1);
    }

    if let Err(e) = engine.run() {
        error!("Engine stopped with an error: {}", e);
        process::exit(1);
    }

    info!("Bye");
}
