//=========================================================================
// Game States
//=========================================================================
//
// State layout of the demo:
//
//   START           0
//   MAIN_MENU       1
//   └─ GAME         1.1
//      ├─ LEVEL_GAMEPLAY  1.1.1
//      └─ SMALL_MENU      1.1.2
//   EXIT_PROGRAM    2
//
//=========================================================================

use log::info;
use modal_engine::prelude::*;

//=== GameState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    MainMenu,
    Game,
    LevelGameplay,
    SmallMenu,
    ExitProgram,
}

impl GameState {
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::MainMenu,
        Self::Game,
        Self::LevelGameplay,
        Self::SmallMenu,
        Self::ExitProgram,
    ];

    pub fn id(self) -> StateId {
        match self {
            Self::Start => StateId::from([0]),
            Self::MainMenu => StateId::from([1]),
            Self::Game => StateId::from([1, 1]),
            Self::LevelGameplay => StateId::from([1, 1, 1]),
            Self::SmallMenu => StateId::from([1, 1, 2]),
            Self::ExitProgram => StateId::from([2]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::MainMenu => "MAIN_MENU",
            Self::Game => "GAME",
            Self::LevelGameplay => "LEVEL_GAMEPLAY",
            Self::SmallMenu => "SMALL_MENU",
            Self::ExitProgram => "EXIT_PROGRAM",
        }
    }
}

//=== Registration ========================================================

/// Adds every demo state, with its hooks, to the engine's state machine.
pub fn register_all(systems: &mut GlobalSystems) -> Result<(), StateError> {
    for state in GameState::ALL {
        let built = build(state, &systems.commands, &systems.lang);
        systems.state_machine.add(built)?;
    }
    Ok(())
}

fn build(state: GameState, commands: &CommandSender, lang: &SharedLangState) -> EngineState {
    let name = state.name();
    let base = EngineState::new(state.id(), name)
        .with_on_enter(move || info!("Entered {}", name))
        .with_on_exit(move || info!("Exited {}", name));

    match state {
        GameState::Start => {
            let commands = commands.clone();
            base.with_on_input(move |event: &InputEvent| {
                if event.is_key_down(KeyCode::Enter) {
                    commands.go_to(GameState::MainMenu.id());
                }
            })
            .with_on_render(|canvas: &mut Canvas| canvas.fill_circle(400, 300, 50, Color::RED))
        }

        GameState::MainMenu => {
            let commands = commands.clone();
            let lang = lang.clone();
            base.with_on_input(move |event: &InputEvent| match event.pressed_key() {
                Some(KeyCode::Enter) => commands.go_to(GameState::LevelGameplay.id()),
                Some(KeyCode::KeyL) => {
                    let language = lang.cycle();
                    info!("Language switched to {}", language);
                }
                Some(KeyCode::Escape) => commands.go_to(GameState::ExitProgram.id()),
                _ => {}
            })
        }

        GameState::Game => base,

        GameState::LevelGameplay => {
            let commands = commands.clone();
            base.with_on_input(move |event: &InputEvent| {
                if event.is_key_down(KeyCode::Escape) {
                    commands.go_to(GameState::SmallMenu.id());
                }
            })
        }

        GameState::SmallMenu => {
            let commands = commands.clone();
            base.with_on_input(move |event: &InputEvent| match event.pressed_key() {
                Some(KeyCode::Escape) => commands.go_to(GameState::LevelGameplay.id()),
                Some(KeyCode::KeyQ) => commands.go_to(GameState::MainMenu.id()),
                _ => {}
            })
        }

        GameState::ExitProgram => {
            let commands = commands.clone();
            base.with_on_enter(move || {
                info!("Entered {}", name);
                commands.quit();
            })
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn ids_form_the_menu_tree() {
        assert!(GameState::MainMenu.id().is_parent_of(&GameState::Game.id()));
        assert!(GameState::Game.id().is_parent_of(&GameState::LevelGameplay.id()));
        assert!(GameState::Game.id().is_parent_of(&GameState::SmallMenu.id()));
        assert!(!GameState::Start.id().is_parent_of(&GameState::Game.id()));
    }

    #[test]
    fn register_all_links_parents() {
        EngineBuilder::new().build().init(|systems| {
            register_all(systems).unwrap();

            let machine = &systems.state_machine;
            assert_eq!(machine.len(), GameState::ALL.len());

            let game = machine.get_state(&GameState::Game.id()).unwrap();
            assert_eq!(game.parent(), Some(&GameState::MainMenu.id()));
            assert_eq!(
                game.children(),
                &[GameState::LevelGameplay.id(), GameState::SmallMenu.id()]
            );
        });
    }

    #[test]
    fn registering_twice_is_rejected() {
        EngineBuilder::new().build().init(|systems| {
            register_all(systems).unwrap();
            assert_eq!(
                register_all(systems),
                Err(StateError::DuplicateIdentifier(GameState::Start.id()))
            );
        });
    }

    #[test]
    fn start_draws_red_circle() {
        EngineBuilder::new().build().init(|systems| {
            register_all(systems).unwrap();
            systems.state_machine.transition(&GameState::Start.id()).unwrap();

            let mut canvas = Canvas::new(800, 600);
            systems.state_machine.dispatch_render(&mut canvas);

            assert_eq!(canvas.pixel(400, 300), Some(Color::RED));
            assert_eq!(canvas.pixel(450, 300), Some(Color::RED));
            assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        });
    }

    #[test]
    fn main_menu_l_toggles_language() {
        EngineBuilder::new().build().init(|systems| {
            register_all(systems).unwrap();
            systems.state_machine.transition(&GameState::MainMenu.id()).unwrap();

            systems.state_machine.dispatch_input(&key_down(KeyCode::KeyL));
            assert_eq!(systems.lang.get(), Language::Russian);

            systems.state_machine.dispatch_input(&key_down(KeyCode::KeyL));
            assert_eq!(systems.lang.get(), Language::English);
        });
    }
}
