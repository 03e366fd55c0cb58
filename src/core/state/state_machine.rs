//=========================================================================
// State Machine
//=========================================================================
//
// Owns every State, maintains the parent/child links derived from their
// ids, tracks the single active state and performs transitions.
//
// Storage:
//   StateMachine
//     ├─ states: HashMap<StateId, State>   (arena, owns all states)
//     └─ active: Option<StateId>           (key into the arena)
//
// Links are stored as ids, so removing a state can never leave a
// dangling reference behind.
//
// Flow:
//   add()        → link parent → adopt children → store
//   transition() → active.on_exit → switch → target.on_enter
//   dispatch_*() → active state's hook only (no bubbling)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{State, StateError, StateId};

//=== Constants ===========================================================

/// Name reported by [`StateMachine::current_name`] when nothing is active.
pub const NO_STATE_NAME: &str = "NONE";

//=== StateMachine ========================================================

/// Hierarchical state registry with a single active state.
///
/// Any registered id is a legal transition target. The hierarchy only
/// records how states relate; it does not restrict transitions.
///
/// # Example
///
/// ```rust
/// # use modal_engine::core::state::{StateMachine, StateId};
/// let mut machine: StateMachine<(), ()> = StateMachine::new();
///
/// machine.register(StateId::from([0]), "START").unwrap();
/// machine.register(StateId::from([1]), "MAIN_MENU").unwrap();
/// machine.register(StateId::from([1, 1]), "GAME").unwrap();
///
/// machine.transition(&StateId::from([1, 1])).unwrap();
/// assert_eq!(machine.current_name(), "GAME");
///
/// let game = machine.get_state(&StateId::from([1, 1])).unwrap();
/// assert_eq!(game.parent(), Some(&StateId::from([1])));
/// ```
pub struct StateMachine<E, R> {
    states: HashMap<StateId, State<E, R>>,
    active: Option<StateId>,
}

impl<E, R> StateMachine<E, R> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty machine with no active state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a state and links it into the hierarchy.
    ///
    /// The state is attached to its registered parent, if any, and adopts
    /// every registered state that sits one level below it. Registration
    /// order therefore does not matter.
    ///
    /// # Errors
    ///
    /// [`StateError::DuplicateIdentifier`] if a state with the same id is
    /// already registered. The new state is dropped and the machine is
    /// left untouched.
    pub fn add(&mut self, mut state: State<E, R>) -> Result<(), StateError> {
        let id = state.id().clone();

        if self.states.contains_key(&id) {
            warn!("State with id {} already exists, rejecting {:?}", id, state.name());
            return Err(StateError::DuplicateIdentifier(id));
        }

        // 1. Attach to the registered parent
        let parent_id = id.parent();
        if let Some(parent) = self.states.get_mut(&parent_id) {
            // children stay sorted whatever the registration order
            if let Err(position) = parent.children.binary_search(&id) {
                parent.children.insert(position, id.clone());
            }
            state.parent = Some(parent_id);
        }

        // 2. Adopt children registered before this state
        let mut adopted: Vec<StateId> = Vec::new();
        for (existing_id, existing) in self.states.iter_mut() {
            if id.is_parent_of(existing_id) {
                existing.parent = Some(id.clone());
                adopted.push(existing_id.clone());
            }
        }
        adopted.sort();
        state.children.extend(adopted);

        debug!(
            "Registered state {} ({}) with {} child(ren)",
            id,
            state.name(),
            state.children.len()
        );

        // 3. Store
        self.states.insert(id, state);
        Ok(())
    }

    /// Creates a state without hooks and registers it.
    ///
    /// Hooks can be attached afterwards through [`Self::get_state_mut`].
    pub fn register(&mut self, id: StateId, name: impl Into<String>) -> Result<(), StateError> {
        self.add(State::new(id, name))
    }

    //--- Removal ----------------------------------------------------------

    /// Removes a state together with its whole subtree.
    ///
    /// If the active state is part of the subtree, its `on_exit` hook runs
    /// first and the machine is left with no active state. Unknown ids are
    /// ignored.
    pub fn remove(&mut self, id: &StateId) {
        if !self.states.contains_key(id) {
            debug!("State {} not registered, skipping removal", id);
            return;
        }

        let active_removed = self
            .active
            .as_ref()
            .is_some_and(|active| self.is_within_subtree(active, id));

        if active_removed {
            if let Some(state) = self.active_state_mut() {
                state.exit();
            }
            self.active = None;
            debug!("Active state removed with subtree {}", id);
        }

        self.remove_recursive(id);
    }

    /// Drops every state and clears the active state.
    ///
    /// This is a hard reset: no `on_exit` hook runs, unlike [`Self::remove`].
    pub fn clear(&mut self) {
        debug!("Clearing {} state(s)", self.states.len());
        self.states.clear();
        self.active = None;
    }

    //--- Transitions ------------------------------------------------------

    /// Makes the state with this id the active one.
    ///
    /// Runs the current state's `on_exit`, switches, then runs the target's
    /// `on_enter`. Transitioning to the already active state runs both hooks
    /// as well.
    ///
    /// # Errors
    ///
    /// [`StateError::UnknownState`] if no state has this id. Nothing changes
    /// and no hook runs.
    pub fn transition(&mut self, id: &StateId) -> Result<(), StateError> {
        if !self.states.contains_key(id) {
            warn!("State not found: {}", id);
            return Err(StateError::UnknownState(id.clone()));
        }

        if let Some(current) = self.active_state_mut() {
            current.exit();
        }

        debug!("Transition {} -> {}", self.current_name(), id);
        self.active = Some(id.clone());

        if let Some(target) = self.active_state_mut() {
            target.enter();
        }

        Ok(())
    }

    //--- Dispatch ---------------------------------------------------------

    /// Forwards an input event to the active state's `on_input` hook.
    pub fn dispatch_input(&mut self, event: &E) {
        if let Some(state) = self.active_state_mut() {
            state.input(event);
        }
    }

    /// Runs the active state's `on_update` hook.
    pub fn dispatch_update(&mut self) {
        if let Some(state) = self.active_state_mut() {
            state.update();
        }
    }

    /// Forwards the render surface to the active state's `on_render` hook.
    pub fn dispatch_render(&mut self, surface: &mut R) {
        if let Some(state) = self.active_state_mut() {
            state.render(surface);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the active state, or [`NO_STATE_NAME`].
    pub fn current_name(&self) -> &str {
        self.current_state().map_or(NO_STATE_NAME, |state| state.name())
    }

    pub fn current_id(&self) -> Option<&StateId> {
        self.active.as_ref()
    }

    pub fn current_state(&self) -> Option<&State<E, R>> {
        self.active.as_ref().and_then(|id| self.states.get(id))
    }

    pub fn get_state(&self, id: &StateId) -> Option<&State<E, R>> {
        self.states.get(id)
    }

    /// Mutable access for attaching hooks to a registered state.
    pub fn get_state_mut(&mut self, id: &StateId) -> Option<&mut State<E, R>> {
        self.states.get_mut(id)
    }

    pub fn contains(&self, id: &StateId) -> bool {
        self.states.contains_key(id)
    }

    /// Iterates over registered ids in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn active_state_mut(&mut self) -> Option<&mut State<E, R>> {
        let id = self.active.as_ref()?;
        self.states.get_mut(id)
    }

    /// Walks parent links upward from `id` looking for `root`.
    fn is_within_subtree(&self, id: &StateId, root: &StateId) -> bool {
        let mut current = Some(id);
        while let Some(cursor) = current {
            if cursor == root {
                return true;
            }
            current = self.states.get(cursor).and_then(|state| state.parent.as_ref());
        }
        false
    }

    /// Children first, then detach from the parent, then release.
    fn remove_recursive(&mut self, id: &StateId) {
        let Some(children) = self.states.get(id).map(|state| state.children.clone()) else {
            return;
        };

        for child in &children {
            self.remove_recursive(child);
        }

        let parent_id = self.states.get(id).and_then(|state| state.parent.clone());
        if let Some(parent) = parent_id.and_then(|pid| self.states.get_mut(&pid)) {
            parent.children.retain(|child| child != id);
        }

        if let Some(state) = self.states.remove(id) {
            debug!("Removed state {} ({})", id, state.name());
        }
    }
}

impl<E, R> Default for StateMachine<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Events = Arc<Mutex<Vec<String>>>;
    type TestMachine = StateMachine<String, Vec<String>>;

    //--- Test Helpers -----------------------------------------------------

    fn id<const N: usize>(levels: [i32; N]) -> StateId {
        StateId::from(levels)
    }

    /// State whose every hook appends `<hook>:<name>` to `events`.
    fn recorded(state_id: StateId, name: &str, events: &Events) -> State<String, Vec<String>> {
        let enter = (Arc::clone(events), format!("enter:{}", name));
        let exit = (Arc::clone(events), format!("exit:{}", name));
        let update = (Arc::clone(events), format!("update:{}", name));
        let input = (Arc::clone(events), name.to_string());
        let render = format!("render:{}", name);

        State::new(state_id, name)
            .with_on_enter(move || enter.0.lock().unwrap().push(enter.1.clone()))
            .with_on_exit(move || exit.0.lock().unwrap().push(exit.1.clone()))
            .with_on_update(move || update.0.lock().unwrap().push(update.1.clone()))
            .with_on_input(move |event: &String| {
                input.0.lock().unwrap().push(format!("input:{}:{}", input.1, event))
            })
            .with_on_render(move |surface: &mut Vec<String>| surface.push(render.clone()))
    }

    fn drain(events: &Events) -> Vec<String> {
        std::mem::take(&mut *events.lock().unwrap())
    }

    /// START {0}, MAIN_MENU {1}, GAME {1,1}, LEVEL {1,1,1}, SMALL_MENU {1,1,2}, EXIT {2}
    fn game_tree(events: &Events) -> TestMachine {
        let mut machine = TestMachine::new();
        for (state_id, name) in [
            (id([0]), "START"),
            (id([1]), "MAIN_MENU"),
            (id([1, 1]), "GAME"),
            (id([1, 1, 1]), "LEVEL_GAMEPLAY"),
            (id([1, 1, 2]), "SMALL_MENU"),
            (id([2]), "EXIT_PROGRAM"),
        ] {
            machine.add(recorded(state_id, name, events)).unwrap();
        }
        machine
    }

    fn links(machine: &TestMachine) -> Vec<(StateId, Option<StateId>, Vec<StateId>)> {
        let mut all: Vec<_> = machine
            .ids()
            .map(|state_id| {
                let state = machine.get_state(state_id).unwrap();
                (
                    state_id.clone(),
                    state.parent().cloned(),
                    state.children().to_vec(),
                )
            })
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }

    //=====================================================================
    // Registration
    //=====================================================================

    #[test]
    fn new_machine_is_empty() {
        let machine = TestMachine::new();
        assert!(machine.is_empty());
        assert_eq!(machine.current_name(), NO_STATE_NAME);
        assert!(machine.current_id().is_none());
    }

    #[test]
    fn add_links_child_to_registered_parent() {
        let mut machine = TestMachine::new();
        machine.register(id([1]), "MENU").unwrap();
        machine.register(id([1, 1]), "GAME").unwrap();

        let game = machine.get_state(&id([1, 1])).unwrap();
        assert_eq!(game.parent(), Some(&id([1])));

        let menu = machine.get_state(&id([1])).unwrap();
        assert_eq!(menu.children(), &[id([1, 1])]);
        assert!(menu.parent().is_none());
    }

    #[test]
    fn parent_added_late_adopts_existing_children() {
        let mut machine = TestMachine::new();
        machine.register(id([1, 1]), "GAME").unwrap();
        assert!(machine.get_state(&id([1, 1])).unwrap().parent().is_none());

        machine.register(id([1]), "MENU").unwrap();

        let menu = machine.get_state(&id([1])).unwrap();
        assert_eq!(menu.children(), &[id([1, 1])]);
        assert_eq!(machine.get_state(&id([1, 1])).unwrap().parent(), Some(&id([1])));
    }

    #[test]
    fn registration_order_does_not_change_links() {
        let ids = [id([1, 1, 2]), id([0]), id([1, 1]), id([2]), id([1]), id([1, 1, 1])];

        let mut forward = TestMachine::new();
        for state_id in ids.iter() {
            forward.register(state_id.clone(), state_id.to_string()).unwrap();
        }

        let mut backward = TestMachine::new();
        for state_id in ids.iter().rev() {
            backward.register(state_id.clone(), state_id.to_string()).unwrap();
        }

        assert_eq!(links(&forward), links(&backward));
    }

    #[test]
    fn children_are_ordered_by_id_for_any_arrival_order() {
        let mut late_sibling = TestMachine::new();
        for state_id in [id([1, 1, 2]), id([1, 1]), id([1, 1, 1])] {
            late_sibling.register(state_id.clone(), state_id.to_string()).unwrap();
        }

        let mut early_sibling = TestMachine::new();
        for state_id in [id([1, 1, 1]), id([1, 1]), id([1, 1, 2])] {
            early_sibling.register(state_id.clone(), state_id.to_string()).unwrap();
        }

        let expected = [id([1, 1, 1]), id([1, 1, 2])];
        assert_eq!(late_sibling.get_state(&id([1, 1])).unwrap().children(), &expected);
        assert_eq!(early_sibling.get_state(&id([1, 1])).unwrap().children(), &expected);
    }

    #[test]
    fn missing_intermediate_level_leaves_state_parentless() {
        let mut machine = TestMachine::new();
        machine.register(id([1]), "MENU").unwrap();
        machine.register(id([1, 1, 1]), "LEVEL").unwrap();

        assert!(machine.get_state(&id([1, 1, 1])).unwrap().parent().is_none());
        assert!(machine.get_state(&id([1])).unwrap().children().is_empty());

        machine.register(id([1, 1]), "GAME").unwrap();
        let game = machine.get_state(&id([1, 1])).unwrap();
        assert_eq!(game.parent(), Some(&id([1])));
        assert_eq!(game.children(), &[id([1, 1, 1])]);
    }

    #[test]
    fn duplicate_add_is_rejected_without_mutation() {
        let events = Events::default();
        let mut machine = TestMachine::new();
        machine.add(recorded(id([1]), "MENU", &events)).unwrap();
        machine.register(id([1, 1]), "GAME").unwrap();

        let result = machine.register(id([1]), "IMPOSTOR");

        assert_eq!(result, Err(StateError::DuplicateIdentifier(id([1]))));
        assert_eq!(machine.len(), 2);

        let menu = machine.get_state(&id([1])).unwrap();
        assert_eq!(menu.name(), "MENU");
        assert!(menu.has_on_enter(), "Original hooks must survive");
        assert_eq!(menu.children(), &[id([1, 1])]);
    }

    #[test]
    fn duplicate_by_name_only_is_allowed() {
        let mut machine = TestMachine::new();
        machine.register(id([1]), "MENU").unwrap();
        machine.register(id([2]), "MENU").unwrap();
        assert_eq!(machine.len(), 2);
    }

    #[test]
    fn hooks_can_be_attached_after_registration() {
        let events = Events::default();
        let mut machine = TestMachine::new();
        machine.register(id([0]), "START").unwrap();

        let sink = Arc::clone(&events);
        machine
            .get_state_mut(&id([0]))
            .unwrap()
            .set_on_enter(move || sink.lock().unwrap().push("late enter".into()));

        machine.transition(&id([0])).unwrap();
        assert_eq!(drain(&events), vec!["late enter"]);
    }

    //=====================================================================
    // Removal
    //=====================================================================

    #[test]
    fn remove_drops_whole_subtree() {
        let events = Events::default();
        let mut machine = game_tree(&events);

        machine.remove(&id([1]));

        for gone in [id([1]), id([1, 1]), id([1, 1, 1]), id([1, 1, 2])] {
            assert!(!machine.contains(&gone), "{} should be removed", gone);
        }
        assert!(machine.contains(&id([0])));
        assert!(machine.contains(&id([2])));
        assert_eq!(machine.len(), 2);
        assert!(drain(&events).is_empty(), "No hooks fire without an active state");
    }

    #[test]
    fn remove_leaf_detaches_it_from_parent() {
        let events = Events::default();
        let mut machine = game_tree(&events);

        machine.remove(&id([1, 1, 2]));

        let game = machine.get_state(&id([1, 1])).unwrap();
        assert_eq!(game.children(), &[id([1, 1, 1])]);
        assert_eq!(machine.len(), 5);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([0])).unwrap();
        drain(&events);

        machine.remove(&id([9, 9]));

        assert_eq!(machine.len(), 6);
        assert_eq!(machine.current_name(), "START");
        assert!(drain(&events).is_empty());
    }

    #[test]
    fn remove_of_active_subtree_exits_and_clears_active() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1, 1, 2])).unwrap();
        drain(&events);

        machine.remove(&id([1, 1]));

        assert_eq!(drain(&events), vec!["exit:SMALL_MENU"]);
        assert!(machine.current_id().is_none());
        assert_eq!(machine.current_name(), NO_STATE_NAME);
        assert!(machine.get_state(&id([1])).unwrap().children().is_empty());
    }

    #[test]
    fn remove_of_active_state_itself_exits_and_clears_active() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1, 1, 1])).unwrap();
        drain(&events);

        machine.remove(&id([1, 1, 1]));

        assert_eq!(drain(&events), vec!["exit:LEVEL_GAMEPLAY"]);
        assert!(machine.current_id().is_none());
        assert!(!machine.contains(&id([1, 1, 1])));
        assert_eq!(machine.get_state(&id([1, 1])).unwrap().children(), &[id([1, 1, 2])]);
    }

    #[test]
    fn root_id_state_adopts_top_level_states() {
        let events = Events::default();
        let mut machine = game_tree(&events);

        machine.register(StateId::root(), "ROOT").unwrap();

        let root = machine.get_state(&StateId::root()).unwrap();
        assert!(root.parent().is_none());
        assert_eq!(root.children(), &[id([0]), id([1]), id([2])]);
        assert_eq!(machine.get_state(&id([1])).unwrap().parent(), Some(&StateId::root()));
    }

    #[test]
    fn removing_root_id_state_empties_machine() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.register(StateId::root(), "ROOT").unwrap();
        machine.transition(&id([1, 1, 2])).unwrap();
        drain(&events);

        machine.remove(&StateId::root());

        assert!(machine.is_empty());
        assert!(machine.current_id().is_none());
        assert_eq!(drain(&events), vec!["exit:SMALL_MENU"]);
    }

    #[test]
    fn remove_outside_active_subtree_keeps_active() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([0])).unwrap();
        drain(&events);

        machine.remove(&id([1]));

        assert!(drain(&events).is_empty());
        assert_eq!(machine.current_name(), "START");
    }

    #[test]
    fn removed_id_can_be_registered_again() {
        let events = Events::default();
        let mut machine = game_tree(&events);

        machine.remove(&id([1, 1]));
        machine.register(id([1, 1]), "GAME").unwrap();

        assert_eq!(machine.get_state(&id([1, 1])).unwrap().parent(), Some(&id([1])));
        assert_eq!(machine.get_state(&id([1])).unwrap().children(), &[id([1, 1])]);
    }

    //=====================================================================
    // Clear
    //=====================================================================

    #[test]
    fn clear_drops_everything_without_exit_hooks() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1])).unwrap();
        drain(&events);

        machine.clear();

        assert!(machine.is_empty());
        assert_eq!(machine.current_name(), NO_STATE_NAME);
        assert!(drain(&events).is_empty(), "clear() must not run on_exit");
    }

    //=====================================================================
    // Transitions
    //=====================================================================

    #[test]
    fn transition_to_unknown_state_changes_nothing() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([0])).unwrap();
        drain(&events);

        let result = machine.transition(&id([7]));

        assert_eq!(result, Err(StateError::UnknownState(id([7]))));
        assert_eq!(machine.current_id(), Some(&id([0])));
        assert!(drain(&events).is_empty());
    }

    #[test]
    fn first_transition_only_enters() {
        let events = Events::default();
        let mut machine = game_tree(&events);

        machine.transition(&id([0])).unwrap();

        assert_eq!(drain(&events), vec!["enter:START"]);
        assert_eq!(machine.current_name(), "START");
    }

    #[test]
    fn transition_exits_before_entering() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1])).unwrap();
        drain(&events);

        machine.transition(&id([2])).unwrap();

        assert_eq!(drain(&events), vec!["exit:MAIN_MENU", "enter:EXIT_PROGRAM"]);
    }

    #[test]
    fn transition_to_active_state_reenters() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1, 1])).unwrap();
        drain(&events);

        machine.transition(&id([1, 1])).unwrap();

        assert_eq!(drain(&events), vec!["exit:GAME", "enter:GAME"]);
    }

    #[test]
    fn transition_ignores_hierarchy() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1, 1, 2])).unwrap();

        assert!(machine.transition(&id([0])).is_ok());
        assert_eq!(machine.current_name(), "START");
    }

    #[test]
    fn start_menu_game_scenario() {
        let events = Events::default();
        let mut machine = TestMachine::new();
        machine.add(recorded(id([0]), "START", &events)).unwrap();
        machine.add(recorded(id([1]), "MENU", &events)).unwrap();
        machine.add(recorded(id([1, 1]), "GAME", &events)).unwrap();

        machine.transition(&id([0])).unwrap();
        assert_eq!(machine.current_name(), "START");
        drain(&events);

        machine.transition(&id([1, 1])).unwrap();
        assert_eq!(drain(&events), vec!["exit:START", "enter:GAME"]);
        assert_eq!(machine.current_name(), "GAME");

        let game = machine.get_state(&id([1, 1])).unwrap();
        assert_eq!(id([1, 1]).parent(), id([1]));
        assert_eq!(game.parent(), Some(&id([1])));
    }

    //=====================================================================
    // Dispatch
    //=====================================================================

    #[test]
    fn dispatch_without_active_state_is_noop() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        let mut surface = Vec::new();

        machine.dispatch_input(&"key".to_string());
        machine.dispatch_update();
        machine.dispatch_render(&mut surface);

        assert!(drain(&events).is_empty());
        assert!(surface.is_empty());
    }

    #[test]
    fn dispatch_reaches_only_the_active_state() {
        let events = Events::default();
        let mut machine = game_tree(&events);
        machine.transition(&id([1, 1, 1])).unwrap();
        drain(&events);

        let mut surface = Vec::new();
        machine.dispatch_input(&"Enter".to_string());
        machine.dispatch_update();
        machine.dispatch_render(&mut surface);

        assert_eq!(
            drain(&events),
            vec!["input:LEVEL_GAMEPLAY:Enter", "update:LEVEL_GAMEPLAY"]
        );
        assert_eq!(surface, vec!["render:LEVEL_GAMEPLAY"]);
    }

    #[test]
    fn dispatch_skips_missing_hooks() {
        let mut machine = TestMachine::new();
        machine.register(id([0]), "BARE").unwrap();
        machine.transition(&id([0])).unwrap();

        let mut surface = Vec::new();
        machine.dispatch_input(&"x".to_string());
        machine.dispatch_update();
        machine.dispatch_render(&mut surface);

        assert!(surface.is_empty());
        assert_eq!(machine.current_name(), "BARE");
    }
}
