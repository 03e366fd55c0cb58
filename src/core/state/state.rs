//=========================================================================
// State Node
//=========================================================================
//
// A named unit of behavior held by the StateMachine.
//
// Each hook slot is independently optional. A state with no hooks is
// legal and simply does nothing when dispatched to.
//
// Tree links (`parent`, `children`) are keys into the machine's arena,
// not references. Only the StateMachine writes them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::StateId;

//=== Hook Types ==========================================================

/// Lifecycle or tick hook taking no arguments.
pub type Hook = Box<dyn FnMut() + Send>;

/// Hook receiving the event forwarded by the frame driver.
pub type InputHook<E> = Box<dyn FnMut(&E) + Send>;

/// Hook receiving the render surface for the current frame.
pub type RenderHook<R> = Box<dyn FnMut(&mut R) + Send>;

//=== State ===============================================================

/// Single state of a hierarchical state machine.
///
/// `E` is the input event type and `R` the render surface type. The
/// state never inspects either, it only hands them to its hooks.
///
/// # Example
///
/// ```rust
/// # use modal_engine::core::state::{State, StateId};
/// let game: State<(), ()> = State::new(StateId::from([1, 1]), "GAME")
///     .with_on_enter(|| println!("Entering GAME"))
///     .with_on_exit(|| println!("Exiting GAME"));
///
/// assert_eq!(game.name(), "GAME");
/// assert!(game.parent().is_none());
/// ```
pub struct State<E, R> {
    id: StateId,
    name: String,

    pub(super) on_enter: Option<Hook>,
    pub(super) on_exit: Option<Hook>,
    pub(super) on_update: Option<Hook>,
    pub(super) on_input: Option<InputHook<E>>,
    pub(super) on_render: Option<RenderHook<R>>,

    pub(super) parent: Option<StateId>,
    pub(super) children: Vec<StateId>,
}

impl<E, R> State<E, R> {
    //--- Construction -----------------------------------------------------

    /// Creates a state with no hooks, no parent and no children.
    pub fn new(id: StateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            on_enter: None,
            on_exit: None,
            on_update: None,
            on_input: None,
            on_render: None,
            parent: None,
            children: Vec::new(),
        }
    }

    //--- Builder Hooks ----------------------------------------------------

    pub fn with_on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_enter(hook);
        self
    }

    pub fn with_on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_exit(hook);
        self
    }

    pub fn with_on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_update(hook);
        self
    }

    pub fn with_on_input<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.set_on_input(hook);
        self
    }

    pub fn with_on_render<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut R) + Send + 'static,
    {
        self.set_on_render(hook);
        self
    }

    //--- In-place Hooks ---------------------------------------------------
    //
    // Used after registration through `StateMachine::get_state_mut`.
    // Setting a slot replaces any previous hook in it.
    //

    /// Hook run when this state becomes active.
    pub fn set_on_enter<F>(&mut self, hook: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_enter = Some(Box::new(hook));
    }

    /// Hook run when this state stops being active.
    pub fn set_on_exit<F>(&mut self, hook: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_exit = Some(Box::new(hook));
    }

    /// Hook run once per tick while active.
    pub fn set_on_update<F>(&mut self, hook: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_update = Some(Box::new(hook));
    }

    /// Hook run for every input event received while active.
    pub fn set_on_input<F>(&mut self, hook: F)
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.on_input = Some(Box::new(hook));
    }

    /// Hook run once per frame while active.
    pub fn set_on_render<F>(&mut self, hook: F)
    where
        F: FnMut(&mut R) + Send + 'static,
    {
        self.on_render = Some(Box::new(hook));
    }

    //--- Accessors --------------------------------------------------------

    pub fn id(&self) -> &StateId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the registered parent state, if one is linked.
    pub fn parent(&self) -> Option<&StateId> {
        self.parent.as_ref()
    }

    /// Ids of linked child states, in link order.
    pub fn children(&self) -> &[StateId] {
        &self.children
    }

    pub fn has_on_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_on_exit(&self) -> bool {
        self.on_exit.is_some()
    }

    pub fn has_on_update(&self) -> bool {
        self.on_update.is_some()
    }

    pub fn has_on_input(&self) -> bool {
        self.on_input.is_some()
    }

    pub fn has_on_render(&self) -> bool {
        self.on_render.is_some()
    }

    //--- Hook Invocation --------------------------------------------------

    pub(super) fn enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    pub(super) fn exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }

    pub(super) fn update(&mut self) {
        if let Some(hook) = self.on_update.as_mut() {
            hook();
        }
    }

    pub(super) fn input(&mut self, event: &E) {
        if let Some(hook) = self.on_input.as_mut() {
            hook(event);
        }
    }

    pub(super) fn render(&mut self, surface: &mut R) {
        if let Some(hook) = self.on_render.as_mut() {
            hook(surface);
        }
    }
}

//--- Debug ---------------------------------------------------------------

// Hooks are opaque closures; report which slots are filled instead.
impl<E, R> fmt::Debug for State<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("on_enter", &self.has_on_enter())
            .field("on_exit", &self.has_on_exit())
            .field("on_update", &self.has_on_update())
            .field("on_input", &self.has_on_input())
            .field("on_render", &self.has_on_render())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
