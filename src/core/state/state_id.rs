//=========================================================================
// State Identifier
//=========================================================================
//
// Hierarchical path locating a state in the state tree.
//
// Layout:
//   {}        conceptual root (never registered in practice)
//   {1}       top-level state
//   {1, 1}    child of {1}
//   {1, 1, 2} child of {1, 1}
//
// The identifier type does not validate levels. Uniqueness is enforced
// only when a state is registered in the StateMachine.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== StateId =============================================================

/// Ordered path of integer levels locating a state in the hierarchy.
///
/// The number of levels is the depth of the state. Two ids are equal
/// only if they have the same levels in the same order.
///
/// ```rust
/// # use modal_engine::core::state::StateId;
/// let game = StateId::from([1, 1]);
/// let small_menu = game.child(2);
///
/// assert_eq!(small_menu.to_string(), "1.1.2");
/// assert_eq!(small_menu.parent(), game);
/// assert!(game.is_parent_of(&small_menu));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId {
    levels: Vec<i32>,
}

impl StateId {
    //--- Construction -----------------------------------------------------

    /// Creates an id from a list of levels.
    pub fn new(levels: Vec<i32>) -> Self {
        Self { levels }
    }

    /// Returns the empty id (the conceptual root of every tree).
    pub fn root() -> Self {
        Self { levels: Vec::new() }
    }

    //--- Accessors --------------------------------------------------------

    pub fn levels(&self) -> &[i32] {
        &self.levels
    }

    /// Number of levels, i.e. the depth in the tree.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_root(&self) -> bool {
        self.levels.is_empty()
    }

    //--- Hierarchy --------------------------------------------------------

    /// Returns the id one level up.
    ///
    /// The root has no level to drop, so its parent is the root again.
    pub fn parent(&self) -> Self {
        let mut levels = self.levels.clone();
        levels.pop();
        Self { levels }
    }

    /// Returns `true` if `candidate` sits exactly one level below `self`.
    ///
    /// Same-length or shorter candidates are never children.
    pub fn is_parent_of(&self, candidate: &StateId) -> bool {
        if self.levels.len() + 1 != candidate.levels.len() {
            return false;
        }

        self.levels
            .iter()
            .zip(&candidate.levels)
            .all(|(a, b)| a == b)
    }

    /// Returns a new id one level deeper, ending in `level`.
    pub fn child(&self, level: i32) -> Self {
        let mut levels = Vec::with_capacity(self.levels.len() + 1);
        levels.extend_from_slice(&self.levels);
        levels.push(level);
        Self { levels }
    }
}

//--- Conversions ---------------------------------------------------------

impl From<Vec<i32>> for StateId {
    fn from(levels: Vec<i32>) -> Self {
        Self::new(levels)
    }
}

impl<const N: usize> From<[i32; N]> for StateId {
    fn from(levels: [i32; N]) -> Self {
        Self::new(levels.to_vec())
    }
}

impl From<&[i32]> for StateId {
    fn from(levels: &[i32]) -> Self {
        Self::new(levels.to_vec())
    }
}

//--- Display -------------------------------------------------------------

/// Dot-separated form used in logs (`1.1.2`). The root renders as `""`.
impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", level)?;
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
