//! Linear undo/redo history over visited state names.

use serde::{Deserialize, Serialize};

/// Ordered record of the states a machine has visited, plus a redo stack.
///
/// The main sequence lists visited state names oldest first and is used as
/// an undo stack; the redo sequence holds states popped by [`undo`] and is
/// replayed by [`redo`]. Recording a new state invalidates any pending redo
/// chain, the usual tree-pruning rule for linear undo.
///
/// Neither sequence is assumed non-empty: [`clear`] empties both while the
/// owning machine keeps its current state, and `undo`/`redo` degrade to
/// `None` on short stacks rather than panicking.
///
/// [`undo`]: History::undo
/// [`redo`]: History::redo
/// [`clear`]: History::clear
///
/// # Example
///
/// ```rust
/// use switchyard::History;
///
/// let mut history = History::seeded("idle");
/// history.record("running");
/// history.record("paused");
///
/// assert_eq!(history.undo(), Some("running"));
/// assert_eq!(history.redo(), Some("paused"));
/// assert_eq!(history.visited(), ["idle", "running", "paused"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    main: Vec<String>,
    redo: Vec<String>,
}

impl History {
    /// Create a history whose main sequence holds just the starting state.
    pub fn seeded(initial: impl Into<String>) -> Self {
        Self {
            main: vec![initial.into()],
            redo: Vec::new(),
        }
    }

    /// Append a visited state and discard any pending redo chain.
    pub fn record(&mut self, state: &str) {
        self.main.push(state.to_owned());
        self.redo.clear();
    }

    /// Step back one entry.
    ///
    /// Pops the most recent visited state onto the redo stack and returns
    /// the name now at the top of the main sequence. Returns `None`, with
    /// nothing changed, when fewer than two entries remain to step between.
    pub fn undo(&mut self) -> Option<&str> {
        if self.main.len() > 1 {
            let undone = self.main.pop()?;
            self.redo.push(undone);
            self.main.last().map(String::as_str)
        } else {
            None
        }
    }

    /// Replay the most recently undone entry.
    ///
    /// Moves it back onto the main sequence and returns it, or `None` when
    /// the redo stack is empty.
    pub fn redo(&mut self) -> Option<&str> {
        let restored = self.redo.pop()?;
        self.main.push(restored);
        self.main.last().map(String::as_str)
    }

    /// Empty both sequences.
    pub fn clear(&mut self) {
        self.main.clear();
        self.redo.clear();
    }

    /// Visited states, oldest first.
    pub fn visited(&self) -> &[String] {
        &self.main
    }

    /// States popped by undo, most recently undone last.
    pub fn undone(&self) -> &[String] {
        &self.redo
    }
}
