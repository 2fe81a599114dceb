//! The state machine itself.

use crate::config::MachineConfig;
use crate::core::error::MachineError;
use crate::core::history::History;

/// A finite state machine with linear undo/redo history.
///
/// The machine owns its [`MachineConfig`] for its whole lifetime and never
/// mutates it; all mutation is confined to the current state name and the
/// [`History`]. Operations are synchronous and single-threaded. Sharing one
/// machine across threads needs external mutual exclusion; the type itself
/// holds no locks.
///
/// Membership checks are lazy: the starting state is not validated against
/// the state table (see [`new`](StateMachine::new)), and a triggered
/// transition may land on a name that is not itself a configured state.
/// After such a move every further [`trigger`](StateMachine::trigger) fails
/// with [`MachineError::NoTransition`] while
/// [`change_state`](StateMachine::change_state) still works as usual.
///
/// # Example
///
/// ```rust
/// use switchyard::{machine_config, StateMachine};
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "pause" => "paused" },
///         "paused" => { "resume" => "running" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start")?;
/// machine.trigger("pause")?;
/// assert_eq!(machine.state(), "paused");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "paused");
/// # Ok::<(), switchyard::MachineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    state: String,
    history: History,
}

impl StateMachine {
    /// Create a machine sitting in the configuration's starting state.
    ///
    /// The starting state seeds the history's main sequence. `initial` is
    /// deliberately not checked against the state table: until the first
    /// successful transition, [`state`](StateMachine::state) may return a
    /// name the table does not contain.
    pub fn new(config: MachineConfig) -> Self {
        let state = config.initial.clone();
        let history = History::seeded(&state);
        Self {
            config,
            state,
            history,
        }
    }

    /// Current state name.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The configuration this machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The machine's undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move directly to `target`, recording the move in history.
    ///
    /// Fails with [`MachineError::UnknownState`] when `target` is not a
    /// configured state; the machine is left untouched on failure. Success
    /// discards any pending redo chain.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.config.states.contains_key(target) {
            return Err(MachineError::UnknownState {
                name: target.to_owned(),
            });
        }
        self.state = target.to_owned();
        self.history.record(&self.state);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`MachineError::NoTransition`] when the current state has
    /// no transition for `event`, or when the current state itself is not in
    /// the state table; the machine is left untouched on failure.
    ///
    /// The destination is not validated against the state table. Success
    /// records the move and discards any pending redo chain.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let destination = self
            .config
            .states
            .get(&self.state)
            .and_then(|def| def.transitions.get(event))
            .ok_or_else(|| MachineError::NoTransition {
                state: self.state.clone(),
                event: event.to_owned(),
            })?
            .clone();
        self.state = destination;
        self.history.record(&self.state);
        Ok(())
    }

    /// Return to the configuration's starting state.
    ///
    /// Only the current state is rewritten; both history sequences are left
    /// as they are, so history and current state can diverge after a reset.
    pub fn reset(&mut self) {
        self.state = self.config.initial.clone();
    }

    /// All configured state names, in configuration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.config.states.keys().collect()
    }

    /// Configured state names whose transition table handles `event`,
    /// in configuration order.
    pub fn states_on(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(name, _)| name)
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false`, with nothing changed, when there is no earlier
    /// entry to return to.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.state = previous.to_owned();
                true
            }
            None => false,
        }
    }

    /// Replay the most recently undone state.
    ///
    /// Returns `false`, with nothing changed, when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                self.state = restored.to_owned();
                true
            }
            None => false,
        }
    }

    /// Empty both history sequences, leaving the current state untouched.
    ///
    /// Afterwards `undo` and `redo` report `false` until new moves are
    /// recorded.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
