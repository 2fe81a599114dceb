//! Builder for a single state's transition table.

use crate::config::{OrderedMap, StateDef};

/// Builder for one state's outgoing transitions.
///
/// Handed to the closure passed to
/// [`MachineConfigBuilder::state`](crate::builder::MachineConfigBuilder::state).
/// Events are kept in the order they were added.
pub struct StateBuilder {
    transitions: OrderedMap<String>,
}

impl StateBuilder {
    pub(crate) fn new() -> Self {
        Self {
            transitions: OrderedMap::new(),
        }
    }

    /// Register a transition: on `event`, move to `target`.
    ///
    /// Re-registering an event replaces its destination.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target.into());
        self
    }

    pub(crate) fn into_def(self) -> StateDef {
        StateDef {
            transitions: self.transitions,
        }
    }
}
