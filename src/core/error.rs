//! Errors raised by machine operations.

use thiserror::Error;

/// Failures from [`StateMachine`](crate::StateMachine) operations.
///
/// Both variants are raised synchronously before any mutation, so a failed
/// operation leaves the machine exactly as it was. The offending names are
/// carried so callers can report or match on them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// `change_state` was asked for a name absent from the state table.
    #[error("unknown state `{name}`")]
    UnknownState { name: String },

    /// `trigger` found no transition for the event in the current state,
    /// including the case where the current state itself is unconfigured.
    #[error("no transition for event `{event}` in state `{state}`")]
    NoTransition { state: String, event: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_offending_names() {
        let error = MachineError::UnknownState {
            name: "limbo".to_owned(),
        };
        assert_eq!(error.to_string(), "unknown state `limbo`");

        let error = MachineError::NoTransition {
            state: "idle".to_owned(),
            event: "jump".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "no transition for event `jump` in state `idle`"
        );
    }
}
