//! Declarative machine configuration.
//!
//! A [`MachineConfig`] names the starting state and maps every state name to
//! its outgoing transition table (event name to destination state name). The
//! configuration is data, not behavior: it can be written out as JSON,
//! assembled with the [builder](crate::builder), or declared inline with the
//! [`machine_config!`](crate::machine_config) macro.
//!
//! The JSON shape:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle": { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```

mod table;

pub use table::OrderedMap;

use crate::builder::MachineConfigBuilder;
use serde::{Deserialize, Serialize};

/// Complete configuration for a [`StateMachine`](crate::StateMachine).
///
/// The configuration is never validated for internal consistency: `initial`
/// may name a state absent from `states`, and transition destinations are
/// not required to be configured states. Membership checks happen lazily
/// when the machine moves.
///
/// # Example
///
/// ```rust
/// use switchyard::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.states.contains_key("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the state the machine starts in.
    pub initial: String,
    /// Every configured state, keyed by name, in declaration order.
    pub states: OrderedMap<StateDef>,
}

impl MachineConfig {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Start a fluent [`MachineConfigBuilder`].
    pub fn builder() -> MachineConfigBuilder {
        MachineConfigBuilder::new()
    }
}

/// A single state's configuration: its outgoing transition table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name to destination state name, in declaration order.
    /// Omitted in JSON means the state has no outgoing transitions.
    #[serde(default)]
    pub transitions: OrderedMap<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_wire_format() {
        let config = MachineConfig::from_json(
            r#"{
                "initial": "idle",
                "states": {
                    "idle": { "transitions": { "start": "running" } },
                    "running": { "transitions": { "stop": "idle", "pause": "paused" } },
                    "paused": { "transitions": { "resume": "running" } }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(
            config.states.keys().collect::<Vec<_>>(),
            vec!["idle", "running", "paused"]
        );
        assert_eq!(
            config.states.get("running").unwrap().transitions.get("pause"),
            Some(&"paused".to_owned())
        );
    }

    #[test]
    fn transitions_default_to_empty() {
        let config = MachineConfig::from_json(
            r#"{ "initial": "done", "states": { "done": {} } }"#,
        )
        .unwrap();

        assert!(config.states.get("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = MachineConfig::from_json(
            r#"{
                "initial": "a",
                "states": {
                    "b": { "transitions": { "go": "a" } },
                    "a": { "transitions": {} }
                }
            }"#,
        )
        .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let reparsed = MachineConfig::from_json(&json).unwrap();

        assert_eq!(reparsed, config);
        // Declaration order survives the round trip.
        assert_eq!(reparsed.states.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn initial_need_not_be_a_configured_state() {
        let config = MachineConfig::from_json(
            r#"{ "initial": "ghost", "states": { "real": {} } }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "ghost");
        assert!(!config.states.contains_key("ghost"));
    }
}
