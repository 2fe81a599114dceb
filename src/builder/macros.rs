//! Macro for declaring machine configurations inline.

/// Declare a [`MachineConfig`](crate::MachineConfig) as a literal.
///
/// The layout mirrors the JSON wire format: a starting state plus a block
/// of states, each with its `event => destination` transitions. States and
/// transitions keep their written order.
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
///         "running" => { "stop" => "idle" },
///     }
/// };
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.state_names(), ["idle", "running"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = $crate::config::OrderedMap::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::config::OrderedMap::new();
            $(
                transitions.insert($event, ::std::string::String::from($target));
            )*
            states.insert($state, $crate::config::StateDef { transitions });
        )*
        $crate::config::MachineConfig {
            initial: ::std::string::String::from($initial),
            states,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::config::MachineConfig;

    #[test]
    fn macro_builds_full_config() {
        let config = machine_config! {
            initial: "idle",
            states: {
                "idle" => { "start" => "running" },
                "running" => { "stop" => "idle", "pause" => "paused" },
                "paused" => { "resume" => "running" },
            }
        };

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
    fn macro_allows_states_without_transitions() {
        let config = machine_config! {
            initial: "done",
            states: {
                "done" => {},
            }
        };

        assert!(config.states.get("done").unwrap().transitions.is_empty());
    }

    #[test]
    fn macro_matches_parsed_json() {
        let declared = machine_config! {
            initial: "a",
            states: {
                "a" => { "next" => "b" },
                "b" => {},
            }
        };

        let parsed = MachineConfig::from_json(
            r#"{
                "initial": "a",
                "states": {
                    "a": { "transitions": { "next": "b" } },
                    "b": { "transitions": {} }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(declared, parsed);
    }
}
