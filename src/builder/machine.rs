//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{MachineConfig, OrderedMap, StateDef};

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// Validation covers required fields only: an initial state must be named
/// and at least one state must be declared. Whether `initial` is itself a
/// declared state is deliberately not checked, matching the lazy membership
/// policy of [`StateMachine`](crate::StateMachine).
///
/// # Example
///
/// ```rust
/// use switchyard::{MachineConfig, StateMachine};
///
/// let config = MachineConfig::builder()
///     .initial("idle")
///     .state("idle", |s| s.on("start", "running"))
///     .state("running", |s| s.on("stop", "idle").on("pause", "paused"))
///     .state("paused", |s| s.on("resume", "running"))
///     .build()?;
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.state(), "idle");
/// # Ok::<(), switchyard::BuildError>(())
/// ```
pub struct MachineConfigBuilder {
    initial: Option<String>,
    states: OrderedMap<StateDef>,
}

impl MachineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: OrderedMap::new(),
        }
    }

    /// Set the starting state's name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state and configure its transitions.
    ///
    /// States keep declaration order; redeclaring a name replaces its
    /// transition table in place.
    pub fn state(
        mut self,
        name: impl Into<String>,
        configure: impl FnOnce(StateBuilder) -> StateBuilder,
    ) -> Self {
        let def = configure(StateBuilder::new()).into_def();
        self.states.insert(name, def);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for MachineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
