//! Builder API for ergonomic configuration construction.
//!
//! The JSON wire format is the canonical way to supply a configuration;
//! this module covers the in-code path: a fluent [`MachineConfigBuilder`]
//! and the declarative [`machine_config!`](crate::machine_config) macro.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::MachineConfigBuilder;
pub use state::StateBuilder;
