//! Switchyard: a minimal finite state machine with linear undo/redo history.
//!
//! A [`StateMachine`] is driven entirely by a declarative [`MachineConfig`]:
//! a starting state and, per state, a table mapping event names to
//! destination state names. The machine tracks a current state, moves either
//! directly ([`StateMachine::change_state`]) or by event
//! ([`StateMachine::trigger`]), and keeps a linear undo/redo [`History`] of
//! every move. Everything is a single in-memory object with synchronous
//! operations; there is no I/O and no locking.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable input, supplied as JSON, via the
//!   [builder], or with the [`machine_config!`] macro
//! - **Moves**: direct jumps and event-driven transitions, both recorded
//! - **History**: linear undo/redo over visited state names; any new move
//!   prunes the pending redo chain
//!
//! # Example
//!
//! ```rust
//! use switchyard::{machine_config, StateMachine};
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     states: {
//!         "idle" => { "start" => "running" },
//!         "running" => { "stop" => "idle", "pause" => "paused" },
//!         "paused" => { "resume" => "running" },
//!     }
//! };
//!
//! let mut machine = StateMachine::new(config);
//!
//! machine.trigger("start")?;
//! machine.trigger("pause")?;
//! assert_eq!(machine.state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "paused");
//!
//! // Which states handle "pause"?
//! assert_eq!(machine.states_on("pause"), ["running"]);
//! # Ok::<(), switchyard::MachineError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfigBuilder, StateBuilder};
pub use config::{MachineConfig, OrderedMap, StateDef};
pub use core::{History, MachineError, StateMachine};
