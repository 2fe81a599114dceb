//! Core machine types.
//!
//! This module contains the machine itself and its two supporting types:
//! the linear undo/redo [`History`] and the [`MachineError`] failures. All
//! logic here is synchronous and mutates a single in-memory object; there
//! is no I/O and no locking.

mod error;
mod history;
mod machine;

pub use error::MachineError;
pub use history::History;
pub use machine::StateMachine;
