//! Build errors for the configuration builder.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,
}
