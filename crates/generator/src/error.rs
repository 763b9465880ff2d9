use std::time::Duration;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur when invoking the external generator
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The generator command could not be started
    #[error("Failed to spawn generator command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The generator process exited with a non-zero status
    #[error("Generator exited with code {code:?}")]
    NonZeroExit { code: Option<i32> },

    /// The generator did not respond within the deadline
    #[error("Generator call timed out after {after:?}")]
    TimedOut { after: Duration },

    /// IO error while talking to the generator process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The call was refused before spawning: the estimated prompt cost
    /// exceeds the remaining session budget
    #[error("Token budget exhausted: required {required}, available {available}")]
    BudgetExhausted { required: u64, available: u64 },
}

impl GeneratorError {
    /// Whether this failure is a pre-flight budget rejection rather than a
    /// generator malfunction.
    #[must_use]
    pub const fn is_budget_exhausted(&self) -> bool {
        matches!(self, Self::BudgetExhausted { .. })
    }
}
