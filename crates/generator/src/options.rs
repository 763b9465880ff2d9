use std::time::Duration;

/// Per-call options for a generator invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Deadline for the call; overrides the adapter's default when set.
    /// A call past its deadline is treated as failed.
    pub timeout: Option<Duration>,

    /// Hint for the expected output size in tokens. The budget gate uses
    /// it for a stricter non-fatal check; adapters may ignore it.
    pub max_output_tokens: Option<u64>,
}

impl GenerateOptions {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, tokens: u64) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}
