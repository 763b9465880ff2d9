use crate::error::{GeneratorError, Result};
use async_trait::async_trait;
use saga_tokens::TokenBudget;
use tokio::process::Command;

/// External session-compaction capability.
#[async_trait]
pub trait SessionCompactor: Send + Sync {
    /// Run compaction; `Ok(true)` when the session was compacted.
    async fn compact(&self) -> Result<bool>;
}

/// Compactor that invokes the AI CLI tool's `/compress` command.
pub struct ProcessCompactor {
    command: String,
}

impl ProcessCompactor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

#[async_trait]
impl SessionCompactor for ProcessCompactor {
    async fn compact(&self) -> Result<bool> {
        let status = Command::new(&self.command)
            .arg("/compress")
            .status()
            .await
            .map_err(|source| GeneratorError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        Ok(status.success())
    }
}

/// Compact the session when usage has crossed the 75% threshold.
///
/// Below the threshold this is a no-op returning `Ok(true)`. A successful
/// compaction zeroes the budget's used counter.
pub async fn auto_compact(budget: &TokenBudget, compactor: &dyn SessionCompactor) -> Result<bool> {
    if !budget.needs_compaction() {
        return Ok(true);
    }

    log::info!(
        "Token usage at {:.2}%, compacting session",
        budget.used_percent()
    );
    let compacted = compactor.compact().await?;
    if compacted {
        budget.reset();
    } else {
        log::warn!("Session compaction reported failure");
    }
    Ok(compacted)
}
