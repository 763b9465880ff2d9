use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Configuration for the session token budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Hard token limit for the external generator session
    pub session_token_limit: u64,

    /// Reserved headroom kept unused to absorb estimation error
    pub safety_margin: u64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            session_token_limit: 32_000,
            safety_margin: 7_000,
        }
    }
}

impl BudgetConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.safety_margin >= self.session_token_limit {
            return Err(format!(
                "safety_margin ({}) must be below session_token_limit ({})",
                self.safety_margin, self.session_token_limit
            ));
        }
        Ok(())
    }
}

/// Snapshot of session token accounting. Recomputed on each query, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub used: u64,
    pub available: u64,
    pub limit: u64,
    pub safety_margin: u64,
}

/// Cumulative token accounting for one generator session.
///
/// `available = limit - safety_margin - used` (saturating). The used counter
/// is atomic so in-flight summarization requests can record spend without
/// holding a lock.
#[derive(Debug)]
pub struct TokenBudget {
    config: BudgetConfig,
    used: AtomicU64,
}

impl TokenBudget {
    #[must_use]
    pub fn new(config: BudgetConfig) -> Self {
        config
            .validate()
            .expect("Invalid budget configuration provided");
        Self {
            config,
            used: AtomicU64::new(0),
        }
    }

    /// Current usage snapshot.
    #[must_use]
    pub fn usage(&self) -> TokenUsage {
        let used = self.used.load(Ordering::Relaxed);
        TokenUsage {
            used,
            available: self
                .config
                .session_token_limit
                .saturating_sub(self.config.safety_margin)
                .saturating_sub(used),
            limit: self.config.session_token_limit,
            safety_margin: self.config.safety_margin,
        }
    }

    /// Tokens still spendable before hitting the safety margin.
    #[must_use]
    pub fn available(&self) -> u64 {
        self.usage().available
    }

    /// Whether `required` tokens fit the remaining budget. Equality counts
    /// as enough.
    #[must_use]
    pub fn has_enough(&self, required: u64) -> bool {
        required <= self.available()
    }

    /// Record tokens spent by a completed generator call.
    pub fn record(&self, tokens: u64) {
        self.used.fetch_add(tokens, Ordering::Relaxed);
    }

    /// Fraction of the hard limit already consumed, as a percentage.
    #[must_use]
    pub fn used_percent(&self) -> f64 {
        let used = self.used.load(Ordering::Relaxed) as f64;
        used / self.config.session_token_limit as f64 * 100.0
    }

    /// Whether the session has crossed the auto-compaction threshold (75%
    /// of the hard limit).
    #[must_use]
    pub fn needs_compaction(&self) -> bool {
        self.used_percent() > 75.0
    }

    /// Zero the used counter after a successful session compaction.
    pub fn reset(&self) {
        self.used.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub const fn config(&self) -> &BudgetConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        assert!(BudgetConfig::default().validate().is_ok());
    }

    #[test]
    fn margin_at_or_above_limit_is_invalid() {
        let config = BudgetConfig {
            session_token_limit: 1_000,
            safety_margin: 1_000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn available_subtracts_margin_and_used() {
        let budget = TokenBudget::new(BudgetConfig::default());
        assert_eq!(budget.available(), 25_000);

        budget.record(5_000);
        let usage = budget.usage();
        assert_eq!(usage.used, 5_000);
        assert_eq!(usage.available, 20_000);
        assert_eq!(usage.limit, 32_000);
        assert_eq!(usage.safety_margin, 7_000);
    }

    #[test]
    fn has_enough_boundary_is_inclusive() {
        let budget = TokenBudget::new(BudgetConfig::default());
        assert!(budget.has_enough(25_000));
        assert!(!budget.has_enough(25_001));
    }

    #[test]
    fn available_saturates_at_zero() {
        let budget = TokenBudget::new(BudgetConfig::default());
        budget.record(40_000);
        assert_eq!(budget.available(), 0);
        assert!(budget.has_enough(0));
        assert!(!budget.has_enough(1));
    }

    #[test]
    fn compaction_threshold_is_75_percent_of_limit() {
        let budget = TokenBudget::new(BudgetConfig::default());
        budget.record(24_000); // exactly 75%
        assert!(!budget.needs_compaction());
        budget.record(1);
        assert!(budget.needs_compaction());
    }

    #[test]
    fn reset_clears_used() {
        let budget = TokenBudget::new(BudgetConfig::default());
        budget.record(10_000);
        budget.reset();
        assert_eq!(budget.usage().used, 0);
    }
}
