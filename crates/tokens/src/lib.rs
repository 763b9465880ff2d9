//! # Saga Tokens
//!
//! Heuristic token estimation and session budget accounting for the
//! external text generator.
//!
//! The estimator approximates language-model token cost from a language-mix
//! heuristic (CJK ideographs vs. ASCII words vs. whitespace); the budget
//! tracks cumulative session spend against a configured limit and safety
//! margin, so callers can refuse a generator call before paying for it.
//!
//! ## Example
//!
//! ```rust
//! use saga_tokens::{estimate_tokens, BudgetConfig, TokenBudget};
//!
//! let budget = TokenBudget::new(BudgetConfig::default());
//! let cost = estimate_tokens("The hermit closed the door behind her.");
//! assert!(budget.has_enough(cost));
//! ```

mod budget;
mod estimator;

pub use budget::{BudgetConfig, TokenBudget, TokenUsage};
pub use estimator::estimate_tokens;
