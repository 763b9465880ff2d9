use crate::error::{GeneratorError, Result};
use crate::options::GenerateOptions;
use crate::TextGenerator;
use async_trait::async_trait;
use saga_tokens::{estimate_tokens, TokenBudget};
use std::sync::Arc;

/// Budget-gating wrapper around any [`TextGenerator`].
///
/// Refuses a call outright when the estimated prompt cost alone exceeds the
/// remaining session budget, so no round-trip is spent on a doomed call.
/// When the caller hints at an expected output size, the stricter
/// prompt-plus-output check only warns. Successful calls record their
/// estimated spend into the shared budget.
pub struct GatedGenerator<G> {
    inner: G,
    budget: Arc<TokenBudget>,
}

impl<G: TextGenerator> GatedGenerator<G> {
    pub fn new(inner: G, budget: Arc<TokenBudget>) -> Self {
        Self { inner, budget }
    }

    #[must_use]
    pub fn budget(&self) -> &TokenBudget {
        &self.budget
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for GatedGenerator<G> {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        let required = estimate_tokens(prompt);
        let available = self.budget.available();

        if required > available {
            return Err(GeneratorError::BudgetExhausted {
                required,
                available,
            });
        }

        if let Some(max_output) = options.max_output_tokens {
            if required + max_output > available {
                log::warn!(
                    "Estimated total ({required} prompt + {max_output} output) exceeds available budget ({available})"
                );
            }
        }

        let response = self.inner.generate(prompt, options).await?;
        self.budget.record(required + estimate_tokens(&response));
        Ok(response)
    }
}
