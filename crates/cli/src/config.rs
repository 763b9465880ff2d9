use anyhow::{Context, Result};
use saga_tokens::BudgetConfig;
use saga_summarizer::SummarizerConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Name of the optional per-project configuration file
pub const CONFIG_FILE: &str = "saga.toml";

const DEFAULT_GENERATOR_COMMAND: &str = "qwen";
const DEFAULT_GENERATOR_TIMEOUT_SECS: u64 = 120;

/// Effective configuration: defaults, overridden by the project's
/// `saga.toml`, overridden by command-line flags.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub summarizer: SummarizerConfig,
    pub budget: BudgetConfig,
    pub generator_command: String,
    pub generator_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            summarizer: SummarizerConfig::default(),
            budget: BudgetConfig::default(),
            generator_command: DEFAULT_GENERATOR_COMMAND.to_string(),
            generator_timeout: Duration::from_secs(DEFAULT_GENERATOR_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    summary: SummaryTable,
    budget: BudgetTable,
    generator: GeneratorTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SummaryTable {
    chunk_threshold: Option<usize>,
    window_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BudgetTable {
    session_token_limit: Option<u64>,
    safety_margin: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GeneratorTable {
    command: Option<String>,
    timeout_secs: Option<u64>,
}

/// Load the effective configuration for a project directory.
///
/// A missing `saga.toml` yields the defaults; a present but malformed one
/// is an error.
pub fn load(project_dir: &Path) -> Result<AppConfig> {
    let path = project_dir.join(CONFIG_FILE);
    let mut config = AppConfig::default();

    if path.is_file() {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", path.display()))?;

        if let Some(threshold) = file.summary.chunk_threshold {
            config.summarizer.chunk_threshold = threshold;
        }
        if let Some(window) = file.summary.window_size {
            config.summarizer.window_size = window;
        }
        if let Some(limit) = file.budget.session_token_limit {
            config.budget.session_token_limit = limit;
        }
        if let Some(margin) = file.budget.safety_margin {
            config.budget.safety_margin = margin;
        }
        if let Some(command) = file.generator.command {
            config.generator_command = command;
        }
        if let Some(secs) = file.generator.timeout_secs {
            config.generator_timeout = Duration::from_secs(secs);
        }
        log::debug!("Loaded config overrides from {}", path.display());
    }

    config
        .summarizer
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid [summary] configuration")?;
    config
        .budget
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid [budget] configuration")?;

    Ok(config)
}
