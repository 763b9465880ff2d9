//! # Saga Generator
//!
//! The external AI text generator behind a capability-typed interface.
//!
//! The summarizer only ever sees [`TextGenerator`]: text in, text out, may
//! fail or time out. [`ProcessGenerator`] adapts the concrete CLI tool
//! (prompt on stdin, response on stdout); [`GatedGenerator`] layers the
//! session token budget in front of any generator, refusing calls that
//! would blow the budget before a process is ever spawned.
//!
//! ## Example
//!
//! ```no_run
//! use saga_generator::{GenerateOptions, ProcessGenerator, TextGenerator};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> saga_generator::Result<()> {
//!     let generator = ProcessGenerator::new("qwen")
//!         .with_default_timeout(Duration::from_secs(120));
//!     let reply = generator
//!         .generate("Summarize: ...", &GenerateOptions::default())
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod compact;
mod error;
mod gate;
mod options;
mod process;

pub use compact::{auto_compact, ProcessCompactor, SessionCompactor};
pub use error::{GeneratorError, Result};
pub use gate::GatedGenerator;
pub use options::GenerateOptions;
pub use process::ProcessGenerator;

use async_trait::async_trait;

/// Opaque external text generator: prompt in, text out, may fail.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String>;
}
