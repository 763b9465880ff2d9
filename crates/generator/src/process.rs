use crate::error::{GeneratorError, Result};
use crate::options::GenerateOptions;
use crate::TextGenerator;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Generator adapter that shells out to an external AI CLI tool.
///
/// The prompt is written to the child's stdin; the response is whatever the
/// child prints to stdout, trimmed. A non-zero exit status, a missing
/// binary, or an elapsed deadline all surface as errors. The child is
/// killed when a timeout abandons it.
pub struct ProcessGenerator {
    command: String,
    args: Vec<String>,
    default_timeout: Option<Duration>,
}

impl ProcessGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            default_timeout: None,
        }
    }

    /// Extra arguments passed to every invocation
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Deadline applied when the caller supplies none
    #[must_use]
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    async fn run(&self, prompt: &str) -> Result<String> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| GeneratorError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(prompt.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                log::debug!("Generator stderr: {}", stderr.trim());
            }
            return Err(GeneratorError::NonZeroExit {
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl TextGenerator for ProcessGenerator {
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String> {
        let deadline = options.timeout.or(self.default_timeout);
        match deadline {
            Some(after) => tokio::time::timeout(after, self.run(prompt))
                .await
                .map_err(|_| GeneratorError::TimedOut { after })?,
            None => self.run(prompt).await,
        }
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_prompt_through_cat() {
        let generator = ProcessGenerator::new("cat");
        let reply = generator
            .generate("prompt text\n", &GenerateOptions::default())
            .await
            .unwrap();
        assert_eq!(reply, "prompt text");
    }

    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let generator = ProcessGenerator::new("false");
        let err = generator
            .generate("ignored", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::NonZeroExit { .. }));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let generator = ProcessGenerator::new("saga-test-no-such-binary");
        let err = generator
            .generate("ignored", &GenerateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Spawn { .. }));
    }

    #[tokio::test]
    async fn deadline_elapsed_is_a_timeout() {
        let generator = ProcessGenerator::new("sleep").with_args(["5"]);
        let options = GenerateOptions::default().with_timeout(Duration::from_millis(50));
        let err = generator.generate("ignored", &options).await.unwrap_err();
        assert!(matches!(err, GeneratorError::TimedOut { .. }));
    }

    #[tokio::test]
    async fn call_timeout_overrides_default() {
        let generator = ProcessGenerator::new("sleep")
            .with_args(["5"])
            .with_default_timeout(Duration::from_secs(30));
        let options = GenerateOptions::default().with_timeout(Duration::from_millis(50));
        let err = generator.generate("ignored", &options).await.unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TimedOut { after } if after == Duration::from_millis(50)
        ));
    }
}
