use crate::cache::SummaryCache;
use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizeError};
use crate::prompt::build_summary_prompt;
use saga_chunker::{Chunker, ChunkerConfig};
use saga_generator::{GenerateOptions, GeneratorError, TextGenerator};
use saga_store::{ChapterRange, ProjectStore};
use std::path::PathBuf;

/// Outcome of a smart-mode summary request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// A new artifact was generated and persisted
    Created { range: ChapterRange, path: PathBuf },

    /// An artifact for this exact range already exists; nothing was
    /// generated and the file was left untouched
    AlreadyExists { range: ChapterRange },
}

/// Recursive chapter summarizer.
///
/// Owns the chunking logic and the exact-text summary cache; the file
/// store and the external generator are injected per call.
pub struct Summarizer {
    config: SummarizerConfig,
    chunker: Chunker,
    cache: SummaryCache,
}

impl Summarizer {
    #[must_use]
    pub fn new(config: SummarizerConfig) -> Self {
        config
            .validate()
            .expect("Invalid summarizer configuration provided");
        let chunker = Chunker::new(ChunkerConfig {
            max_chunk_chars: config.chunk_threshold,
        });
        let cache = SummaryCache::new(config.cache_capacity);
        Self {
            config,
            chunker,
            cache,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    /// Summarize every chapter in `range`, chunking and reducing as needed.
    ///
    /// Chapters without a file are skipped; a range where nothing resolves
    /// is [`SummarizeError::NoChapters`]. Generator failures degrade to
    /// placeholder text except budget exhaustion, which propagates.
    pub async fn summarize_range(
        &self,
        store: &dyn ProjectStore,
        generator: &dyn TextGenerator,
        range: ChapterRange,
    ) -> Result<String> {
        let chapters = self.load_chapters(store, range)?;
        if chapters.is_empty() {
            return Err(SummarizeError::NoChapters { range });
        }
        log::info!(
            "Summarizing {} of {} requested chapters in {range}",
            chapters.len(),
            range.count()
        );

        let combined = chapters.join("\n\n");
        if combined.chars().count() <= self.config.chunk_threshold {
            return match self.cached_generate(generator, &combined).await {
                Ok(summary) => Ok(summary),
                Err(err) if err.is_budget_exhausted() => Err(err.into()),
                Err(err) => {
                    log::error!("Direct summarization failed: {err}");
                    Ok(self.placeholder(&combined))
                }
            };
        }

        let chunks = self.chunker.split(&combined)?;
        log::info!(
            "Combined text ({} chars) split into {} chunks",
            combined.chars().count(),
            chunks.len()
        );

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            match self.cached_generate(generator, &chunk.content).await {
                Ok(summary) => summaries.push(summary),
                Err(err) if err.is_budget_exhausted() => return Err(err.into()),
                Err(err) => {
                    log::error!("Summarization of chunk {} failed: {err}", chunk.index);
                    summaries.push(self.placeholder(&chunk.content));
                }
            }
        }

        let combined_summaries = summaries.join("\n\n");
        if combined_summaries.chars().count() <= self.config.chunk_threshold {
            return Ok(combined_summaries);
        }

        // Chunk summaries are still too long; try one reduction pass over
        // the whole set, keeping the unreduced text when that fails.
        match self.cached_generate(generator, &combined_summaries).await {
            Ok(summary) => Ok(summary),
            Err(err) if err.is_budget_exhausted() => Err(err.into()),
            Err(err) => {
                log::error!("Final reduction pass failed: {err}");
                Ok(combined_summaries)
            }
        }
    }

    /// Smart mode: summarize the window containing `current_chapter`,
    /// skipping generation when the artifact for that window already
    /// exists.
    pub async fn generate_summary(
        &self,
        store: &dyn ProjectStore,
        generator: &dyn TextGenerator,
        current_chapter: u32,
    ) -> Result<SummaryOutcome> {
        let range = ChapterRange::window_for(current_chapter, self.config.window_size)?;

        if store.read_summary(range)?.is_some() {
            log::info!("Summary artifact for chapters {range} already exists, skipping");
            return Ok(SummaryOutcome::AlreadyExists { range });
        }

        let body = self.summarize_range(store, generator, range).await?;
        let path = store.write_summary(range, &body)?;
        Ok(SummaryOutcome::Created { range, path })
    }

    fn load_chapters(&self, store: &dyn ProjectStore, range: ChapterRange) -> Result<Vec<String>> {
        let mut chapters = Vec::new();
        for number in range.chapters() {
            match store.read_chapter(number)? {
                Some(text) => chapters.push(text),
                None => log::debug!("Chapter {number} has no file, skipping"),
            }
        }
        Ok(chapters)
    }

    /// Summarize `text` through the cache: a hit returns without touching
    /// the generator; a miss calls it and caches the result on success.
    async fn cached_generate(
        &self,
        generator: &dyn TextGenerator,
        text: &str,
    ) -> std::result::Result<String, GeneratorError> {
        if let Some(hit) = self.cache.get(text) {
            log::debug!("Summary cache hit ({} chars)", text.chars().count());
            return Ok(hit);
        }

        let prompt = build_summary_prompt(text);
        let summary = generator.generate(&prompt, &GenerateOptions::default()).await?;
        self.cache.insert(text.to_string(), summary.clone());
        Ok(summary)
    }

    fn placeholder(&self, text: &str) -> String {
        let excerpt: String = text.chars().take(self.config.excerpt_chars).collect();
        format!("[summary unavailable: {excerpt}...]")
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}
