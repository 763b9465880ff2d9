use crate::error::Result;
use crate::range::ChapterRange;
use std::fs;
use std::path::{Path, PathBuf};

/// File store contract consumed by the summarization pipeline.
///
/// Implemented by [`FsProjectStore`] in production; tests substitute
/// in-memory fakes.
pub trait ProjectStore {
    /// All chapter files in the project, sorted by file name.
    fn list_chapter_files(&self) -> Result<Vec<PathBuf>>;

    /// Content of the chapter with the given number, or `None` when no file
    /// encodes that number. A missing chapter is not an error.
    fn read_chapter(&self, number: u32) -> Result<Option<String>>;

    /// Persisted summary for the range, or `None` when no artifact exists.
    fn read_summary(&self, range: ChapterRange) -> Result<Option<String>>;

    /// Persist a summary artifact for the range and return its path.
    fn write_summary(&self, range: ChapterRange, body: &str) -> Result<PathBuf>;
}

/// Filesystem-backed project store.
///
/// Layout under the project root: `chapters/` holds
/// `chapter_<NNN>_<slug>.md` files, `summaries/` holds
/// `summary_<NNN>-<NNN>.md` artifacts. When several files encode the same
/// chapter number the first in sorted order wins.
pub struct FsProjectStore {
    root: PathBuf,
}

impl FsProjectStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn chapters_dir(&self) -> PathBuf {
        self.root.join("chapters")
    }

    fn summaries_dir(&self) -> PathBuf {
        self.root.join("summaries")
    }

    pub(crate) fn settings_dir(&self) -> PathBuf {
        self.root.join("settings")
    }

    /// Path a summary artifact for `range` lives at.
    #[must_use]
    pub fn summary_path(&self, range: ChapterRange) -> PathBuf {
        self.summaries_dir()
            .join(format!("summary_{}.md", range.label()))
    }

    /// Markdown header line for a summary artifact.
    #[must_use]
    pub fn summary_header(range: ChapterRange) -> String {
        format!("# Summary of chapters {}-{}", range.start(), range.end())
    }

    fn chapter_file_prefix(number: u32) -> String {
        format!("chapter_{number:03}_")
    }
}

impl ProjectStore for FsProjectStore {
    fn list_chapter_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.chapters_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_chapter(&self, number: u32) -> Result<Option<String>> {
        let prefix = Self::chapter_file_prefix(number);
        let matches: Vec<PathBuf> = self
            .list_chapter_files()?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        let Some(first) = matches.first() else {
            return Ok(None);
        };
        if matches.len() > 1 {
            log::debug!(
                "Chapter {number} matches {} files, using {}",
                matches.len(),
                first.display()
            );
        }

        Ok(Some(fs::read_to_string(first)?))
    }

    fn read_summary(&self, range: ChapterRange) -> Result<Option<String>> {
        let path = self.summary_path(range);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_summary(&self, range: ChapterRange, body: &str) -> Result<PathBuf> {
        fs::create_dir_all(self.summaries_dir())?;
        let path = self.summary_path(range);
        let content = format!("{}\n\n{}", Self::summary_header(range), body);
        fs::write(&path, content)?;
        log::info!("Wrote summary artifact {}", path.display());
        Ok(path)
    }
}
