use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` pair of chapter numbers summarized together.
///
/// Chapter numbers start at 1. Rendered zero-padded to 3 digits
/// (`"001-010"`) to match chapter and summary file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterRange {
    start: u32,
    end: u32,
}

impl ChapterRange {
    /// Create a range, validating `1 <= start <= end`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 || end < start {
            return Err(StoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single chapter.
    pub fn single(chapter: u32) -> Result<Self> {
        Self::new(chapter, chapter)
    }

    /// The summary window containing `current_chapter`.
    ///
    /// Windows tile the chapter sequence in blocks of `window_size`
    /// starting at 1: chapter 12 with window 10 falls in `[11, 20]`, and
    /// chapter 10 in `[1, 10]`. The window end is clamped to the current
    /// chapter so an unfinished window covers only what exists.
    pub fn window_for(current_chapter: u32, window_size: u32) -> Result<Self> {
        if current_chapter == 0 || window_size == 0 {
            return Err(StoreError::InvalidRange {
                start: current_chapter,
                end: window_size,
            });
        }
        let start = (current_chapter - 1) / window_size * window_size + 1;
        let end = (start + window_size - 1).min(current_chapter);
        Self::new(start, end)
    }

    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Chapter numbers in ascending order.
    pub fn chapters(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    /// Number of chapters the range spans.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Zero-padded label used in summary file names, e.g. `"001-010"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:03}-{:03}", self.start, self.end)
    }
}

impl std::fmt::Display for ChapterRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_start_and_inverted_ranges() {
        assert!(ChapterRange::new(0, 5).is_err());
        assert!(ChapterRange::new(5, 4).is_err());
        assert!(ChapterRange::new(5, 5).is_ok());
    }

    #[test]
    fn label_is_zero_padded() {
        let range = ChapterRange::new(1, 10).unwrap();
        assert_eq!(range.label(), "001-010");
        let range = ChapterRange::new(101, 110).unwrap();
        assert_eq!(range.label(), "101-110");
    }

    #[test]
    fn window_arithmetic_table() {
        // (current chapter, window size) -> (start, end)
        let cases = [
            (1, 10, 1, 1),
            (9, 10, 1, 9),
            (10, 10, 1, 10), // exact multiple stays in its own window
            (11, 10, 11, 11),
            (12, 10, 11, 12),
            (20, 10, 11, 20),
            (21, 10, 21, 21),
            (25, 10, 21, 25),
            (12, 5, 11, 12),
            (15, 5, 11, 15),
            (16, 5, 16, 16),
            (1, 1, 1, 1),
            (7, 1, 7, 7),
        ];
        for (current, window, start, end) in cases {
            let range = ChapterRange::window_for(current, window).unwrap();
            assert_eq!(
                (range.start(), range.end()),
                (start, end),
                "current={current} window={window}"
            );
        }
    }

    #[test]
    fn window_rejects_zero_inputs() {
        assert!(ChapterRange::window_for(0, 10).is_err());
        assert!(ChapterRange::window_for(5, 0).is_err());
    }

    #[test]
    fn chapters_iterates_ascending() {
        let range = ChapterRange::new(3, 6).unwrap();
        let nums: Vec<u32> = range.chapters().collect();
        assert_eq!(nums, vec![3, 4, 5, 6]);
        assert_eq!(range.count(), 4);
    }
}
