//! # Saga Store
//!
//! File layout and persistence for a novel project.
//!
//! A project directory holds three subdirectories:
//!
//! ```text
//! <project>/
//!     chapters/    chapter_001_opening.md, chapter_002_*.md, ...
//!     summaries/   summary_001-010.md, ...
//!     settings/    characters.json, worldview.json, ...
//! ```
//!
//! Chapter files embed a zero-padded 3-digit chapter number; the store
//! resolves "chapter N" to the first matching file in sorted order. Summary
//! artifacts are named by the zero-padded chapter range they cover and are
//! never overwritten once written.

mod error;
mod range;
mod settings;
mod store;

pub use error::{Result, StoreError};
pub use range::ChapterRange;
pub use settings::ProjectSettings;
pub use store::{FsProjectStore, ProjectStore};
