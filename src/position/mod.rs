//! Position value types shared by views, bookmarks and the coordinator.
//!
//! There is deliberately no standalone position store: the two views
//! hold the only copies, and the coordinator routes between them.

pub mod chapter;
pub mod verse;

pub use {
    chapter::{CHAPTER_COUNT, ChapterId},
    verse::{Position, VerseRange},
};
