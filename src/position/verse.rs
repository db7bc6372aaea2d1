//! Verse ranges and the composite position value.
//!
//! A `Position` is the canonical "where we are": chapter, inclusive
//! verse range, and the optionally-selected current verse. The
//! synchronization core never stores one of its own; the two views are
//! the only sources of truth and these types exist so views, bookmarks
//! and tests share one vocabulary.

use crate::{error::PositionError, position::ChapterId};

/// Inclusive start/end pair of verse indices within a chapter.
///
/// Fields are public because views receive raw `(from, to)` pairs from
/// user input; [`VerseRange::new`] is the checked path and
/// [`VerseRange::is_valid`] re-checks a hand-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    /// First verse of the range (inclusive).
    pub from: u32,
    /// Last verse of the range (inclusive).
    pub to: u32,
}

impl VerseRange {
    /// Creates a range, rejecting `from > to`.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::InvalidVerseRange` when the start lies
    /// beyond the end.
    pub fn new(from: u32, to: u32) -> Result<Self, PositionError> {
        let range = Self { from, to };
        if !range.is_valid() {
            return Err(PositionError::InvalidVerseRange { from, to });
        }
        Ok(range)
    }

    /// Whether the range is ordered (`from <= to`).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.from <= self.to
    }

    /// Whether `verse` falls inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, verse: u32) -> bool {
        self.from <= verse && verse <= self.to
    }
}

/// A full position: chapter, active verse range, current verse.
///
/// `current_verse` may be unset; the reciter's "show current verse"
/// mode starts without a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Chapter the range belongs to.
    pub chapter: ChapterId,
    /// Verses currently displayed or queued for recitation.
    pub range: VerseRange,
    /// Verse presently highlighted or recited, if any.
    pub current_verse: Option<u32>,
}

impl Position {
    /// Creates a position, rejecting a current verse outside the range.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::InvalidVerseRange` for an unordered range
    /// and `PositionError::VerseOutsideRange` for a set current verse
    /// that the range does not contain.
    pub fn new(
        chapter: ChapterId,
        range: VerseRange,
        current_verse: Option<u32>,
    ) -> Result<Self, PositionError> {
        if !range.is_valid() {
            return Err(PositionError::InvalidVerseRange {
                from: range.from,
                to: range.to,
            });
        }
        if let Some(verse) = current_verse
            && !range.contains(verse)
        {
            return Err(PositionError::VerseOutsideRange {
                verse,
                from: range.from,
                to: range.to,
            });
        }
        Ok(Self {
            chapter,
            range,
            current_verse,
        })
    }

    /// Whether the position satisfies `from <= current <= to` (an unset
    /// current verse is always positionally valid).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.range.is_valid()
            && self
                .current_verse
                .is_none_or(|verse| self.range.contains(verse))
    }
}
