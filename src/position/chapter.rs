//! Chapter identifiers from the fixed text catalogue.
//!
//! The catalogue itself (names, verse counts, ordering) is owned by the
//! host's data layer; this core only carries the identifier around and
//! never reinterprets it.

use crate::error::PositionError;

/// Number of chapters in the externally-defined catalogue.
pub const CHAPTER_COUNT: u16 = 129;

/// Opaque identifier of one chapter of the text corpus (1-based).
///
/// Constructed only through [`ChapterId::new`], so a value of this type
/// is always inside the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(u16);

impl ChapterId {
    /// Creates a chapter identifier, rejecting values outside the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `PositionError::ChapterOutOfCatalogue` if `index` is zero
    /// or beyond [`CHAPTER_COUNT`].
    pub fn new(index: u16) -> Result<Self, PositionError> {
        if index == 0 || index > CHAPTER_COUNT {
            return Err(PositionError::ChapterOutOfCatalogue(index));
        }
        Ok(Self(index))
    }

    /// Returns the 1-based catalogue index.
    #[must_use]
    pub fn index(self) -> u16 {
        self.0
    }
}
