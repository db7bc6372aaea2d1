//! Domain-specific error types using `thiserror`.
//!
//! This module defines the error enum for the one domain that can fail
//! below the plugin seam: position value construction. Settings
//! persistence errors live next to the settings manager in
//! [`crate::config::settings`].

use std::result::Result as StdResult;

use {anyhow::Error, thiserror::Error};

/// Errors raised when constructing position values.
///
/// The synchronization core itself never validates positions (it is a
/// pure router); these errors only surface from the checked constructors
/// on the position value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Chapter identifier outside the fixed catalogue.
    #[error("Chapter {0} is outside the catalogue (1..={max})", max = crate::position::CHAPTER_COUNT)]
    ChapterOutOfCatalogue(u16),
    /// Verse range with a start beyond its end.
    #[error("Invalid verse range: {from}..={to}")]
    InvalidVerseRange { from: u32, to: u32 },
    /// Current verse outside the active range.
    #[error("Current verse {verse} is outside range {from}..={to}")]
    VerseOutsideRange { verse: u32, from: u32, to: u32 },
}

/// Operational error context propagation with `anyhow`.
///
/// Used at the plugin initialization seam, where failures need rich
/// context but no type-driven handling.
pub type Result<T> = StdResult<T, Error>;
