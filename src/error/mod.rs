//! Error handling system using `thiserror` and `anyhow`.
//!
//! Domain errors carry precise types for callers that need to match on
//! them; the plugin initialization seam propagates operational context
//! through `anyhow` instead.

pub mod domain;

pub use domain::{PositionError, Result};
