//! View capability traits and the position-change event vocabulary.
//!
//! The host owns the actual reciter and reader widgets; the plugin core
//! sees them only through the traits defined here.

pub mod events;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use {
    events::{PositionChange, ViewOrigin},
    traits::{PositionView, ReaderView, ReciterView},
};
