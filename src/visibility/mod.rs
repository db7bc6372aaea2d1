//! View visibility state and its controller.

pub mod controller;

pub use controller::{ViewVisibility, VisibilityController};
