//! Geometry types and the layout coordination logic.

pub mod coordinator;
pub mod geometry;

pub use {
    coordinator::{FrameLayout, LayoutCoordinator, compute_layout},
    geometry::{Rect, Size},
};
