//! Cross-view synchronization: the heart of the plugin.

pub mod coordinator;

pub use coordinator::SyncCoordinator;
